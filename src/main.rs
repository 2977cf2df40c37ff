// stacklens: Illustrative stack, pointer and recursion visualizer

use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use stacklens::cli::Cli;
use stacklens::engine::Session;
use stacklens::explain::{ExplainService, HttpExplainService, OfflineExplainService};
use stacklens::ui::{text::render_plain, App};

/// Logs go to stderr. The TUI owns the terminal, so it stays quiet unless
/// RUST_LOG asks otherwise.
fn init_logging(print_mode: bool) {
    let default_filter = if print_mode { "info" } else { "off" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}

fn build_explainer(url: Option<&str>) -> Box<dyn ExplainService> {
    match url.map(HttpExplainService::new) {
        Some(Ok(service)) => {
            tracing::info!(endpoint = service.endpoint(), "using explain service");
            Box::new(service)
        }
        Some(Err(e)) => {
            tracing::warn!(error = %e, "cannot create explain client, explanations will be offline");
            Box::new(OfflineExplainService)
        }
        None => Box::new(OfflineExplainService),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.print);

    let mut session = match cli.load_source()? {
        Some(source) => {
            tracing::info!(topic = %cli.topic, bytes = source.len(), "loaded source file");
            Session::with_source(cli.topic, source)
        }
        None => Session::new(cli.topic),
    };
    let explainer = build_explainer(cli.explain_url.as_deref());

    if cli.print {
        let visualization = session.visualize();
        print!("{}", render_plain(visualization));

        if cli.explain {
            let explanation = session.explain(explainer.as_ref());
            let heading = if explanation.is_fallback() {
                "Explanation (offline)"
            } else {
                "Explanation"
            };
            println!("\n== {} ==\n{}", heading, explanation.text());
        }
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session, explainer);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
