//! Main TUI application state and logic

use crate::engine::{Session, TopicKey, Visualization};
use crate::explain::{ExplainService, Explanation};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Memory,
    Output,
    Explanation,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: source -> output -> memory -> explanation)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Memory,
            FocusedPane::Memory => FocusedPane::Explanation,
            FocusedPane::Explanation => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Explanation,
            FocusedPane::Output => FocusedPane::Source,
            FocusedPane::Memory => FocusedPane::Output,
            FocusedPane::Explanation => FocusedPane::Memory,
        }
    }
}

/// The main application state
pub struct App {
    /// Topic, working source and last result
    pub session: Session,

    /// Where explain requests go
    explainer: Box<dyn ExplainService>,

    /// Last explanation, cleared whenever the source is reloaded
    pub explanation: Option<Explanation>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub memory_scroll: usize,
    pub output_scroll: usize,
    pub explain_scroll: usize,

    /// Keys go to the source text instead of the command bindings
    pub editing: bool,

    /// Byte offset of the edit cursor in the working source
    cursor: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(session: Session, explainer: Box<dyn ExplainService>) -> Self {
        App {
            session,
            explainer,
            explanation: None,
            focused_pane: FocusedPane::Source,
            source_scroll: 0,
            memory_scroll: 0,
            output_scroll: 0,
            explain_scroll: 0,
            editing: false,
            cursor: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Lines the last visualization was built from
    fn marked_lines(&self) -> Vec<usize> {
        match self.session.rendered() {
            Some(Visualization::Pointers(p)) => {
                let mut lines: Vec<usize> = p
                    .declarations
                    .iter()
                    .map(|d| d.location.line)
                    .chain(p.prints.iter().map(|s| s.location.line))
                    .collect();
                lines.sort_unstable();
                lines.dedup();
                lines
            }
            _ => Vec::new(),
        }
    }

    /// 0-based (row, column) of the edit cursor, in characters
    fn cursor_position(&self) -> (usize, usize) {
        let before = &self.session.source()[..self.cursor];
        let row = before.matches('\n').count();
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        (row, before[line_start..].chars().count())
    }

    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // 4 panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[0]);

        // Left column: Source (top) | Output (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[0]);

        // Right column: Memory (top) | Explanation (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[1]);

        let marked = self.marked_lines();
        let cursor = self.editing.then(|| self.cursor_position());
        let rendered = self.session.rendered();

        super::panes::render_source_pane(
            frame,
            left_rows[0],
            self.session.topic_info().title,
            self.session.source(),
            &marked,
            cursor,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_terminal_pane(
            frame,
            left_rows[1],
            rendered,
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        super::panes::render_memory_pane(
            frame,
            right_rows[0],
            rendered,
            self.focused_pane == FocusedPane::Memory,
            &mut self.memory_scroll,
        );

        super::panes::render_explain_pane(
            frame,
            right_rows[1],
            self.explanation.as_ref(),
            self.focused_pane == FocusedPane::Explanation,
            &mut self.explain_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.session.topic(),
            rendered.is_some(),
            self.editing,
        );
    }

    fn focused_scroll_mut(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Source => &mut self.source_scroll,
            FocusedPane::Memory => &mut self.memory_scroll,
            FocusedPane::Output => &mut self.output_scroll,
            FocusedPane::Explanation => &mut self.explain_scroll,
        }
    }

    fn reset_scroll(&mut self) {
        self.source_scroll = 0;
        self.memory_scroll = 0;
        self.output_scroll = 0;
        self.explain_scroll = 0;
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.editing {
            self.handle_edit_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('1') => self.load_topic(TopicKey::Pointers),
            KeyCode::Char('2') => self.load_topic(TopicKey::Recursion),
            KeyCode::Char('v') | KeyCode::Enter => self.visualize(),
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('e') => self.explain(),
            KeyCode::Char('i') => self.start_editing(),
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => {
                let scroll = self.focused_scroll_mut();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                let scroll = self.focused_scroll_mut();
                *scroll = scroll.saturating_add(1);
            }
            _ => {}
        }
    }

    /// Keys while the source pane is in edit mode
    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.editing = false;
                self.status_message = "Source edited, press v to visualize".to_string();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert_char(c)
            }
            KeyCode::Enter => self.insert_char('\n'),
            KeyCode::Tab => {
                for _ in 0..4 {
                    self.insert_char(' ');
                }
            }
            KeyCode::Backspace => self.delete_before_cursor(),
            KeyCode::Left => {
                if let Some(c) = self.session.source()[..self.cursor].chars().next_back() {
                    self.cursor -= c.len_utf8();
                }
            }
            KeyCode::Right => {
                if let Some(c) = self.session.source()[self.cursor..].chars().next() {
                    self.cursor += c.len_utf8();
                }
            }
            KeyCode::Home => {
                self.cursor = self.session.source()[..self.cursor]
                    .rfind('\n')
                    .map_or(0, |i| i + 1);
            }
            KeyCode::End => {
                let rest = &self.session.source()[self.cursor..];
                self.cursor += rest.find('\n').unwrap_or(rest.len());
            }
            _ => {}
        }
    }

    /// Enter edit mode with the cursor at the end of the source
    fn start_editing(&mut self) {
        self.editing = true;
        self.focused_pane = FocusedPane::Source;
        self.cursor = self.session.source().len();
        self.status_message = "Editing source, Esc to finish".to_string();
    }

    fn insert_char(&mut self, c: char) {
        let mut source = self.session.source().to_string();
        source.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        self.session.set_source(source);
    }

    fn delete_before_cursor(&mut self) {
        let mut source = self.session.source().to_string();
        if let Some(c) = source[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
            source.remove(self.cursor);
            self.session.set_source(source);
        }
    }

    fn load_topic(&mut self, topic: TopicKey) {
        self.session.load_topic(topic);
        self.cursor = 0;
        self.explanation = None;
        self.reset_scroll();
        self.status_message = format!("Loaded {}", self.session.topic_info().title);
    }

    fn visualize(&mut self) {
        let summary = match self.session.visualize() {
            Visualization::Pointers(p) => {
                format!("{} variable(s) on the stack", p.layout.len())
            }
            Visualization::Recursion(r) => {
                format!("{} call frame(s), {} pattern", r.frames.len(), r.classification)
            }
        };
        self.memory_scroll = 0;
        self.output_scroll = 0;
        self.status_message = format!("Visualized: {}", summary);
    }

    fn reset(&mut self) {
        self.session.reset();
        self.cursor = 0;
        self.reset_scroll();
        self.status_message = "Source reset to topic default".to_string();
    }

    fn explain(&mut self) {
        let explanation = self.session.explain(self.explainer.as_ref());
        self.status_message = if explanation.is_fallback() {
            "Explain service unavailable, showing offline explanation".to_string()
        } else {
            "Explanation received".to_string()
        };
        self.explanation = Some(explanation);
        self.explain_scroll = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::topics;
    use crate::explain::OfflineExplainService;

    fn app(topic: TopicKey) -> App {
        App::new(Session::new(topic), Box::new(OfflineExplainService))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_edit_mode_changes_source_and_reset_restores_it() {
        let default_source = topics::lookup(TopicKey::Pointers).default_source;
        let mut app = app(TopicKey::Pointers);

        press(&mut app, KeyCode::Char('i'));
        assert!(app.editing);

        // Command keys are plain text while editing
        type_text(&mut app, "qr");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Left);
        type_text(&mut app, "v");

        assert!(!app.should_quit);
        assert_eq!(app.session.source(), format!("{}qvr", default_source));

        press(&mut app, KeyCode::Esc);
        assert!(!app.editing);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.session.source(), default_source);
    }

    #[test]
    fn test_edited_source_is_visualized() {
        let mut app = app(TopicKey::Pointers);

        press(&mut app, KeyCode::Char('i'));
        // Clear the default snippet, then type a new one
        while !app.session.source().is_empty() {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "int n = 7;");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "printf(\"%d\", n);");
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('v'));

        match app.session.rendered() {
            Some(Visualization::Pointers(p)) => {
                assert_eq!(p.layout.len(), 1);
                assert_eq!(p.output.display_lines(), vec!["%d"]);
            }
            other => panic!("expected pointer visualization, got {:?}", other),
        }
        assert_eq!(app.marked_lines(), vec![1, 2]);
    }

    #[test]
    fn test_cursor_movement_and_position() {
        let mut app = App::new(
            Session::with_source(TopicKey::Pointers, "ab\ncd".to_string()),
            Box::new(OfflineExplainService),
        );

        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.cursor_position(), (1, 2));

        press(&mut app, KeyCode::Home);
        assert_eq!(app.cursor_position(), (1, 0));
        press(&mut app, KeyCode::Left);
        assert_eq!(app.cursor_position(), (0, 2));
        press(&mut app, KeyCode::Home);
        type_text(&mut app, "é");
        assert_eq!(app.cursor_position(), (0, 1));
        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);

        assert_eq!(app.session.source(), "éab\ncd");
        assert_eq!(app.cursor_position(), (1, 1));
    }

    #[test]
    fn test_marked_lines_cover_declarations_and_prints() {
        let mut app = app(TopicKey::Pointers);
        assert!(app.marked_lines().is_empty());

        press(&mut app, KeyCode::Char('v'));

        assert_eq!(app.marked_lines(), vec![4, 5, 7, 8, 9, 10]);
    }
}
