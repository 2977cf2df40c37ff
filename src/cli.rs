//! Command-line configuration

use crate::engine::TopicKey;
use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable holding the explain endpoint base URL
pub const EXPLAIN_URL_ENV: &str = "STACKLENS_EXPLAIN_URL";

#[derive(Debug, Parser)]
#[command(
    name = "stacklens",
    version,
    about = "Illustrative stack, pointer and recursion visualizer for C teaching snippets"
)]
pub struct Cli {
    /// Topic to open: pointers or recursion
    #[arg(short, long, default_value_t = TopicKey::Pointers)]
    pub topic: TopicKey,

    /// Seed the working source from this file instead of the topic default
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Base URL of the explain service (POST <url>/api/explain)
    #[arg(long, value_name = "URL", env = EXPLAIN_URL_ENV)]
    pub explain_url: Option<String>,

    /// Visualize once, print plain text to stdout and exit
    #[arg(long)]
    pub print: bool,

    /// With --print, also print an explanation
    #[arg(long, requires = "print")]
    pub explain: bool,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read source file '{path}': {source}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Cli {
    /// The working source: the file's contents if one was given
    pub fn load_source(&self) -> Result<Option<String>, CliError> {
        let Some(path) = &self.file else {
            return Ok(None);
        };

        std::fs::read_to_string(path)
            .map(Some)
            .map_err(|source| CliError::ReadSource {
                path: path.clone(),
                source,
            })
    }
}
