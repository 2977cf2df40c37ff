//! Best-effort statement extraction for C teaching snippets
//!
//! This module pulls the two statement shapes the visualizer needs out of
//! free-form text:
//! - [`lexer`]: tolerant tokenizer (source text → tokens with byte spans)
//! - [`declarations`]: `<type> <*?><name> = <expr>;`
//! - [`prints`]: `printf("<format>", ...)`
//! - [`ast`]: the extracted statement types
//!
//! # Not a parser
//!
//! There is no grammar here. Extractors slide over the token stream and take
//! whatever matches; everything else is skipped. Unparseable input yields
//! empty results, never an error.

pub mod ast;
pub mod declarations;
pub mod lexer;
pub mod prints;

pub use ast::{Declaration, PrintStatement, SourceLocation};
pub use declarations::extract_declarations;
pub use prints::extract_prints;
