//! # Introduction
//!
//! stacklens takes a short C teaching snippet and draws an *illustrative*
//! picture of what it does at runtime: a stack diagram with addresses and
//! pointer arrows, a simulated console, and for recursion a call stack, call
//! tree and step-by-step trace. Nothing is compiled or executed; the picture
//! is synthesized from pattern matches over the text and is deterministic.
//!
//! ## Pipelines
//!
//! ```text
//! pointers:   Source → Extractors → StackLayout + ConsoleOutput → TUI
//! recursion:  Source → Classification → Frames + Tree + Trace   → TUI
//! ```
//!
//! 1. [`parser`]: tolerant scanner and the declaration / `printf` extractors.
//! 2. [`memory`]: synthetic stack slots and pointer targets.
//! 3. [`terminal`]: simulated console output for `printf` statements.
//! 4. [`recursion`]: pattern classification and canned call traces.
//! 5. [`engine`]: topic registry, pipelines and the [`engine::Session`].
//! 6. [`explain`]: remote explanations with a static fallback.
//! 7. [`ui`]: ratatui-based TUI and plain-text rendering.
//!
//! ## Supported shapes
//!
//! Declarations of the form `type name = expr;` or `type *name = expr;`,
//! `printf("format", args...)` calls, and recursive functions whose name
//! contains `factorial` or `fibonacci`. Everything else degrades to empty
//! results or a generic template.

pub mod cli;
pub mod engine;
pub mod explain;
pub mod memory;
pub mod parser;
pub mod recursion;
pub mod terminal;
pub mod ui;
