//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus
//! - **[`panes`]**: stateless render functions for each visible pane (source,
//!   memory, output, explanation, status bar)
//! - **[`text`]**: unstyled rendering shared by `--print` mode and the panes
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`Session`] and an explain service and call [`App::run`] to start the
//! event loop.
//!
//! [`Session`]: crate::engine::Session
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod text;
pub mod theme;

pub use app::App;
