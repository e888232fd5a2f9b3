//! Terminal falling-block game (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_blockfall::{core,input,term,types}` and adds the
//! binary's configuration and logging setup.

pub mod config;
pub mod logging;

pub use tui_blockfall_core as core;
pub use tui_blockfall_input as input;
pub use tui_blockfall_term as term;
pub use tui_blockfall_types as types;

pub use config::AppConfig;
