//! Two kinds of logging live here: the `tracing` subscriber for process
//! diagnostics, and [`ConsoleLogger`], the tagged console facade gated by
//! development mode. See `bin/logger_demo.rs` for both in action.

mod console;
mod logger;
pub use console::*;
pub use logger::*;

pub use tracing::{debug, error, info, trace, warn};
