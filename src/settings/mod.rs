//! Settings come from a TOML file chosen by build profile, or `--settings`.
//! See `bin/settings_demo.rs` for a binary that loads them.

mod cli;
pub use clap::Parser;
pub use cli::*;

mod settings;
pub use settings::*;
