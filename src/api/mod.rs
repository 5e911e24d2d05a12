pub mod v1;

mod shell;
pub use shell::*;
