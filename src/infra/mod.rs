mod view_source_fake;
mod view_source_fs;

pub use view_source_fake::*;
pub use view_source_fs::*;
