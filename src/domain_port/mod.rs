mod view_source;

pub use view_source::*;
