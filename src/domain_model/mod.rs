mod route;
mod view;

pub use route::*;
pub use view::*;
