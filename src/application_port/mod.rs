mod navigation_service;
mod view_loader;

pub use navigation_service::*;
pub use view_loader::*;
