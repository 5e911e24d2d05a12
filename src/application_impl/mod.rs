mod navigation_service_impl;
mod view_loader_impl;

pub use navigation_service_impl::*;
pub use view_loader_impl::*;
