mod portal_routes;
mod route_table;

pub use portal_routes::*;
pub use route_table::*;
