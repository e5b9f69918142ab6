pub mod root;
pub mod song;
pub use root::{health_check_route, root_route};
pub use song::sarkilar_route;
