pub mod hld1s;
pub mod middleware;
pub mod ohlds;
pub mod router;

pub use middleware::*;
pub use router::build_router;
