pub mod datetime;
pub mod header_service;
pub mod range_service;

pub use header_service::*;
pub use range_service::*;
