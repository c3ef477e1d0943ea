pub mod datetime;
pub mod endpoint;
pub mod error;
pub mod store;
