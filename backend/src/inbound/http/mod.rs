//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod extractors;
pub mod health;
pub mod orders;
pub mod printers;
pub mod routes;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

pub use error::ApiResult;
