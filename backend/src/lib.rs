//! Print broker backend library.
//!
//! Users register, printers are listed with per-page pricing and users submit
//! print orders against a printer. The crate follows a ports-and-adapters
//! layout: [`domain`] holds entities and use-cases, [`inbound`] the Actix
//! handlers and [`outbound`] the storage adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
