//! Extractor configuration shared by every route.
//!
//! Actix answers decoding failures with plain-text bodies by default; these
//! handlers turn them into the JSON error envelope instead.

use std::fmt::Display;

use actix_web::web;
use serde_json::json;

use crate::domain::Error;

/// JSON body extractor that reports decoding failures as `invalid_request`.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "rejected request body");
        rejection("Request body is not valid JSON", &err)
    })
}

/// Path extractor that reports unparsable segments as `invalid_request`.
#[must_use]
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "rejected path parameter");
        rejection("Path parameter is not valid", &err)
    })
}

fn rejection(message: &'static str, reason: &impl Display) -> actix_web::Error {
    Error::invalid_request(message)
        .with_details(json!({ "reason": reason.to_string() }))
        .into()
}
