//! Printer HTTP handlers.
//!
//! ```text
//! POST /printers/ {"location":"Lobby","pricePerPage":0.10,"ownerId":1}
//! GET  /printers/
//! ```

use actix_web::web;
use serde::{Deserialize, Serialize};

use crate::domain::{Printer, PrinterDraft, PrinterId, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Printer creation body. `ownerId` is not checked against registered users.
#[derive(Debug, Clone, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrinterRequest {
    /// Where the printer can be found.
    #[schema(example = "Lobby")]
    pub location: Option<String>,
    /// Price charged per printed page. Defaults to zero.
    #[serde(default)]
    #[schema(example = 0.10)]
    pub price_per_page: f64,
    /// Whether colour output is available. Defaults to false.
    #[serde(default)]
    pub supports_color: bool,
    /// Free-text notes from the owner.
    pub additional_notes: Option<String>,
    /// User offering the printer.
    #[schema(value_type = Option<i64>, example = 1)]
    pub owner_id: Option<UserId>,
}

impl From<PrinterRequest> for PrinterDraft {
    fn from(value: PrinterRequest) -> Self {
        Self {
            location: value.location,
            price_per_page: value.price_per_page,
            supports_color: value.supports_color,
            additional_notes: value.additional_notes,
            owner_id: value.owner_id,
        }
    }
}

/// A stored printer.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrinterResponse {
    /// Assigned identifier.
    #[schema(value_type = i64, example = 1)]
    pub id: PrinterId,
    /// Where the printer can be found.
    pub location: Option<String>,
    /// Price charged per printed page.
    pub price_per_page: f64,
    /// Whether colour output is available.
    pub supports_color: bool,
    /// Free-text notes from the owner.
    pub additional_notes: Option<String>,
    /// User offering the printer.
    #[schema(value_type = Option<i64>)]
    pub owner_id: Option<UserId>,
}

impl From<Printer> for PrinterResponse {
    fn from(printer: Printer) -> Self {
        let (id, details) = printer.into_parts();
        Self {
            id,
            location: details.location,
            price_per_page: details.price_per_page,
            supports_color: details.supports_color,
            additional_notes: details.additional_notes,
            owner_id: details.owner_id,
        }
    }
}

/// Register a printer and return it with its assigned id.
#[utoipa::path(
    post,
    path = "/printers/",
    request_body = PrinterRequest,
    responses(
        (status = 200, description = "Created printer", body = PrinterResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["printers"],
    operation_id = "createPrinter"
)]
pub async fn create_printer(
    state: web::Data<HttpState>,
    payload: web::Json<PrinterRequest>,
) -> ApiResult<web::Json<PrinterResponse>> {
    let printer = state.printers.create(payload.into_inner().into()).await?;
    Ok(web::Json(printer.into()))
}

/// List every printer.
#[utoipa::path(
    get,
    path = "/printers/",
    responses(
        (status = 200, description = "Printers", body = [PrinterResponse]),
        (status = 503, description = "Storage unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["printers"],
    operation_id = "listPrinters"
)]
pub async fn list_printers(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<PrinterResponse>>> {
    let printers = state.printers.list_all().await?;
    Ok(web::Json(
        printers.into_iter().map(PrinterResponse::from).collect(),
    ))
}
