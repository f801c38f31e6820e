//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the inbound layer together with
//! the request/response DTOs and the error envelope wrappers. The document is
//! served by Swagger UI in debug builds and printed by the `openapi-dump`
//! binary.

use crate::inbound::http::orders::{PrintOrderRequest, PrintOrderResponse};
use crate::inbound::http::printers::{PrinterRequest, PrinterResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::{UserRequest, UserResponse};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Print broker API",
        description = "Register users and printers and submit print orders."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::register_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::printers::create_printer,
        crate::inbound::http::printers::list_printers,
        crate::inbound::http::orders::create_order,
        crate::inbound::http::orders::list_orders_by_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserRequest,
        UserResponse,
        PrinterRequest,
        PrinterResponse,
        PrintOrderRequest,
        PrintOrderResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "users", description = "User registration and listing"),
        (name = "printers", description = "Printer registration and listing"),
        (name = "orders", description = "Print order submission and lookup"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
