//! Print order HTTP handlers.
//!
//! ```text
//! POST /orders/ {"fileName":"doc.pdf","pageCount":5,"userId":1,"printerId":1}
//! GET  /orders/user/{userId}
//! ```

use actix_web::web;
use serde::{Deserialize, Serialize};

use crate::domain::{PrintOrder, PrintOrderDraft, PrintOrderId, PrinterId, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Order creation body. Neither reference is checked for existence.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrintOrderRequest {
    /// Name of the document to print.
    #[schema(example = "doc.pdf")]
    pub file_name: Option<String>,
    /// Pages requested. Defaults to zero and is not range checked.
    #[serde(default)]
    #[schema(example = 5)]
    pub page_count: i32,
    /// Whether colour output was requested.
    #[serde(default)]
    pub color: bool,
    /// Uninterpreted status label.
    #[schema(example = "PENDING")]
    pub status: Option<String>,
    /// User placing the order.
    #[schema(value_type = i64, example = 1)]
    pub user_id: UserId,
    /// Printer the order targets.
    #[schema(value_type = i64, example = 1)]
    pub printer_id: PrinterId,
}

impl From<PrintOrderRequest> for PrintOrderDraft {
    fn from(value: PrintOrderRequest) -> Self {
        Self {
            file_name: value.file_name,
            page_count: value.page_count,
            color: value.color,
            status: value.status,
            user_id: value.user_id,
            printer_id: value.printer_id,
        }
    }
}

/// A stored print order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrintOrderResponse {
    /// Assigned identifier.
    #[schema(value_type = i64, example = 1)]
    pub id: PrintOrderId,
    /// Name of the document to print.
    pub file_name: Option<String>,
    /// Pages requested, as submitted.
    pub page_count: i32,
    /// Whether colour output was requested.
    pub color: bool,
    /// Uninterpreted status label.
    pub status: Option<String>,
    /// User placing the order.
    #[schema(value_type = i64)]
    pub user_id: UserId,
    /// Printer the order targets.
    #[schema(value_type = i64)]
    pub printer_id: PrinterId,
}

impl From<PrintOrder> for PrintOrderResponse {
    fn from(order: PrintOrder) -> Self {
        let (id, details) = order.into_parts();
        Self {
            id,
            file_name: details.file_name,
            page_count: details.page_count,
            color: details.color,
            status: details.status,
            user_id: details.user_id,
            printer_id: details.printer_id,
        }
    }
}

/// Submit a print order and return it with its assigned id.
#[utoipa::path(
    post,
    path = "/orders/",
    request_body = PrintOrderRequest,
    responses(
        (status = 200, description = "Created order", body = PrintOrderResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["orders"],
    operation_id = "createPrintOrder"
)]
pub async fn create_order(
    state: web::Data<HttpState>,
    payload: web::Json<PrintOrderRequest>,
) -> ApiResult<web::Json<PrintOrderResponse>> {
    let order = state.orders.create(payload.into_inner().into()).await?;
    Ok(web::Json(order.into()))
}

/// List the orders placed by a user; empty when there are none.
#[utoipa::path(
    get,
    path = "/orders/user/{userId}",
    params(("userId" = i64, Path, description = "Identifier of the ordering user")),
    responses(
        (status = 200, description = "Orders placed by the user", body = [PrintOrderResponse]),
        (status = 400, description = "Invalid user id", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["orders"],
    operation_id = "listOrdersByUser"
)]
pub async fn list_orders_by_user(
    state: web::Data<HttpState>,
    user_id: web::Path<UserId>,
) -> ApiResult<web::Json<Vec<PrintOrderResponse>>> {
    let orders = state.orders.list_by_user(user_id.into_inner()).await?;
    Ok(web::Json(
        orders.into_iter().map(PrintOrderResponse::from).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::Error;
    use crate::domain::ports::MockPrintOrderManagement;
    use crate::inbound::http::extractors::{json_config, path_config};
    use crate::inbound::http::test_utils::{in_memory_state, state_with_orders};
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use mockall::predicate::eq;
    use serde_json::{Value, json};

    fn test_app(
        state: HttpState,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(state))
            .app_data(json_config())
            .app_data(path_config())
            .route("/orders/", web::post().to(create_order))
            .route("/orders/user/{userId}", web::get().to(list_orders_by_user))
    }

    fn order_body(user_id: i64, file_name: &str) -> Value {
        json!({
            "fileName": file_name,
            "pageCount": 5,
            "color": false,
            "status": "PENDING",
            "userId": user_id,
            "printerId": 1
        })
    }

    #[actix_web::test]
    async fn listing_returns_only_the_users_orders() {
        let app = actix_test::init_service(test_app(in_memory_state())).await;
        for (user_id, file_name) in [(1, "a.pdf"), (2, "b.pdf"), (1, "c.pdf")] {
            let request = actix_test::TestRequest::post()
                .uri("/orders/")
                .set_json(order_body(user_id, file_name))
                .to_request();
            actix_test::call_service(&app, request).await;
        }

        let request = actix_test::TestRequest::get()
            .uri("/orders/user/1")
            .to_request();
        let orders: Vec<PrintOrderResponse> =
            actix_test::call_and_read_body_json(&app, request).await;

        let names: Vec<_> = orders
            .iter()
            .map(|order| order.file_name.as_deref())
            .collect();
        assert_eq!(names, vec![Some("a.pdf"), Some("c.pdf")]);
        assert!(orders.iter().all(|order| order.user_id == UserId::new(1)));
    }

    #[actix_web::test]
    async fn unknown_user_yields_empty_list() {
        let app = actix_test::init_service(test_app(in_memory_state())).await;
        let request = actix_test::TestRequest::get()
            .uri("/orders/user/77")
            .to_request();

        let body: Value = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn negative_page_count_is_stored_as_submitted() {
        let app = actix_test::init_service(test_app(in_memory_state())).await;
        let mut body = order_body(1, "odd.pdf");
        body["pageCount"] = json!(-3);
        let request = actix_test::TestRequest::post()
            .uri("/orders/")
            .set_json(body)
            .to_request();

        let order: PrintOrderResponse = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(order.page_count, -3);
    }

    #[actix_web::test]
    async fn missing_user_reference_is_rejected() {
        let app = actix_test::init_service(test_app(in_memory_state())).await;
        let request = actix_test::TestRequest::post()
            .uri("/orders/")
            .set_json(json!({ "fileName": "doc.pdf", "printerId": 1 }))
            .to_request();

        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn non_numeric_user_id_is_rejected() {
        let app = actix_test::init_service(test_app(in_memory_state())).await;
        let request = actix_test::TestRequest::get()
            .uri("/orders/user/ada")
            .to_request();

        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], "invalid_request");
    }

    #[actix_web::test]
    async fn path_id_reaches_the_use_case() {
        let mut orders = MockPrintOrderManagement::new();
        orders
            .expect_list_by_user()
            .with(eq(UserId::new(9)))
            .times(1)
            .return_once(|_| Err(Error::service_unavailable("down")));
        let app = actix_test::init_service(test_app(state_with_orders(Arc::new(orders)))).await;

        let request = actix_test::TestRequest::get()
            .uri("/orders/user/9")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
