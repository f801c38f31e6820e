//! End-to-end tests over the full route table.
//!
//! Requests run through `Trace` and `routes::configure` exactly as the server
//! wires them, backed by the in-memory repositories unless a test substitutes
//! a failing driven port.

use std::collections::HashSet;
use std::sync::Arc;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use async_trait::async_trait;
use print_broker::Trace;
use print_broker::domain::ports::{UserRepository, UserRepositoryError};
use print_broker::domain::{
    PrintOrderService, PrinterService, TRACE_ID_HEADER, User, UserDraft, UserService,
};
use print_broker::inbound::http::health::HealthState;
use print_broker::inbound::http::routes;
use print_broker::inbound::http::state::HttpState;
use print_broker::outbound::memory::{
    InMemoryPrintOrderRepository, InMemoryPrinterRepository, InMemoryUserRepository,
};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

struct UnreachableUsers;

#[async_trait]
impl UserRepository for UnreachableUsers {
    async fn insert(&self, _draft: &UserDraft) -> Result<User, UserRepositoryError> {
        Err(UserRepositoryError::connection("connection refused"))
    }

    async fn list_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        Err(UserRepositoryError::query("relation \"users\" does not exist"))
    }
}

#[fixture]
fn state() -> HttpState {
    HttpState::new(
        Arc::new(UserService::new(Arc::new(InMemoryUserRepository::new()))),
        Arc::new(PrinterService::new(Arc::new(InMemoryPrinterRepository::new()))),
        Arc::new(PrintOrderService::new(Arc::new(
            InMemoryPrintOrderRepository::new(),
        ))),
    )
}

async fn init(
    state: HttpState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    actix_test::init_service(
        App::new()
            .app_data(web::Data::new(HealthState::new()))
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .configure(routes::configure),
    )
    .await
}

async fn post_json(
    app: &impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
    uri: &str,
    body: Value,
) -> Value {
    let request = actix_test::TestRequest::post()
        .uri(uri)
        .set_json(body)
        .to_request();
    let response = actix_test::call_service(app, request).await;
    assert_eq!(response.status(), StatusCode::OK, "POST {uri}");
    actix_test::read_body_json(response).await
}

async fn get_json(
    app: &impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
    uri: &str,
) -> Value {
    let request = actix_test::TestRequest::get().uri(uri).to_request();
    let response = actix_test::call_service(app, request).await;
    assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
    actix_test::read_body_json(response).await
}

#[rstest]
#[actix_web::test]
async fn user_printer_order_walkthrough(state: HttpState) {
    let app = init(state).await;

    let user = post_json(&app, "/users/register", json!({ "username": "ada" })).await;
    assert_eq!(user["id"], 1);

    let printer = post_json(
        &app,
        "/printers/",
        json!({
            "location": "Lobby",
            "pricePerPage": 0.10,
            "supportsColor": false,
            "ownerId": 1
        }),
    )
    .await;
    assert_eq!(printer["id"], 1);
    assert_eq!(printer["ownerId"], 1);

    let order = post_json(
        &app,
        "/orders/",
        json!({
            "fileName": "doc.pdf",
            "pageCount": 5,
            "color": false,
            "status": "PENDING",
            "userId": 1,
            "printerId": 1
        }),
    )
    .await;
    assert_eq!(order["id"], 1);

    let orders = get_json(&app, "/orders/user/1").await;
    assert_eq!(
        orders,
        json!([{
            "id": 1,
            "fileName": "doc.pdf",
            "pageCount": 5,
            "color": false,
            "status": "PENDING",
            "userId": 1,
            "printerId": 1
        }])
    );
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(4)]
#[actix_web::test]
async fn listing_users_returns_every_registration(state: HttpState, #[case] count: usize) {
    let app = init(state).await;
    let mut created = Vec::new();
    for index in 0..count {
        let payload = json!({
            "username": format!("user{index}"),
            "email": format!("user{index}@example.com"),
            "firstName": "Test",
            "lastName": null
        });
        created.push(post_json(&app, "/users/register", payload).await);
    }

    let listed = get_json(&app, "/users").await;

    assert_eq!(listed, Value::Array(created.clone()));
    let ids: HashSet<i64> = created.iter().filter_map(|user| user["id"].as_i64()).collect();
    assert_eq!(ids.len(), count, "identifiers are distinct");
}

#[rstest]
#[actix_web::test]
async fn printer_with_unknown_owner_is_listed(state: HttpState) {
    let app = init(state).await;

    post_json(&app, "/printers", json!({ "location": "Annex", "ownerId": 404 })).await;
    let printers = get_json(&app, "/printers/").await;

    assert_eq!(
        printers,
        json!([{
            "id": 1,
            "location": "Annex",
            "pricePerPage": 0.0,
            "supportsColor": false,
            "additionalNotes": null,
            "ownerId": 404
        }])
    );
}

#[rstest]
#[actix_web::test]
async fn orders_are_filtered_by_user(state: HttpState) {
    let app = init(state).await;
    for (user_id, file_name) in [(1, "one.pdf"), (2, "two.pdf"), (1, "three.pdf")] {
        post_json(
            &app,
            "/orders",
            json!({ "fileName": file_name, "userId": user_id, "printerId": 7 }),
        )
        .await;
    }

    let first = get_json(&app, "/orders/user/1").await;
    let second = get_json(&app, "/orders/user/2").await;
    let unknown = get_json(&app, "/orders/user/99").await;

    let names = |orders: &Value| -> Vec<String> {
        orders
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|order| order["fileName"].as_str().map(str::to_owned))
                    .collect()
            })
            .unwrap_or_default()
    };
    assert_eq!(names(&first), vec!["one.pdf", "three.pdf"]);
    assert_eq!(names(&second), vec!["two.pdf"]);
    assert_eq!(unknown, json!([]));
}

#[rstest]
#[case("/users/register")]
#[case("/printers/")]
#[case("/orders/")]
#[actix_web::test]
async fn malformed_json_is_an_invalid_request(state: HttpState, #[case] uri: &str) {
    let app = init(state).await;
    let request = actix_test::TestRequest::post()
        .uri(uri)
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"username\":")
        .to_request();

    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace-id header on error responses");
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["traceId"], header.as_str());
}

#[rstest]
#[actix_web::test]
async fn storage_failures_use_the_error_envelope(state: HttpState) {
    let app = init(HttpState {
        users: Arc::new(UserService::new(Arc::new(UnreachableUsers))),
        ..state
    })
    .await;

    let register = actix_test::TestRequest::post()
        .uri("/users/register")
        .set_json(json!({ "username": "ada" }))
        .to_request();
    let unavailable = actix_test::call_service(&app, register).await;
    assert_eq!(unavailable.status(), StatusCode::SERVICE_UNAVAILABLE);
    let unavailable_body: Value = actix_test::read_body_json(unavailable).await;
    assert_eq!(unavailable_body["code"], "service_unavailable");

    let list = actix_test::TestRequest::get().uri("/users/").to_request();
    let failed = actix_test::call_service(&app, list).await;
    assert_eq!(failed.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = actix_test::read_body_json(failed).await;
    assert_eq!(body["message"], "Internal server error");
    assert!(body.get("details").is_none_or(Value::is_null));
}

#[rstest]
#[actix_web::test]
async fn unknown_routes_fall_through_to_404(state: HttpState) {
    let app = init(state).await;
    let request = actix_test::TestRequest::get().uri("/users/1").to_request();

    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().contains_key(TRACE_ID_HEADER));
}
