//! User HTTP handlers.
//!
//! ```text
//! POST /users/register {"username":"ada","email":"ada@example.com"}
//! GET  /users/
//! ```

use actix_web::web;
use serde::{Deserialize, Serialize};

use crate::domain::{User, UserDraft, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Registration body. Every field is optional and stored as submitted.
#[derive(Debug, Clone, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    /// Login handle.
    #[schema(example = "ada")]
    pub username: Option<String>,
    /// Contact address.
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
}

impl From<UserRequest> for UserDraft {
    fn from(value: UserRequest) -> Self {
        Self {
            username: value.username,
            email: value.email,
            first_name: value.first_name,
            last_name: value.last_name,
        }
    }
}

/// A stored user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Assigned identifier.
    #[schema(value_type = i64, example = 1)]
    pub id: UserId,
    /// Login handle.
    pub username: Option<String>,
    /// Contact address.
    pub email: Option<String>,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let (id, profile) = user.into_parts();
        Self {
            id,
            username: profile.username,
            email: profile.email,
            first_name: profile.first_name,
            last_name: profile.last_name,
        }
    }
}

/// Register a user and return it with its assigned id.
#[utoipa::path(
    post,
    path = "/users/register",
    request_body = UserRequest,
    responses(
        (status = 200, description = "Registered user", body = UserResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "registerUser"
)]
pub async fn register_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRequest>,
) -> ApiResult<web::Json<UserResponse>> {
    let user = state.users.register(payload.into_inner().into()).await?;
    Ok(web::Json(user.into()))
}

/// List every registered user.
#[utoipa::path(
    get,
    path = "/users/",
    responses(
        (status = 200, description = "Users", body = [UserResponse]),
        (status = 503, description = "Storage unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users.list_all().await?;
    Ok(web::Json(users.into_iter().map(UserResponse::from).collect()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::Error;
    use crate::domain::ports::MockUserManagement;
    use crate::inbound::http::test_utils::{in_memory_state, state_with_users};
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
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
            .route("/users/register", web::post().to(register_user))
            .route("/users/", web::get().to(list_users))
    }

    #[actix_web::test]
    async fn register_assigns_fresh_ids() {
        let app = actix_test::init_service(test_app(in_memory_state())).await;

        let mut ids = Vec::new();
        for name in ["ada", "grace"] {
            let request = actix_test::TestRequest::post()
                .uri("/users/register")
                .set_json(json!({ "username": name }))
                .to_request();
            let user: UserResponse = actix_test::call_and_read_body_json(&app, request).await;
            assert_eq!(user.username.as_deref(), Some(name));
            ids.push(user.id);
        }

        assert_ne!(ids[0], ids[1]);
    }

    #[actix_web::test]
    async fn client_supplied_id_is_ignored() {
        let app = actix_test::init_service(test_app(in_memory_state())).await;
        let request = actix_test::TestRequest::post()
            .uri("/users/register")
            .set_json(json!({ "id": 99, "email": "ada@example.com" }))
            .to_request();

        let user: UserResponse = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(user.id, UserId::new(1));
        assert_eq!(user.email.as_deref(), Some("ada@example.com"));
        assert_eq!(user.first_name, None);
    }

    #[actix_web::test]
    async fn list_returns_registered_users_as_camel_case() {
        let app = actix_test::init_service(test_app(in_memory_state())).await;
        let register = actix_test::TestRequest::post()
            .uri("/users/register")
            .set_json(json!({ "firstName": "Ada", "lastName": "Lovelace" }))
            .to_request();
        actix_test::call_service(&app, register).await;

        let list = actix_test::TestRequest::get().uri("/users/").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, list).await;

        assert_eq!(
            body,
            json!([{
                "id": 1,
                "username": null,
                "email": null,
                "firstName": "Ada",
                "lastName": "Lovelace"
            }])
        );
    }

    #[actix_web::test]
    async fn unavailable_storage_maps_to_503() {
        let mut users = MockUserManagement::new();
        users
            .expect_list_all()
            .times(1)
            .return_once(|| Err(Error::service_unavailable("user repository unavailable")));
        let app = actix_test::init_service(test_app(state_with_users(Arc::new(users)))).await;

        let request = actix_test::TestRequest::get().uri("/users/").to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], "service_unavailable");
    }
}
