//! Route table for the HTTP adapter.
//!
//! ```text
//! POST /users/register          register_user
//! GET  /users/                  list_users
//! POST /printers/               create_printer
//! GET  /printers/               list_printers
//! POST /orders/                 create_order
//! GET  /orders/user/{userId}    list_orders_by_user
//! GET  /health/ready            ready
//! GET  /health/live             live
//! ```
//!
//! Collection routes answer both with and without the trailing slash.

use actix_web::web;

use crate::inbound::http::extractors::{json_config, path_config};
use crate::inbound::http::health::{live, ready};
use crate::inbound::http::orders::{create_order, list_orders_by_user};
use crate::inbound::http::printers::{create_printer, list_printers};
use crate::inbound::http::users::{list_users, register_user};

const COLLECTION: [&str; 2] = ["", "/"];

/// Register every handler plus the extractor configuration.
///
/// The caller supplies `web::Data<HttpState>` and `web::Data<HealthState>`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use print_broker::inbound::http::routes::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(
            web::scope("/users")
                .route("/register", web::post().to(register_user))
                .service(web::resource(COLLECTION).route(web::get().to(list_users))),
        )
        .service(
            web::scope("/printers").service(
                web::resource(COLLECTION)
                    .route(web::post().to(create_printer))
                    .route(web::get().to(list_printers)),
            ),
        )
        .service(
            web::scope("/orders")
                .service(web::resource(COLLECTION).route(web::post().to(create_order)))
                .route("/user/{userId}", web::get().to(list_orders_by_user)),
        )
        .route("/health/ready", web::get().to(ready))
        .route("/health/live", web::get().to(live));
}
