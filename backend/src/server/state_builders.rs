//! Adapter selection for the HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use print_broker::domain::{PrintOrderService, PrinterService, UserService};
use print_broker::inbound::http::state::HttpState;
use print_broker::outbound::memory::{
    InMemoryPrintOrderRepository, InMemoryPrinterRepository, InMemoryUserRepository,
};
use print_broker::outbound::persistence::{
    DbPool, DieselPrintOrderRepository, DieselPrinterRepository, DieselUserRepository,
};

use super::ServerConfig;

fn diesel_state(pool: &DbPool) -> HttpState {
    HttpState::new(
        Arc::new(UserService::new(Arc::new(DieselUserRepository::new(
            pool.clone(),
        )))),
        Arc::new(PrinterService::new(Arc::new(DieselPrinterRepository::new(
            pool.clone(),
        )))),
        Arc::new(PrintOrderService::new(Arc::new(
            DieselPrintOrderRepository::new(pool.clone()),
        ))),
    )
}

fn in_memory_state() -> HttpState {
    HttpState::new(
        Arc::new(UserService::new(Arc::new(InMemoryUserRepository::new()))),
        Arc::new(PrinterService::new(Arc::new(InMemoryPrinterRepository::new()))),
        Arc::new(PrintOrderService::new(Arc::new(
            InMemoryPrintOrderRepository::new(),
        ))),
    )
}

/// Build the shared handler state from the configured storage.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL repositories");
            diesel_state(pool)
        }
        None => {
            info!("no database configured; using in-memory repositories");
            in_memory_state()
        }
    };
    web::Data::new(state)
}
