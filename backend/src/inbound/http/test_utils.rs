//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use crate::domain::ports::{PrintOrderManagement, PrinterManagement, UserManagement};
use crate::domain::{PrintOrderService, PrinterService, UserService};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::{
    InMemoryPrintOrderRepository, InMemoryPrinterRepository, InMemoryUserRepository,
};

/// State whose use-cases run against fresh in-memory repositories.
#[must_use]
pub fn in_memory_state() -> HttpState {
    HttpState::new(
        Arc::new(UserService::new(Arc::new(InMemoryUserRepository::new()))),
        Arc::new(PrinterService::new(Arc::new(InMemoryPrinterRepository::new()))),
        Arc::new(PrintOrderService::new(Arc::new(
            InMemoryPrintOrderRepository::new(),
        ))),
    )
}

/// In-memory state with the user use-case replaced.
#[must_use]
pub fn state_with_users(users: Arc<dyn UserManagement>) -> HttpState {
    HttpState {
        users,
        ..in_memory_state()
    }
}

/// In-memory state with the printer use-case replaced.
#[must_use]
pub fn state_with_printers(printers: Arc<dyn PrinterManagement>) -> HttpState {
    HttpState {
        printers,
        ..in_memory_state()
    }
}

/// In-memory state with the print order use-case replaced.
#[must_use]
pub fn state_with_orders(orders: Arc<dyn PrintOrderManagement>) -> HttpState {
    HttpState {
        orders,
        ..in_memory_state()
    }
}
