//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{PrintOrderManagement, PrinterManagement, UserManagement};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User registration and listing.
    pub users: Arc<dyn UserManagement>,
    /// Printer registration and listing.
    pub printers: Arc<dyn PrinterManagement>,
    /// Print order submission and lookup.
    pub orders: Arc<dyn PrintOrderManagement>,
}

impl HttpState {
    /// Bundle the three slice use-cases.
    #[must_use]
    pub const fn new(
        users: Arc<dyn UserManagement>,
        printers: Arc<dyn PrinterManagement>,
        orders: Arc<dyn PrintOrderManagement>,
    ) -> Self {
        Self {
            users,
            printers,
            orders,
        }
    }
}
