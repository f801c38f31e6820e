//! Driven port for printer persistence.

use async_trait::async_trait;

use crate::domain::{Printer, PrinterDraft};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by printer repository adapters.
    pub enum PrinterRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "printer repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "printer repository query failed: {message}",
    }
}

/// Storage for printers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PrinterRepository: Send + Sync {
    /// Persist a new printer, assigning a fresh identifier.
    ///
    /// The owner reference is stored as given.
    async fn insert(&self, draft: &PrinterDraft) -> Result<Printer, PrinterRepositoryError>;

    /// Every stored printer in ascending identifier order.
    async fn list_all(&self) -> Result<Vec<Printer>, PrinterRepositoryError>;
}
