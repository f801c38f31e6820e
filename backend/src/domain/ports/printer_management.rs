//! Driving port for the printer slice.

use async_trait::async_trait;

use crate::domain::{Error, Printer, PrinterDraft};

/// Printer creation and listing use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PrinterManagement: Send + Sync {
    /// Create a printer; the owner reference is not checked.
    async fn create(&self, draft: PrinterDraft) -> Result<Printer, Error>;

    /// List every printer.
    async fn list_all(&self) -> Result<Vec<Printer>, Error>;
}
