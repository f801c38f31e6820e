//! Printer domain service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{PrinterManagement, PrinterRepository, PrinterRepositoryError};
use crate::domain::{Error, Printer, PrinterDraft};

/// Service implementing [`PrinterManagement`] over a [`PrinterRepository`].
///
/// Owner references are forwarded untouched; a printer naming a user that
/// was never registered is accepted.
pub struct PrinterService<R: ?Sized> {
    printers: Arc<R>,
}

impl<R: ?Sized> PrinterService<R> {
    /// Create a service backed by the given repository.
    #[must_use]
    pub const fn new(printers: Arc<R>) -> Self {
        Self { printers }
    }
}

impl<R: ?Sized> Clone for PrinterService<R> {
    fn clone(&self) -> Self {
        Self {
            printers: Arc::clone(&self.printers),
        }
    }
}

fn map_repository_error(error: PrinterRepositoryError) -> Error {
    match error {
        PrinterRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("printer repository unavailable: {message}"))
        }
        PrinterRepositoryError::Query { message } => {
            Error::internal(format!("printer repository error: {message}"))
        }
    }
}

#[async_trait]
impl<R> PrinterManagement for PrinterService<R>
where
    R: PrinterRepository + ?Sized,
{
    async fn create(&self, draft: PrinterDraft) -> Result<Printer, Error> {
        self.printers
            .insert(&draft)
            .await
            .map_err(map_repository_error)
    }

    async fn list_all(&self) -> Result<Vec<Printer>, Error> {
        self.printers.list_all().await.map_err(map_repository_error)
    }
}
