//! Print order domain service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    PrintOrderManagement, PrintOrderRepository, PrintOrderRepositoryError,
};
use crate::domain::{Error, PrintOrder, PrintOrderDraft, UserId};

/// Service implementing [`PrintOrderManagement`] over a [`PrintOrderRepository`].
///
/// Orders are stored without checking the referenced user or printer and
/// without interpreting `page_count` or `status`.
pub struct PrintOrderService<R: ?Sized> {
    orders: Arc<R>,
}

impl<R: ?Sized> PrintOrderService<R> {
    /// Create a service backed by the given repository.
    #[must_use]
    pub const fn new(orders: Arc<R>) -> Self {
        Self { orders }
    }
}

impl<R: ?Sized> Clone for PrintOrderService<R> {
    fn clone(&self) -> Self {
        Self {
            orders: Arc::clone(&self.orders),
        }
    }
}

fn map_repository_error(error: PrintOrderRepositoryError) -> Error {
    match error {
        PrintOrderRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("print order repository unavailable: {message}"))
        }
        PrintOrderRepositoryError::Query { message } => {
            Error::internal(format!("print order repository error: {message}"))
        }
    }
}

#[async_trait]
impl<R> PrintOrderManagement for PrintOrderService<R>
where
    R: PrintOrderRepository + ?Sized,
{
    async fn create(&self, draft: PrintOrderDraft) -> Result<PrintOrder, Error> {
        self.orders
            .insert(&draft)
            .await
            .map_err(map_repository_error)
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<PrintOrder>, Error> {
        self.orders
            .list_by_user(user_id)
            .await
            .map_err(map_repository_error)
    }
}
