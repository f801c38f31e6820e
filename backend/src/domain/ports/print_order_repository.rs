//! Driven port for print order persistence.

use async_trait::async_trait;

use crate::domain::{PrintOrder, PrintOrderDraft, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by print order repository adapters.
    pub enum PrintOrderRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "print order repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "print order repository query failed: {message}",
    }
}

/// Storage for print orders.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PrintOrderRepository: Send + Sync {
    /// Persist a new order, assigning a fresh identifier.
    async fn insert(&self, draft: &PrintOrderDraft)
    -> Result<PrintOrder, PrintOrderRepositoryError>;

    /// Orders referencing `user_id`, in ascending identifier order.
    ///
    /// Unknown users yield an empty list.
    async fn list_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<PrintOrder>, PrintOrderRepositoryError>;
}
