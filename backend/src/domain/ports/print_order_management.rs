//! Driving port for the print order slice.

use async_trait::async_trait;

use crate::domain::{Error, PrintOrder, PrintOrderDraft, UserId};

/// Print order submission and lookup use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PrintOrderManagement: Send + Sync {
    /// Submit an order; neither the user nor the printer reference is checked.
    async fn create(&self, draft: PrintOrderDraft) -> Result<PrintOrder, Error>;

    /// Orders placed by `user_id`; empty when the user has none or is unknown.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<PrintOrder>, Error>;
}
