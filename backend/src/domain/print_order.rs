//! Print orders placed by users against printers.
//!
//! `status` is uninterpreted text: no value set or transitions exist. The
//! user and printer references are stored without existence checks, so an
//! order may dangle.

use super::entity_id::define_entity_id;
use super::{PrinterId, UserId};

define_entity_id! {
    /// Identifier assigned to a print order at creation.
    PrintOrderId
}

/// Print order fields submitted at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOrderDraft {
    /// Name of the document to print.
    pub file_name: Option<String>,
    /// Pages requested, stored as submitted.
    pub page_count: i32,
    /// Whether colour output was requested.
    pub color: bool,
    /// Uninterpreted status label.
    pub status: Option<String>,
    /// User placing the order.
    pub user_id: UserId,
    /// Printer the order targets.
    pub printer_id: PrinterId,
}

/// A persisted print order.
///
/// # Examples
/// ```
/// use print_broker::domain::{PrintOrder, PrintOrderDraft, PrintOrderId, PrinterId, UserId};
///
/// let order = PrintOrder::new(
///     PrintOrderId::new(1),
///     PrintOrderDraft {
///         file_name: Some("doc.pdf".into()),
///         page_count: 5,
///         color: false,
///         status: Some("PENDING".into()),
///         user_id: UserId::new(1),
///         printer_id: PrinterId::new(1),
///     },
/// );
/// assert!(order.is_placed_by(UserId::new(1)));
/// assert!(!order.is_placed_by(UserId::new(2)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOrder {
    id: PrintOrderId,
    details: PrintOrderDraft,
}

impl PrintOrder {
    /// Pair a storage-assigned identifier with the submitted fields.
    #[must_use]
    pub const fn new(id: PrintOrderId, details: PrintOrderDraft) -> Self {
        Self { id, details }
    }

    /// Storage-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> PrintOrderId {
        self.id
    }

    /// Fields as submitted at creation.
    #[must_use]
    pub const fn details(&self) -> &PrintOrderDraft {
        &self.details
    }

    /// Whether the order references the given user.
    #[must_use]
    pub const fn is_placed_by(&self, user_id: UserId) -> bool {
        self.details.user_id.get() == user_id.get()
    }

    /// Split the order into its identifier and fields.
    #[must_use]
    pub fn into_parts(self) -> (PrintOrderId, PrintOrderDraft) {
        (self.id, self.details)
    }
}
