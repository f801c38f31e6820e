//! Printers offered for print orders.

use super::UserId;
use super::entity_id::define_entity_id;

define_entity_id! {
    /// Identifier assigned to a printer at creation.
    PrinterId
}

/// Printer fields submitted at creation.
///
/// `owner_id` is a plain reference; nothing checks that the user exists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrinterDraft {
    /// Where the printer can be found.
    pub location: Option<String>,
    /// Price charged per printed page.
    pub price_per_page: f64,
    /// Whether colour output is available.
    pub supports_color: bool,
    /// Free-text notes from the owner.
    pub additional_notes: Option<String>,
    /// User offering the printer.
    pub owner_id: Option<UserId>,
}

/// A persisted printer.
#[derive(Debug, Clone, PartialEq)]
pub struct Printer {
    id: PrinterId,
    details: PrinterDraft,
}

impl Printer {
    /// Pair a storage-assigned identifier with the submitted fields.
    #[must_use]
    pub const fn new(id: PrinterId, details: PrinterDraft) -> Self {
        Self { id, details }
    }

    /// Storage-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> PrinterId {
        self.id
    }

    /// Fields as submitted at creation.
    #[must_use]
    pub const fn details(&self) -> &PrinterDraft {
        &self.details
    }

    /// Owning user reference, if one was supplied.
    #[must_use]
    pub const fn owner_id(&self) -> Option<UserId> {
        self.details.owner_id
    }

    /// Split the printer into its identifier and fields.
    #[must_use]
    pub fn into_parts(self) -> (PrinterId, PrinterDraft) {
        (self.id, self.details)
    }
}
