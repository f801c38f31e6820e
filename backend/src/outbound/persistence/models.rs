//! Internal Diesel row structs.
//!
//! Rows never leave the persistence layer; repositories convert them into
//! domain entities at the boundary.

use diesel::prelude::*;

use crate::domain::{
    PrintOrder, PrintOrderDraft, PrintOrderId, Printer, PrinterDraft, PrinterId, User, UserDraft,
    UserId,
};

use super::schema::{print_orders, printers, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Insertable struct for creating user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub username: Option<&'a str>,
    pub email: Option<&'a str>,
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
}

impl<'a> From<&'a UserDraft> for NewUserRow<'a> {
    fn from(draft: &'a UserDraft) -> Self {
        Self {
            username: draft.username.as_deref(),
            email: draft.email.as_deref(),
            first_name: draft.first_name.as_deref(),
            last_name: draft.last_name.as_deref(),
        }
    }
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self::new(
            UserId::new(row.id),
            UserDraft {
                username: row.username,
                email: row.email,
                first_name: row.first_name,
                last_name: row.last_name,
            },
        )
    }
}

/// Row struct for reading from the printers table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = printers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PrinterRow {
    pub id: i64,
    pub location: Option<String>,
    pub price_per_page: f64,
    pub supports_color: bool,
    pub additional_notes: Option<String>,
    pub owner_id: Option<i64>,
}

/// Insertable struct for creating printer records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = printers)]
pub(crate) struct NewPrinterRow<'a> {
    pub location: Option<&'a str>,
    pub price_per_page: f64,
    pub supports_color: bool,
    pub additional_notes: Option<&'a str>,
    pub owner_id: Option<i64>,
}

impl<'a> From<&'a PrinterDraft> for NewPrinterRow<'a> {
    fn from(draft: &'a PrinterDraft) -> Self {
        Self {
            location: draft.location.as_deref(),
            price_per_page: draft.price_per_page,
            supports_color: draft.supports_color,
            additional_notes: draft.additional_notes.as_deref(),
            owner_id: draft.owner_id.map(UserId::get),
        }
    }
}

impl From<PrinterRow> for Printer {
    fn from(row: PrinterRow) -> Self {
        Self::new(
            PrinterId::new(row.id),
            PrinterDraft {
                location: row.location,
                price_per_page: row.price_per_page,
                supports_color: row.supports_color,
                additional_notes: row.additional_notes,
                owner_id: row.owner_id.map(UserId::new),
            },
        )
    }
}

/// Row struct for reading from the print_orders table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = print_orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PrintOrderRow {
    pub id: i64,
    pub file_name: Option<String>,
    pub page_count: i32,
    pub color: bool,
    pub status: Option<String>,
    pub user_id: i64,
    pub printer_id: i64,
}

/// Insertable struct for creating print order records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = print_orders)]
pub(crate) struct NewPrintOrderRow<'a> {
    pub file_name: Option<&'a str>,
    pub page_count: i32,
    pub color: bool,
    pub status: Option<&'a str>,
    pub user_id: i64,
    pub printer_id: i64,
}

impl<'a> From<&'a PrintOrderDraft> for NewPrintOrderRow<'a> {
    fn from(draft: &'a PrintOrderDraft) -> Self {
        Self {
            file_name: draft.file_name.as_deref(),
            page_count: draft.page_count,
            color: draft.color,
            status: draft.status.as_deref(),
            user_id: draft.user_id.get(),
            printer_id: draft.printer_id.get(),
        }
    }
}

impl From<PrintOrderRow> for PrintOrder {
    fn from(row: PrintOrderRow) -> Self {
        Self::new(
            PrintOrderId::new(row.id),
            PrintOrderDraft {
                file_name: row.file_name,
                page_count: row.page_count,
                color: row.color,
                status: row.status,
                user_id: UserId::new(row.user_id),
                printer_id: PrinterId::new(row.printer_id),
            },
        )
    }
}
