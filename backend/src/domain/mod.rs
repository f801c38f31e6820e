//! Domain entities, errors, ports and services.
//!
//! Public surface:
//! - `User`, `Printer`, `PrintOrder` with their `*Draft` creation payloads and
//!   typed identifiers.
//! - `Error` / `ErrorCode`: transport-agnostic failure payload.
//! - `TraceId`: request correlation identifier.
//! - `UserService`, `PrinterService`, `PrintOrderService`: driving-port
//!   implementations.

mod entity_id;
pub mod error;
pub mod ports;
pub mod print_order;
mod print_order_service;
pub mod printer;
mod printer_service;
pub mod trace_id;
pub mod user;
mod user_service;

pub use self::error::{Error, ErrorCode};
pub use self::print_order::{PrintOrder, PrintOrderDraft, PrintOrderId};
pub use self::print_order_service::PrintOrderService;
pub use self::printer::{Printer, PrinterDraft, PrinterId};
pub use self::printer_service::PrinterService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserDraft, UserId};
pub use self::user_service::UserService;
