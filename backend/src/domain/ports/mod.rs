//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters. Driving
//! ports (`*Management`) are implemented by domain services and consumed by
//! inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod print_order_management;
mod print_order_repository;
mod printer_management;
mod printer_repository;
mod user_management;
mod user_repository;

#[cfg(test)]
pub use print_order_management::MockPrintOrderManagement;
pub use print_order_management::PrintOrderManagement;
#[cfg(test)]
pub use print_order_repository::MockPrintOrderRepository;
pub use print_order_repository::{PrintOrderRepository, PrintOrderRepositoryError};
#[cfg(test)]
pub use printer_management::MockPrinterManagement;
pub use printer_management::PrinterManagement;
#[cfg(test)]
pub use printer_repository::MockPrinterRepository;
pub use printer_repository::{PrinterRepository, PrinterRepositoryError};
#[cfg(test)]
pub use user_management::MockUserManagement;
pub use user_management::UserManagement;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
