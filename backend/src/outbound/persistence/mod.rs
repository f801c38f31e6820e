//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories only translate between Diesel rows and domain entities; rows
//! (`models.rs`) and table definitions (`schema.rs`) stay private to this
//! module. Connections come from a `bb8` pool via `diesel-async`.
//!
//! # Example
//!
//! ```no_run
//! use print_broker::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! # async fn wire() -> Result<(), print_broker::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/print_broker")).await?;
//! let users = DieselUserRepository::new(pool);
//! # Ok(())
//! # }
//! ```

mod diesel_error_mapping;
mod diesel_print_order_repository;
mod diesel_printer_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_print_order_repository::DieselPrintOrderRepository;
pub use diesel_printer_repository::DieselPrinterRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
