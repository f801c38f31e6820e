//! In-process repositories used when no database is configured.
//!
//! Each repository keeps its rows in a `Vec` behind a mutex together with the
//! next identifier, so assignment and insertion happen under one lock and ids
//! are never reused. State lives only as long as the process.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    PrintOrderRepository, PrintOrderRepositoryError, PrinterRepository, PrinterRepositoryError,
    UserRepository, UserRepositoryError,
};
use crate::domain::{
    PrintOrder, PrintOrderDraft, PrintOrderId, Printer, PrinterDraft, PrinterId, User, UserDraft,
    UserId,
};

struct Table<T> {
    next_id: i64,
    rows: Vec<T>,
}

impl<T> Table<T> {
    const fn new() -> Self {
        Self {
            next_id: 1,
            rows: Vec::new(),
        }
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Table<T> {
    fn insert_with(&mut self, build: impl FnOnce(i64) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.push(row.clone());
        row
    }
}

fn lock<'a, T, E>(
    table: &'a Mutex<Table<T>>,
    poisoned: impl FnOnce(&'static str) -> E,
) -> Result<MutexGuard<'a, Table<T>>, E> {
    table
        .lock()
        .map_err(|_| poisoned("in-memory table lock poisoned"))
}

/// Mutex-guarded user store.
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: Mutex<Table<User>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            table: Mutex::new(Table::new()),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, draft: &UserDraft) -> Result<User, UserRepositoryError> {
        let mut table = lock(&self.table, UserRepositoryError::query)?;
        Ok(table.insert_with(|id| User::new(UserId::new(id), draft.clone())))
    }

    async fn list_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        let table = lock(&self.table, UserRepositoryError::query)?;
        Ok(table.rows.clone())
    }
}

/// Mutex-guarded printer store.
#[derive(Default)]
pub struct InMemoryPrinterRepository {
    table: Mutex<Table<Printer>>,
}

impl InMemoryPrinterRepository {
    /// Create an empty repository.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            table: Mutex::new(Table::new()),
        }
    }
}

#[async_trait]
impl PrinterRepository for InMemoryPrinterRepository {
    async fn insert(&self, draft: &PrinterDraft) -> Result<Printer, PrinterRepositoryError> {
        let mut table = lock(&self.table, PrinterRepositoryError::query)?;
        Ok(table.insert_with(|id| Printer::new(PrinterId::new(id), draft.clone())))
    }

    async fn list_all(&self) -> Result<Vec<Printer>, PrinterRepositoryError> {
        let table = lock(&self.table, PrinterRepositoryError::query)?;
        Ok(table.rows.clone())
    }
}

/// Mutex-guarded print order store.
#[derive(Default)]
pub struct InMemoryPrintOrderRepository {
    table: Mutex<Table<PrintOrder>>,
}

impl InMemoryPrintOrderRepository {
    /// Create an empty repository.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            table: Mutex::new(Table::new()),
        }
    }
}

#[async_trait]
impl PrintOrderRepository for InMemoryPrintOrderRepository {
    async fn insert(
        &self,
        draft: &PrintOrderDraft,
    ) -> Result<PrintOrder, PrintOrderRepositoryError> {
        let mut table = lock(&self.table, PrintOrderRepositoryError::query)?;
        Ok(table.insert_with(|id| PrintOrder::new(PrintOrderId::new(id), draft.clone())))
    }

    async fn list_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<PrintOrder>, PrintOrderRepositoryError> {
        let table = lock(&self.table, PrintOrderRepositoryError::query)?;
        Ok(table
            .rows
            .iter()
            .filter(|order| order.is_placed_by(user_id))
            .cloned()
            .collect())
    }
}
