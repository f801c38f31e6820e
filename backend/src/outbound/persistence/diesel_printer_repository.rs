//! PostgreSQL-backed `PrinterRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PrinterRepository, PrinterRepositoryError};
use crate::domain::{Printer, PrinterDraft};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewPrinterRow, PrinterRow};
use super::pool::{DbPool, PoolError};
use super::schema::printers;

/// Diesel-backed printer repository.
#[derive(Clone)]
pub struct DieselPrinterRepository {
    pool: DbPool,
}

impl DieselPrinterRepository {
    /// Create a repository using the given connection pool.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> PrinterRepositoryError {
    map_pool_error(error, PrinterRepositoryError::connection)
}

fn diesel_error(error: &diesel::result::Error, operation: &str) -> PrinterRepositoryError {
    map_diesel_error(
        error,
        operation,
        PrinterRepositoryError::query,
        PrinterRepositoryError::connection,
    )
}

#[async_trait]
impl PrinterRepository for DieselPrinterRepository {
    async fn insert(&self, draft: &PrinterDraft) -> Result<Printer, PrinterRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row: PrinterRow = diesel::insert_into(printers::table)
            .values(NewPrinterRow::from(draft))
            .returning(PrinterRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| diesel_error(&err, "insert printer"))?;
        Ok(row.into())
    }

    async fn list_all(&self) -> Result<Vec<Printer>, PrinterRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows: Vec<PrinterRow> = printers::table
            .order(printers::id.asc())
            .select(PrinterRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| diesel_error(&err, "list printers"))?;
        Ok(rows.into_iter().map(Printer::from).collect())
    }
}
