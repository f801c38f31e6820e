//! PostgreSQL-backed `PrintOrderRepository`.
//!
//! Lookups by user use the `print_orders_user_id_idx` index.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PrintOrderRepository, PrintOrderRepositoryError};
use crate::domain::{PrintOrder, PrintOrderDraft, UserId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewPrintOrderRow, PrintOrderRow};
use super::pool::{DbPool, PoolError};
use super::schema::print_orders;

/// Diesel-backed print order repository.
#[derive(Clone)]
pub struct DieselPrintOrderRepository {
    pool: DbPool,
}

impl DieselPrintOrderRepository {
    /// Create a repository using the given connection pool.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> PrintOrderRepositoryError {
    map_pool_error(error, PrintOrderRepositoryError::connection)
}

fn diesel_error(error: &diesel::result::Error, operation: &str) -> PrintOrderRepositoryError {
    map_diesel_error(
        error,
        operation,
        PrintOrderRepositoryError::query,
        PrintOrderRepositoryError::connection,
    )
}

#[async_trait]
impl PrintOrderRepository for DieselPrintOrderRepository {
    async fn insert(
        &self,
        draft: &PrintOrderDraft,
    ) -> Result<PrintOrder, PrintOrderRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row: PrintOrderRow = diesel::insert_into(print_orders::table)
            .values(NewPrintOrderRow::from(draft))
            .returning(PrintOrderRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| diesel_error(&err, "insert print order"))?;
        Ok(row.into())
    }

    async fn list_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<PrintOrder>, PrintOrderRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows: Vec<PrintOrderRow> = print_orders::table
            .filter(print_orders::user_id.eq(user_id.get()))
            .order(print_orders::id.asc())
            .select(PrintOrderRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| diesel_error(&err, "list print orders by user"))?;
        Ok(rows.into_iter().map(PrintOrder::from).collect())
    }
}
