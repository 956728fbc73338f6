use async_trait::async_trait;
use log::info;
use sqlx::PgPool;
use std::sync::Arc;

use crate::entity::{DepositError, Deposito};
use crate::store::deposit_repository::DepositRepository;

/// Deposit repository reading straight from Postgres.
pub struct PgDepositRepository {
    db_pool: Arc<PgPool>,
    list_sql: String,
    get_sql: String,
}

impl PgDepositRepository {
    /// `table` is interpolated into the queries and must be a trusted
    /// identifier from configuration.
    pub fn new(db_pool: Arc<PgPool>, table: &str) -> Self {
        Self {
            db_pool,
            list_sql: format!("SELECT * FROM {} ORDER BY creado_en DESC", table),
            get_sql: format!("SELECT * FROM {} WHERE id = $1", table),
        }
    }
}

#[async_trait]
impl DepositRepository for PgDepositRepository {
    async fn list_deposits(&self) -> Result<Vec<Deposito>, DepositError> {
        let deposits = sqlx::query_as::<_, Deposito>(&self.list_sql)
            .fetch_all(&*self.db_pool)
            .await?;

        info!("Loaded {} deposits from database", deposits.len());
        Ok(deposits)
    }

    async fn get_deposit(&self, id: i64) -> Result<Deposito, DepositError> {
        sqlx::query_as::<_, Deposito>(&self.get_sql)
            .bind(id)
            .fetch_optional(&*self.db_pool)
            .await?
            .ok_or(DepositError::NotFound(id))
    }
}
