use async_trait::async_trait;

use crate::entity::{DepositError, Deposito};

/// Read-only access to the deposits table.
///
/// Records are written by the ingestion service; nothing here inserts,
/// updates or deletes.
#[async_trait]
pub trait DepositRepository: Send + Sync {
    /// All deposits, newest `creado_en` first
    async fn list_deposits(&self) -> Result<Vec<Deposito>, DepositError>;

    /// The deposit with the given id, or `DepositError::NotFound`
    async fn get_deposit(&self, id: i64) -> Result<Deposito, DepositError>;
}
