use crate::entity::{DepositError, Deposito};
use crate::store::DepositRepository;
use async_trait::async_trait;
use log::{debug, info, warn};
use std::sync::Arc;

#[async_trait]
pub trait DepositInteractor: Send + Sync {
    async fn list_deposits(&self) -> Result<Vec<Deposito>, DepositError>;
    async fn get_deposit(&self, id: i64) -> Result<Deposito, DepositError>;
}

pub struct DepositInteractorImpl {
    repository: Arc<dyn DepositRepository + Send + Sync>,
}

impl DepositInteractorImpl {
    pub fn new(repository: Arc<dyn DepositRepository + Send + Sync>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl DepositInteractor for DepositInteractorImpl {
    async fn list_deposits(&self) -> Result<Vec<Deposito>, DepositError> {
        match self.repository.list_deposits().await {
            Ok(deposits) => {
                info!("Deposit list refreshed ({} records)", deposits.len());
                Ok(deposits)
            }
            Err(e) => {
                debug!("Deposit list fetch failed: {}", e);
                Err(e)
            }
        }
    }

    async fn get_deposit(&self, id: i64) -> Result<Deposito, DepositError> {
        self.repository.get_deposit(id).await.map_err(|e| {
            match &e {
                DepositError::NotFound(_) => warn!("Deposit {} not found", id),
                DepositError::Fetch(_) => debug!("Deposit {} fetch failed: {}", id, e),
            }
            e
        })
    }
}
