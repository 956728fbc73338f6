use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client, Response};
use std::time::Duration;

use crate::entity::{DepositError, Deposito};
use crate::store::deposit_repository::DepositRepository;
use crate::store::models::StoreErrorResponse;

/// Deposit repository backed by a PostgREST-style table API
/// (`{base}/rest/v1/{table}`), as exposed by the hosted store.
pub struct RestDepositRepository {
    http_client: Client,
    base_url: String,
    api_key: String,
    table: String,
}

impl RestDepositRepository {
    pub fn new(base_url: &str, api_key: &str, table: &str, timeout: Duration) -> Result<Self, DepositError> {
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            table: table.to_string(),
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    async fn fetch_rows(&self, query: &[(&str, String)]) -> Result<Vec<Deposito>, DepositError> {
        let response = self
            .http_client
            .get(self.table_url())
            .query(query)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                debug!("Deposit store request failed: {}", e);
                DepositError::from(e)
            })?;

        let response = Self::check_status(response).await?;

        response.json::<Vec<Deposito>>().await.map_err(|e| {
            debug!("Failed to parse deposits response: {}", e);
            DepositError::from(e)
        })
    }

    async fn check_status(response: Response) -> Result<Response, DepositError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = StoreErrorResponse::message_from_body(&body);
        debug!("Deposit store error [{}]: {}", status, message);

        Err(DepositError::fetch(format!("store returned {}: {}", status, message)))
    }
}

#[async_trait]
impl DepositRepository for RestDepositRepository {
    async fn list_deposits(&self) -> Result<Vec<Deposito>, DepositError> {
        info!("Fetching deposits from {}", self.table_url());

        let deposits = self
            .fetch_rows(&[
                ("select", "*".to_string()),
                ("order", "creado_en.desc".to_string()),
            ])
            .await?;

        info!("Fetched {} deposits", deposits.len());
        Ok(deposits)
    }

    async fn get_deposit(&self, id: i64) -> Result<Deposito, DepositError> {
        info!("Fetching deposit {}", id);

        let rows = self
            .fetch_rows(&[
                ("select", "*".to_string()),
                ("id", format!("eq.{}", id)),
                ("limit", "1".to_string()),
            ])
            .await?;

        rows.into_iter().next().ok_or(DepositError::NotFound(id))
    }
}
