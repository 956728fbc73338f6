#[derive(Debug, thiserror::Error)]
pub enum DepositError {
    #[error("Failed to fetch deposits: {0}")]
    Fetch(#[source] anyhow::Error),

    #[error("Deposit {0} not found")]
    NotFound(i64),
}

impl DepositError {
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch(anyhow::anyhow!(message.into()))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<reqwest::Error> for DepositError {
    fn from(err: reqwest::Error) -> Self {
        Self::Fetch(err.into())
    }
}

impl From<sqlx::Error> for DepositError {
    fn from(err: sqlx::Error) -> Self {
        Self::Fetch(err.into())
    }
}
