use crate::entity::{DepositError, Theme};
use crate::interactor::DepositInteractor;
use crate::view::deposit_card::DepositDetail;
use crate::view::deposit_detail_view::DepositDetailView;
use anyhow::Result;
use async_trait::async_trait;
use log::error;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailOutcome {
    Shown,
    NotFound,
}

#[async_trait]
pub trait DepositDetailPresenter: Send + Sync {
    async fn show_deposit(&self, id: i64) -> Result<DetailOutcome>;
}

pub struct DepositDetailPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
    theme: Theme,
}

impl<I, V> DepositDetailPresenterImpl<I, V>
where
    I: DepositInteractor,
    V: DepositDetailView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>, theme: Theme) -> Self {
        Self {
            interactor,
            view,
            theme,
        }
    }
}

#[async_trait]
impl<I, V> DepositDetailPresenter for DepositDetailPresenterImpl<I, V>
where
    I: DepositInteractor + Send + Sync,
    V: DepositDetailView + Send + Sync,
{
    async fn show_deposit(&self, id: i64) -> Result<DetailOutcome> {
        self.view.display_loading().await?;

        match self.interactor.get_deposit(id).await {
            Ok(deposito) => {
                self.view
                    .display_deposit(DepositDetail::new(&deposito, &self.theme))
                    .await?;
                Ok(DetailOutcome::Shown)
            }
            Err(DepositError::NotFound(_)) => {
                self.view.display_not_found(id).await?;
                Ok(DetailOutcome::NotFound)
            }
            // A failed lookup leaves nothing to show
            Err(e @ DepositError::Fetch(_)) => {
                error!("Could not load deposito {}: {}", id, e);
                self.view.display_not_found(id).await?;
                Ok(DetailOutcome::NotFound)
            }
        }
    }
}
