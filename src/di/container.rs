use std::num::NonZeroUsize;
use std::sync::Arc;

use anyhow::Context;
use log::info;
use sqlx::postgres::PgPoolOptions;

use crate::config::{AppConfig, ConfigError, StoreBackend};
use crate::entity::Theme;
use crate::interactor::DepositInteractorImpl;
use crate::presenter::{DepositDetailPresenterImpl, DepositListPresenterImpl, NotificationPresenterImpl};
use crate::router::ConsoleRouter;
use crate::services::NotificationQueue;
use crate::store::{DepositRepository, PgDepositRepository, RestDepositRepository};
use crate::view::deposit_detail_view::ConsoleDepositDetailView;
use crate::view::deposit_list_view::ConsoleDepositListView;
use crate::view::notification_view::ConsoleNotificationView;
use crate::view::Output;

/// ServiceContainer provides access to core application dependencies
pub struct ServiceContainer {
    config: AppConfig,

    deposit_repository: Arc<dyn DepositRepository + Send + Sync>,
    deposit_interactor: Arc<DepositInteractorImpl>,

    notification_queue: Arc<NotificationQueue>,
}

impl ServiceContainer {
    /// Connects to the configured deposit store and wires the services.
    pub async fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let repository: Arc<dyn DepositRepository + Send + Sync> = match config.backend {
            StoreBackend::Postgres => {
                let database_url = config
                    .database_url
                    .as_deref()
                    .ok_or(ConfigError::MissingSetting("postgres", "DEPOSITOS_DATABASE_URL"))?;

                info!("Connecting to database...");
                let db_pool = PgPoolOptions::new()
                    .max_connections(5)
                    .acquire_timeout(config.request_timeout())
                    .connect(database_url)
                    .await
                    .context("Failed to create database connection pool")?;

                Arc::new(PgDepositRepository::new(Arc::new(db_pool), &config.table))
            }
            StoreBackend::Rest => {
                let base_url = config
                    .rest_url
                    .as_deref()
                    .ok_or(ConfigError::MissingSetting("rest", "DEPOSITOS_REST_URL"))?;
                let api_key = config
                    .api_key
                    .as_deref()
                    .ok_or(ConfigError::MissingSetting("rest", "DEPOSITOS_API_KEY"))?;

                info!("Using deposit store at {}", base_url);
                Arc::new(
                    RestDepositRepository::new(base_url, api_key, &config.table, config.request_timeout())
                        .context("Failed to create HTTP client")?,
                )
            }
        };

        Ok(Self::with_repository(config, repository)?)
    }

    /// Wires the services around an already built repository.
    pub fn with_repository(
        config: AppConfig,
        deposit_repository: Arc<dyn DepositRepository + Send + Sync>,
    ) -> Result<Self, ConfigError> {
        let capacity =
            NonZeroUsize::new(config.notification_capacity).ok_or(ConfigError::InvalidCapacity)?;

        let deposit_interactor = Arc::new(DepositInteractorImpl::new(deposit_repository.clone()));

        Ok(Self {
            config,
            deposit_repository,
            deposit_interactor,
            notification_queue: NotificationQueue::new(capacity),
        })
    }

    /// Builds the console screens on top of the services.
    pub fn create_router(&self, output: Output) -> ConsoleRouter {
        let theme = self.theme();

        let list_presenter = Arc::new(DepositListPresenterImpl::new(
            self.deposit_interactor(),
            Arc::new(ConsoleDepositListView::new(output.clone())),
            theme,
            &self.config.currency_label,
        ));
        let detail_presenter = Arc::new(DepositDetailPresenterImpl::new(
            self.deposit_interactor(),
            Arc::new(ConsoleDepositDetailView::new(output.clone())),
            theme,
        ));
        let notification_presenter = Arc::new(NotificationPresenterImpl::new(
            self.notification_queue(),
            Arc::new(ConsoleNotificationView::new(output.clone())),
            theme,
        ));

        ConsoleRouter::new(
            list_presenter,
            detail_presenter,
            notification_presenter,
            self.notification_queue(),
            output,
        )
    }

    // Accessor methods

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn theme(&self) -> Theme {
        self.config.theme.theme()
    }

    pub fn deposit_repository(&self) -> Arc<dyn DepositRepository + Send + Sync> {
        self.deposit_repository.clone()
    }

    pub fn deposit_interactor(&self) -> Arc<DepositInteractorImpl> {
        self.deposit_interactor.clone()
    }

    pub fn notification_queue(&self) -> Arc<NotificationQueue> {
        self.notification_queue.clone()
    }
}
