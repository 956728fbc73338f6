use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::commands::{help_text, Command};
use crate::entity::CapturedNotification;
use crate::presenter::{
    DepositDetailPresenter, DepositListPresenter, NotificationPresenter, RefreshOutcome,
};
use crate::services::NotificationQueue;
use crate::view::{write_block, Output};

/// Whether the driver loop should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

// Base router trait
#[async_trait]
pub trait Router: Send + Sync {
    async fn handle(&self, command: Command) -> Result<Flow>;
}

/// Dispatches console commands to the screen presenters.
pub struct ConsoleRouter {
    list: Arc<dyn DepositListPresenter>,
    detail: Arc<dyn DepositDetailPresenter>,
    notifications: Arc<dyn NotificationPresenter>,
    queue: Arc<NotificationQueue>,
    output: Output,
}

impl ConsoleRouter {
    pub fn new(
        list: Arc<dyn DepositListPresenter>,
        detail: Arc<dyn DepositDetailPresenter>,
        notifications: Arc<dyn NotificationPresenter>,
        queue: Arc<NotificationQueue>,
        output: Output,
    ) -> Self {
        Self {
            list,
            detail,
            notifications,
            queue,
            output,
        }
    }

    /// Loads the list screen for the first time.
    pub async fn mount(&self) -> Result<RefreshOutcome> {
        self.list.mount().await
    }

    pub fn watch_notifications(&self) -> JoinHandle<()> {
        self.notifications.watch()
    }

    pub fn print(&self, text: &str) -> Result<()> {
        write_block(&self.output, text)
    }
}

#[async_trait]
impl Router for ConsoleRouter {
    async fn handle(&self, command: Command) -> Result<Flow> {
        debug!("Handling command {:?}", command);

        match command {
            Command::List => self.list.show_deposits().await?,
            Command::Refresh => {
                if self.list.refresh().await? == RefreshOutcome::Coalesced {
                    self.print("Ya se está actualizando\n")?;
                }
            }
            Command::Domain(domain) => self.list.set_domain_filter(domain.as_deref()).await?,
            Command::Toggle(domain) => self.list.toggle_domain_filter(&domain).await?,
            Command::Search(query) => self.list.set_search_query(&query).await?,
            Command::Open(id) => {
                self.detail.show_deposit(id).await?;
            }
            Command::Notifications => {
                self.notifications.show_notifications().await?;
            }
            Command::Capture {
                package_name,
                title,
                body,
            } => {
                info!("Recording captured notification from {:?}", package_name);
                self.queue.push(CapturedNotification::from_parts(
                    package_name,
                    &title,
                    &body,
                    Utc::now(),
                ));
            }
            Command::Help => self.print(&help_text())?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }
}
