use crate::entity::{sample_notifications, Theme};
use crate::services::{NotificationQueue, Subscription};
use crate::view::notification_view::{NotificationCard, NotificationView};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use log::{error, info};
use std::sync::Arc;
use tokio::task::JoinHandle;

#[async_trait]
pub trait NotificationPresenter: Send + Sync {
    /// Shows the captured notifications, or the sample set when nothing
    /// has been captured yet. Returns how many were shown.
    async fn show_notifications(&self) -> Result<usize>;

    /// Renders each newly captured notification as it arrives, until the
    /// subscription ends.
    fn watch(&self) -> JoinHandle<()>;
}

pub struct NotificationPresenterImpl<V> {
    queue: Arc<NotificationQueue>,
    view: Arc<V>,
    theme: Theme,
}

impl<V> NotificationPresenterImpl<V>
where
    V: NotificationView + 'static,
{
    pub fn new(queue: Arc<NotificationQueue>, view: Arc<V>, theme: Theme) -> Self {
        Self { queue, view, theme }
    }

    async fn forward(mut subscription: Subscription, view: Arc<V>, theme: Theme) {
        info!("Watching captured notifications (subscriber {})", subscription.id());
        while let Some(notification) = subscription.recv().await {
            if let Err(e) = view
                .display_new_notification(NotificationCard::new(&notification, &theme))
                .await
            {
                error!("Failed to display notification: {}", e);
            }
        }
    }
}

#[async_trait]
impl<V> NotificationPresenter for NotificationPresenterImpl<V>
where
    V: NotificationView + Send + Sync + 'static,
{
    async fn show_notifications(&self) -> Result<usize> {
        let captured = self.queue.snapshot();
        let sample = captured.is_empty();
        let notifications = if sample {
            sample_notifications(Utc::now())
        } else {
            captured
        };

        let cards: Vec<NotificationCard> = notifications
            .iter()
            .map(|notification| NotificationCard::new(notification, &self.theme))
            .collect();
        let count = cards.len();

        self.view.display_notifications(cards, sample).await?;
        Ok(count)
    }

    fn watch(&self) -> JoinHandle<()> {
        let subscription = self.queue.subscribe();
        let view = self.view.clone();
        let theme = self.theme;

        tokio::spawn(Self::forward(subscription, view, theme))
    }
}
