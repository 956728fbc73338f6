use anyhow::Result;
use async_trait::async_trait;

use crate::entity::{CapturedNotification, Color, Theme};
use crate::utils::format_date;
use crate::view::{write_block, Output};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationCard {
    pub title: String,
    pub time: String,
    pub body: String,
    pub package_name: Option<String>,
    pub app_color: Color,
    pub raw: String,
}

impl NotificationCard {
    pub fn new(notification: &CapturedNotification, theme: &Theme) -> Self {
        Self {
            title: notification.title.clone(),
            time: format_date(&notification.timestamp),
            body: notification.data.body.clone(),
            package_name: notification.data.package_name.clone(),
            app_color: notification.app_color(theme.tint),
            raw: notification.data.raw.trim().to_string(),
        }
    }
}

#[async_trait]
pub trait NotificationView: Send + Sync {
    async fn display_notifications(&self, cards: Vec<NotificationCard>, sample: bool) -> Result<()>;
    async fn display_new_notification(&self, card: NotificationCard) -> Result<()>;
}

pub struct ConsoleNotificationView {
    output: Output,
}

impl ConsoleNotificationView {
    pub fn new(output: Output) -> Self {
        Self { output }
    }
}

fn render_card(card: &NotificationCard) -> String {
    let mut text = format!("  {}  {}\n    {}\n", card.title, card.time, card.body);
    if let Some(package_name) = &card.package_name {
        text.push_str(&format!("    [{}]\n", package_name));
    }
    text.push_str("    Datos Raw:\n");
    for line in card.raw.lines() {
        text.push_str(&format!("      {}\n", line));
    }
    text
}

#[async_trait]
impl NotificationView for ConsoleNotificationView {
    async fn display_notifications(&self, cards: Vec<NotificationCard>, sample: bool) -> Result<()> {
        let mut text = String::from(
            "\nNotificaciones entrantes en formato raw para análisis y desarrollo.\n",
        );
        if sample {
            text.push_str("(datos de ejemplo)\n");
        }
        text.push('\n');
        for card in &cards {
            text.push_str(&render_card(card));
            text.push('\n');
        }
        write_block(&self.output, &text)
    }

    async fn display_new_notification(&self, card: NotificationCard) -> Result<()> {
        write_block(
            &self.output,
            &format!("\nNueva notificación:\n{}", render_card(&card)),
        )
    }
}
