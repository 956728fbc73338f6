use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::theme::Color;
use crate::entity::Dominio;

/// A system notification as captured from the device, before the ingestion
/// service turns it into a deposit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapturedNotification {
    pub title: String,
    pub timestamp: DateTime<Utc>,
    pub data: NotificationPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub title: String,
    pub body: String,
    pub raw: String,
    #[serde(rename = "packageName", default, skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
}

impl CapturedNotification {
    /// Builds a notification from its visible parts, rendering the raw
    /// payload the way the Android listener dumps notification extras.
    pub fn from_parts(
        package_name: Option<String>,
        title: &str,
        body: &str,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let mut raw = format!("android.title={}\nandroid.text={}", title, body);
        if let Some(package_name) = &package_name {
            raw.push_str(&format!("\nandroid.deleteIntent.pkg={}", package_name));
        }

        Self {
            title: format!("Notificación de {}", title),
            timestamp,
            data: NotificationPayload {
                title: title.to_string(),
                body: body.to_string(),
                raw,
                package_name,
            },
        }
    }

    pub fn provider(&self) -> Option<Dominio> {
        self.data
            .package_name
            .as_deref()
            .and_then(Dominio::from_package_name)
    }

    pub fn app_color(&self, default: Color) -> Color {
        self.provider()
            .map(|dominio| dominio.color_or(default))
            .unwrap_or(default)
    }
}

const YAPE_SAMPLE_RAW: &str = "android.title=Yape
android.text=Has recibido S/ 100.00 de Juan Pérez
android.subText=null
android.settingsText=null
android.infoText=null
android.template=android.app.Notification$BigTextStyle
android.showChronometer=false
android.showWhen=true
android.useDefaultSound=true
android.deleteIntent.pkg=com.bcp.innovacxion.yapeapp";

// Fixed payloads shown on the notifications screen until a live capture feed exists
pub fn sample_notifications(now: DateTime<Utc>) -> Vec<CapturedNotification> {
    vec![
        CapturedNotification {
            title: "Notificación de Yape".to_string(),
            timestamp: now,
            data: NotificationPayload {
                title: "Yape".to_string(),
                body: "Has recibido S/ 100.00 de Juan Pérez".to_string(),
                raw: YAPE_SAMPLE_RAW.to_string(),
                package_name: Some("com.bcp.innovacxion.yapeapp".to_string()),
            },
        },
        CapturedNotification {
            title: "Notificación de BCP".to_string(),
            timestamp: now - Duration::hours(1),
            data: NotificationPayload {
                title: "BCP".to_string(),
                body: "Transferencia recibida: S/ 50.00".to_string(),
                raw: "Datos completos de la notificación".to_string(),
                package_name: None,
            },
        },
    ]
}
