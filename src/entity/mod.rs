mod deposit_error;
mod deposito;
mod dominio;
mod notification;
mod origen;
mod theme;

pub use deposit_error::DepositError;
pub use deposito::{Deposito, DepositoUpdate, NewDeposito};
pub use dominio::{dominio_color, Dominio};
pub use notification::{sample_notifications, CapturedNotification, NotificationPayload};
pub use origen::{origen_icon, Origen};
pub use theme::{Color, Theme, BCP_BLUE, YAPE_PURPLE};
