pub mod notification_queue;

pub use notification_queue::{NotificationQueue, Subscription};
