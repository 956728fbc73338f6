//! Owned store for captured system notifications.
//!
//! Keeps the most recent `capacity` notifications and fans each new one out
//! to subscribers over bounded channels. A subscriber that falls behind
//! loses deliveries instead of stalling `push`.

use log::{debug, info, warn};
use std::collections::{HashMap, VecDeque};
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tokio::sync::mpsc::{self, error::TrySendError};

use crate::entity::CapturedNotification;

struct QueueState {
    entries: VecDeque<CapturedNotification>,
    subscribers: HashMap<u64, mpsc::Sender<CapturedNotification>>,
    next_subscriber_id: u64,
}

pub struct NotificationQueue {
    capacity: NonZeroUsize,
    state: Mutex<QueueState>,
}

impl NotificationQueue {
    pub fn new(capacity: NonZeroUsize) -> Arc<Self> {
        Arc::new(Self {
            capacity,
            state: Mutex::new(QueueState {
                entries: VecDeque::with_capacity(capacity.get()),
                subscribers: HashMap::new(),
                next_subscriber_id: 1,
            }),
        })
    }

    fn lock_state(&self) -> MutexGuard<'_, QueueState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    pub fn len(&self) -> usize {
        self.lock_state().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stores `notification`, evicting the oldest entry when full, and
    /// delivers it to every live subscriber.
    pub fn push(&self, notification: CapturedNotification) {
        let mut state = self.lock_state();

        if state.entries.len() == self.capacity.get() {
            state.entries.pop_front();
            debug!("Notification queue full, evicted oldest entry");
        }
        state.entries.push_back(notification.clone());

        state.subscribers.retain(|id, sender| {
            match sender.try_send(notification.clone()) {
                Ok(()) => true,
                Err(TrySendError::Full(_)) => {
                    warn!("Subscriber {} is lagging, dropped a notification", id);
                    true
                }
                Err(TrySendError::Closed(_)) => {
                    debug!("Subscriber {} went away", id);
                    false
                }
            }
        });
    }

    /// Retained notifications, newest first.
    pub fn snapshot(&self) -> Vec<CapturedNotification> {
        self.lock_state().entries.iter().rev().cloned().collect()
    }

    /// Registers a new subscriber. Deliveries start with the next `push`.
    pub fn subscribe(self: &Arc<Self>) -> Subscription {
        let (sender, receiver) = mpsc::channel(self.capacity.get());
        let mut state = self.lock_state();
        let id = state.next_subscriber_id;
        state.next_subscriber_id += 1;
        state.subscribers.insert(id, sender);
        info!("Notification subscriber {} registered", id);

        Subscription {
            id,
            receiver,
            queue: Arc::downgrade(self),
        }
    }

    /// Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&self, id: u64) -> bool {
        let removed = self.lock_state().subscribers.remove(&id).is_some();
        if removed {
            info!("Notification subscriber {} removed", id);
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock_state().subscribers.len()
    }
}

/// Receiving end of a queue subscription. Dropping it unsubscribes.
pub struct Subscription {
    id: u64,
    receiver: mpsc::Receiver<CapturedNotification>,
    queue: Weak<NotificationQueue>,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Waits for the next notification. `None` once unsubscribed or the
    /// queue is gone.
    pub async fn recv(&mut self) -> Option<CapturedNotification> {
        self.receiver.recv().await
    }

    pub fn try_recv(&mut self) -> Option<CapturedNotification> {
        self.receiver.try_recv().ok()
    }

    pub fn unsubscribe(self) {
        // Drop does the work
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(queue) = self.queue.upgrade() {
            queue.unsubscribe(self.id);
        }
    }
}
