//! Item Subscription
//!
//! Receiving end of the store's snapshot feed.

use tokio::sync::broadcast;

use crate::domain::ShoppingItem;

/// A live view of the item set.
///
/// Created by [`ItemStore::subscribe`](crate::store::ItemStore::subscribe).
/// The first [`recv`](Self::recv) returns the snapshot taken at subscribe
/// time; later calls wait for the set published after each effective
/// mutation.
pub struct ItemSubscription {
    initial: Option<Vec<ShoppingItem>>,
    rx: broadcast::Receiver<Vec<ShoppingItem>>,
}

impl ItemSubscription {
    pub(crate) fn new(
        initial: Vec<ShoppingItem>,
        rx: broadcast::Receiver<Vec<ShoppingItem>>,
    ) -> Self {
        Self {
            initial: Some(initial),
            rx,
        }
    }

    /// Receive the next full item set, or `None` once the store is gone.
    ///
    /// A subscriber that falls behind the channel capacity resumes from
    /// the oldest retained snapshot; every emission is the complete set,
    /// so nothing is lost.
    pub async fn recv(&mut self) -> Option<Vec<ShoppingItem>> {
        if let Some(items) = self.initial.take() {
            return Some(items);
        }
        loop {
            match self.rx.recv().await {
                Ok(items) => return Some(items),
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}
