use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use tokio::sync::Mutex;
use tracing::debug;

use panel_common::{Target, View};

/// A self-clearing message slot.
///
/// Every `show` takes the next sequence number. The clear scheduled by a
/// message only runs if no later message was shown on the same channel, so a
/// newer message always outlives the older message's timer.
pub struct FeedbackChannel<V> {
    view: Arc<Mutex<V>>,
    target: Target,
    dwell: Duration,
    latest: Arc<AtomicU64>,
}

impl<V> Clone for FeedbackChannel<V> {
    fn clone(&self) -> Self {
        Self {
            view: self.view.clone(),
            target: self.target,
            dwell: self.dwell,
            latest: self.latest.clone(),
        }
    }
}

impl<V: View> FeedbackChannel<V> {
    pub fn new(view: Arc<Mutex<V>>, target: Target, dwell: Duration) -> Self {
        Self {
            view,
            target,
            dwell,
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Writes `text` now and schedules its clear. Returns the message's
    /// sequence number, or `None` when the slot is not shown.
    pub async fn show(&self, text: &str) -> Option<u64> {
        let seq = {
            let mut view = self.view.lock().await;
            if !view.has(self.target) {
                return None;
            }
            let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
            view.set_text(self.target, text);
            seq
        };

        let channel = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(channel.dwell).await;
            channel.clear_if_current(seq).await;
        });

        Some(seq)
    }

    async fn clear_if_current(&self, seq: u64) {
        let mut view = self.view.lock().await;
        if self.latest.load(Ordering::SeqCst) != seq {
            debug!("{} message {seq} superseded", self.target.id());
            return;
        }
        view.set_text(self.target, "");
    }
}
