use std::{sync::Arc, time::Duration};

use tokio::{
    sync::Mutex,
    task::JoinHandle,
    time::{Interval, MissedTickBehavior},
};
use tracing::{debug, warn};

use panel_common::{render, render_failure, AcStatus, AcTargets, View, PATH_AC_STATE};

use crate::http::HttpClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// No AC region is shown; nothing was requested.
    Idle,
    Updated,
    Failed,
}

/// Mirrors the device's AC status into the view.
pub struct StateSync<V> {
    http: HttpClient,
    view: Arc<Mutex<V>>,
}

impl<V> Clone for StateSync<V> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            view: self.view.clone(),
        }
    }
}

impl<V: View> StateSync<V> {
    pub fn new(http: HttpClient, view: Arc<Mutex<V>>) -> Self {
        Self { http, view }
    }

    /// One poll tick. Region presence is checked before the request and
    /// again when the result is applied, since the view may change while the
    /// request is in flight.
    pub async fn refresh(&self) -> RefreshOutcome {
        let targets = AcTargets::of(&*self.view.lock().await);
        if targets.is_empty() {
            debug!("no ac regions shown, skipping poll");
            return RefreshOutcome::Idle;
        }

        let fetched = match self.http.url(PATH_AC_STATE) {
            Ok(url) => self.http.get_json::<AcStatus>(url).await,
            Err(err) => Err(err),
        };

        let mut view = self.view.lock().await;
        let targets = AcTargets::of(&*view);
        match fetched {
            Ok(result) => {
                view.apply(&render(&result.body, targets));
                RefreshOutcome::Updated
            }
            Err(err) => {
                warn!("ac status poll failed: {err}");
                view.apply(&render_failure(targets));
                RefreshOutcome::Failed
            }
        }
    }

    /// Polls forever at `interval`. Each tick runs in its own task, so a slow
    /// response never delays the next tick and responses may land out of order.
    pub fn spawn_poll_loop(&self, interval: Duration) -> JoinHandle<()> {
        let sync = self.clone();
        tokio::spawn(async move {
            let mut ticker = poll_ticker(interval);
            // The first tick completes immediately; the launch refresh covers it.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let tick = sync.clone();
                tokio::spawn(async move {
                    tick.refresh().await;
                });
            }
        })
    }
}

/// A stalled host resumes on the normal cadence instead of bursting catch-up polls.
fn poll_ticker(interval: Duration) -> Interval {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}
