use std::{sync::Arc, time::Duration};

use tokio::{sync::Mutex, task::JoinHandle};
use tracing::{info, warn};

use panel_common::{AcMode, Command, FanLevel, Input, PanelConfig, Target, View};

use crate::{
    dispatch::Dispatcher,
    feedback::FeedbackChannel,
    http::{HttpClient, HttpError},
    sync::{RefreshOutcome, StateSync},
};

/// The panel's click handlers, wired to one view.
pub struct Panel<V> {
    view: Arc<Mutex<V>>,
    dispatcher: Dispatcher<V>,
    sync: StateSync<V>,
    toast: FeedbackChannel<V>,
    poll_interval: Duration,
}

impl<V: View> Panel<V> {
    pub fn new(config: &PanelConfig, view: Arc<Mutex<V>>) -> Result<Self, HttpError> {
        let http = HttpClient::new(config)?;
        let dwell = Duration::from_millis(config.feedback_dwell_ms);

        let sync = StateSync::new(http.clone(), view.clone());
        let feedback = FeedbackChannel::new(view.clone(), Target::Msg, dwell);
        let toast = FeedbackChannel::new(view.clone(), Target::Toast, dwell);

        Ok(Self {
            dispatcher: Dispatcher::new(http, feedback, sync.clone()),
            sync,
            toast,
            view,
            poll_interval: Duration::from_millis(config.poll_interval_ms),
        })
    }

    pub fn view(&self) -> &Arc<Mutex<V>> {
        &self.view
    }

    /// Runs the launch refresh, then starts the fixed-interval poll loop.
    pub async fn start(&self) -> JoinHandle<()> {
        self.refresh().await;
        self.sync.spawn_poll_loop(self.poll_interval)
    }

    pub async fn refresh(&self) -> RefreshOutcome {
        self.sync.refresh().await
    }

    /// Sends `command` in the background. Transport failures are only logged.
    pub fn spawn_send(&self, command: Command) -> JoinHandle<()> {
        let dispatcher = self.dispatcher.clone();
        tokio::spawn(async move {
            match dispatcher.send(&command).await {
                Ok(reply) if !reply.ok => {
                    info!("device answered {command:?} with status {}", reply.status)
                }
                Ok(_) => {}
                Err(err) => warn!("command {command:?} not delivered: {err}"),
            }
        })
    }

    pub fn ac_mode(&self, mode: AcMode) -> JoinHandle<()> {
        self.spawn_send(Command::ModeChange(mode))
    }

    pub fn ac_temp_step(&self, delta: i32) -> JoinHandle<()> {
        self.spawn_send(Command::TempStep(delta))
    }

    pub fn ac_fan(&self, level: FanLevel) -> JoinHandle<()> {
        self.spawn_send(Command::FanSet(level))
    }

    pub fn ac_power_off(&self) -> JoinHandle<()> {
        self.spawn_send(Command::PowerOff)
    }

    /// Sets the off timer from the `mins` input; an absent input sends an empty value.
    pub async fn ac_set_timer(&self) -> JoinHandle<()> {
        let minutes = self
            .view
            .lock()
            .await
            .input_value(Input::Mins)
            .unwrap_or_default();
        self.spawn_send(Command::TimerSet(minutes))
    }

    pub fn ac_cancel_timer(&self) -> JoinHandle<()> {
        self.spawn_send(Command::TimerCancel)
    }

    pub fn light_cmd(&self, cmd: impl Into<String>) -> JoinHandle<()> {
        self.spawn_send(Command::Light(cmd.into()))
    }

    pub async fn toast(&self, text: &str) -> Option<u64> {
        self.toast.show(text).await
    }
}
