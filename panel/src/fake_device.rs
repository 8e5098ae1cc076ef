//! In-process stand-in for the device HTTP API, used by the panel tests.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    extract::{OriginalUri, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use tokio::net::TcpListener;

use panel_common::{PanelConfig, PATH_AC_COMMAND, PATH_AC_STATE, PATH_LIGHT_COMMAND};

pub const HEAT_STATUS: &str =
    r#"{"power":true,"mode":"heat","temp":23,"fan":"low","timer_left":"00:05"}"#;

/// One scripted reply for the status endpoint.
#[derive(Debug, Clone)]
pub struct StateReply {
    pub delay: Duration,
    pub status: StatusCode,
    pub body: String,
}

impl StateReply {
    pub fn json(body: &str) -> Self {
        Self {
            delay: Duration::ZERO,
            status: StatusCode::OK,
            body: body.to_string(),
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Clone, Default)]
pub struct FakeDevice {
    requests: Arc<Mutex<Vec<String>>>,
    state_replies: Arc<Mutex<VecDeque<StateReply>>>,
    command_reply: Arc<Mutex<Option<(StatusCode, String)>>>,
}

impl FakeDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues replies for the status endpoint; once drained it answers `HEAT_STATUS`.
    pub fn with_state_replies(self, replies: impl IntoIterator<Item = StateReply>) -> Self {
        self.state_replies.lock().unwrap().extend(replies);
        self
    }

    pub fn with_command_reply(self, status: StatusCode, body: &str) -> Self {
        *self.command_reply.lock().unwrap() = Some((status, body.to_string()));
        self
    }

    /// Path and query of every request received, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|uri| uri.split('?').next() == Some(path))
            .count()
    }

    pub async fn start(&self) -> PanelConfig {
        let app = Router::new()
            .route(PATH_AC_COMMAND, get(handle_command))
            .route(PATH_LIGHT_COMMAND, get(handle_command))
            .route(PATH_AC_STATE, get(handle_state))
            .with_state(self.clone());
        config_for(serve(app).await)
    }

    fn record(&self, uri: &OriginalUri) {
        self.requests.lock().unwrap().push(uri.0.to_string());
    }
}

async fn handle_command(State(device): State<FakeDevice>, uri: OriginalUri) -> impl IntoResponse {
    device.record(&uri);
    let reply = device.command_reply.lock().unwrap().clone();
    reply.unwrap_or_else(|| (StatusCode::OK, "送信完了".to_string()))
}

async fn handle_state(State(device): State<FakeDevice>, uri: OriginalUri) -> impl IntoResponse {
    device.record(&uri);
    let reply = device
        .state_replies
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| StateReply::json(HEAT_STATUS));
    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }
    (reply.status, reply.body)
}

/// Serves `app` on an ephemeral local port and returns its base url.
pub async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

pub fn config_for(base_url: String) -> PanelConfig {
    PanelConfig {
        base_url,
        ..PanelConfig::default()
    }
}

/// A config whose base url points at a port nothing listens on.
pub async fn unreachable_config() -> PanelConfig {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    config_for(format!("http://{addr}"))
}
