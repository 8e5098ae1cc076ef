use panel_common::{
    render::{feedback_for_reply, FEEDBACK_SENDING},
    Command, View,
};

use crate::{
    feedback::FeedbackChannel,
    http::{HttpClient, HttpError, HttpResult},
    sync::StateSync,
};

/// Sends commands and reports the device's reply through the feedback slot.
pub struct Dispatcher<V> {
    http: HttpClient,
    feedback: FeedbackChannel<V>,
    sync: StateSync<V>,
}

impl<V> Clone for Dispatcher<V> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            feedback: self.feedback.clone(),
            sync: self.sync.clone(),
        }
    }
}

impl<V: View> Dispatcher<V> {
    pub fn new(http: HttpClient, feedback: FeedbackChannel<V>, sync: StateSync<V>) -> Self {
        Self {
            http,
            feedback,
            sync,
        }
    }

    /// Sends `command` once. Any HTTP reply, error statuses included, is shown
    /// verbatim; AC commands then refresh the status regions. A transport
    /// failure is returned as is and skips both steps.
    pub async fn send(&self, command: &Command) -> Result<HttpResult<String>, HttpError> {
        self.feedback.show(FEEDBACK_SENDING).await;

        let url = self.http.command_url(command)?;
        let result = self.http.get_text(url).await?;
        self.feedback.show(&feedback_for_reply(&result.body)).await;

        if command.refreshes_state() {
            self.sync.refresh().await;
        }
        Ok(result)
    }
}
