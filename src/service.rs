//! Logging integration layer.
//!
//! [`MessagingService`] wraps a [`MessageBirdClient`], logs every failed send
//! with the message context, and turns classified API failures into a neutral
//! "not sent" (`Ok(None)`) so callers never have to match on API errors.

use crate::client::{MessageBirdClient, MessageBirdError};
use crate::config::MessageBirdConfig;
use crate::domain::{Message, Originator, Recipient, SendResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How loudly a failed send is reported.
///
/// `tracing` has no notice or critical level: notice is emitted at INFO and
/// critical at ERROR, with the original name in the `severity` field.
pub enum Severity {
    Notice,
    Warning,
    Error,
    Critical,
}

impl Severity {
    /// Severity for an error raised by the client; `None` for errors that are
    /// propagated instead of logged.
    pub fn of(err: &MessageBirdError) -> Option<Self> {
        match err {
            MessageBirdError::UnprocessableMessage { .. } => Some(Self::Notice),
            MessageBirdError::AccessKeyInvalid { .. } => Some(Self::Critical),
            MessageBirdError::ApiClient { .. } => Some(Self::Warning),
            MessageBirdError::ApiRuntime { .. } => Some(Self::Error),
            MessageBirdError::Transport(_) | MessageBirdError::Validation(_) => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Notice => "notice",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone)]
pub struct MessagingService {
    client: MessageBirdClient,
    originator: Originator,
}

impl MessagingService {
    pub fn new(client: MessageBirdClient, originator: Originator) -> Self {
        Self { client, originator }
    }

    /// Build the client and service from configuration.
    pub fn from_config(config: &MessageBirdConfig) -> Result<Self, MessageBirdError> {
        Ok(Self::new(
            MessageBirdClient::from_config(config)?,
            config.messaging.originator.clone(),
        ))
    }

    /// The originator used by [`MessagingService::send_text`].
    pub fn originator(&self) -> &Originator {
        &self.originator
    }

    /// Send a message, logging any failure.
    ///
    /// Returns `Some(result)` whenever MessageBird accepted the request (the
    /// result may still describe a failed delivery) and `None` when the API
    /// rejected it. Transport failures are returned as errors.
    pub async fn send(&self, message: &Message) -> Result<Option<SendResult>, MessageBirdError> {
        match self.client.send(message).await {
            Ok(result) => {
                if !result.is_success() {
                    log_unsuccessful_result(message, &result);
                }
                Ok(Some(result))
            }
            Err(err) => match Severity::of(&err) {
                Some(severity) => {
                    let text = format!("MessageBird: {err}");
                    log(severity, message, &err.error_string(), &text);
                    Ok(None)
                }
                None => Err(err),
            },
        }
    }

    /// Send `body` to `recipient` from the configured originator.
    pub async fn send_text(
        &self,
        recipient: Recipient,
        body: impl Into<String>,
    ) -> Result<Option<SendResult>, MessageBirdError> {
        let message = Message::from_parts(self.originator.clone(), recipient, body);
        self.send(&message).await
    }
}

fn log_unsuccessful_result(message: &Message, result: &SendResult) {
    let errors = result.errors_as_string();
    if result.is_access_key_invalid() {
        log(
            Severity::Critical,
            message,
            &errors,
            "Invalid access key used for MessageBird",
        );
    } else if result.is_message_invalid() {
        log(
            Severity::Notice,
            message,
            &errors,
            "Invalid message sent to MessageBird",
        );
    } else {
        let text = format!(
            "MessageBird did not deliver the message (status {})",
            result.delivery_status()
        );
        log(Severity::Warning, message, &errors, &text);
    }
}

fn log(severity: Severity, message: &Message, errors: &str, text: &str) {
    let recipient = message.recipient().as_str();
    let body = message.body();
    let severity_name = severity.as_str();
    match severity {
        Severity::Notice => {
            tracing::info!(severity = severity_name, recipient, body, errors, "{text}")
        }
        Severity::Warning => {
            tracing::warn!(severity = severity_name, recipient, body, errors, "{text}")
        }
        Severity::Error | Severity::Critical => {
            tracing::error!(severity = severity_name, recipient, body, errors, "{text}")
        }
    }
}
