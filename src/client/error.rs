use std::error::Error as StdError;

use crate::domain::{RawError, ValidationError, format_errors};

pub type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`MessageBirdClient`](crate::MessageBirdClient).
///
/// API-level variants carry the raw `errors` array exactly as MessageBird
/// returned it; their message ends with the formatted error string.
pub enum MessageBirdError {
    /// HTTP 401: MessageBird rejected the configured access key.
    #[error("access key was rejected (HTTP 401){}", errors_suffix(.errors))]
    AccessKeyInvalid { errors: Vec<RawError> },

    /// HTTP 422: MessageBird could not process the message.
    #[error("message could not be processed (HTTP 422){}", errors_suffix(.errors))]
    UnprocessableMessage { errors: Vec<RawError> },

    /// Any other 4xx response.
    #[error("request was rejected (HTTP {status}){}", errors_suffix(.errors))]
    ApiClient { status: u16, errors: Vec<RawError> },

    /// 5xx, malformed responses and unexpected status codes.
    #[error("{reason}{}", errors_suffix(.errors))]
    ApiRuntime {
        #[source]
        reason: ApiRuntimeReason,
        errors: Vec<RawError>,
    },

    /// HTTP client / transport failure (DNS, TLS, connection refused, timeouts).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, thiserror::Error)]
pub enum ApiRuntimeReason {
    #[error("the MessageBird server did not return valid JSON")]
    InvalidJson(#[source] BoxError),

    #[error("the MessageBird server returned a malformed response")]
    MalformedResponse(#[source] BoxError),

    #[error("MessageBird server error (HTTP {status})")]
    ServerError { status: u16 },

    #[error("unexpected MessageBird server behaviour (HTTP {status})")]
    UnexpectedStatus { status: u16 },
}

impl MessageBirdError {
    /// The `errors` array returned by the API; empty for local failures.
    pub fn raw_errors(&self) -> &[RawError] {
        match self {
            Self::AccessKeyInvalid { errors }
            | Self::UnprocessableMessage { errors }
            | Self::ApiClient { errors, .. }
            | Self::ApiRuntime { errors, .. } => errors,
            Self::Transport(_) | Self::Validation(_) => &[],
        }
    }

    /// The API errors formatted as `(#code) description; ...`.
    pub fn error_string(&self) -> String {
        format_errors(self.raw_errors())
    }

    /// HTTP status code of the response this error was classified from, if known.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::AccessKeyInvalid { .. } => Some(401),
            Self::UnprocessableMessage { .. } => Some(422),
            Self::ApiClient { status, .. } => Some(*status),
            Self::ApiRuntime { reason, .. } => match reason {
                ApiRuntimeReason::ServerError { status }
                | ApiRuntimeReason::UnexpectedStatus { status } => Some(*status),
                ApiRuntimeReason::InvalidJson(_) | ApiRuntimeReason::MalformedResponse(_) => None,
            },
            Self::Transport(_) | Self::Validation(_) => None,
        }
    }
}

fn errors_suffix(errors: &[RawError]) -> String {
    if errors.is_empty() {
        String::new()
    } else {
        format!(": {}", format_errors(errors))
    }
}
