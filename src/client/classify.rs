//! Maps an HTTP status code and the decoded error list onto an [`Outcome`].

use crate::client::error::{ApiRuntimeReason, MessageBirdError};
use crate::domain::{DeliveryStatus, RawError, SendResult};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Classified result of one `/messages` call.
///
/// Only the status code decides the variant; the errors are carried along.
pub enum Outcome {
    /// 2xx: the request was accepted. Delivery may still have failed.
    Success { errors: Vec<RawError> },
    /// 401: the access key was rejected.
    AccessDenied { errors: Vec<RawError> },
    /// 422: the message content or shape was rejected.
    Unprocessable { errors: Vec<RawError> },
    /// Any other 4xx.
    ClientError { status: u16, errors: Vec<RawError> },
    /// 5xx.
    ServerError { status: u16, errors: Vec<RawError> },
    /// 1xx, 3xx or anything outside the HTTP range.
    Unexpected { status: u16, errors: Vec<RawError> },
}

pub fn classify(status: u16, errors: Vec<RawError>) -> Outcome {
    match status {
        200..=299 => Outcome::Success { errors },
        401 => Outcome::AccessDenied { errors },
        422 => Outcome::Unprocessable { errors },
        400..=499 => Outcome::ClientError { status, errors },
        500..=599 => Outcome::ServerError { status, errors },
        _ => Outcome::Unexpected { status, errors },
    }
}

impl Outcome {
    pub fn errors(&self) -> &[RawError] {
        match self {
            Self::Success { errors }
            | Self::AccessDenied { errors }
            | Self::Unprocessable { errors }
            | Self::ClientError { errors, .. }
            | Self::ServerError { errors, .. }
            | Self::Unexpected { errors, .. } => errors,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Turn the outcome into the client's return value.
    ///
    /// `delivery_status` is only used for [`Outcome::Success`].
    pub fn into_result(self, delivery_status: DeliveryStatus) -> Result<SendResult, MessageBirdError> {
        match self {
            Self::Success { errors } => Ok(SendResult::new(delivery_status, errors)),
            Self::AccessDenied { errors } => Err(MessageBirdError::AccessKeyInvalid { errors }),
            Self::Unprocessable { errors } => {
                Err(MessageBirdError::UnprocessableMessage { errors })
            }
            Self::ClientError { status, errors } => {
                Err(MessageBirdError::ApiClient { status, errors })
            }
            Self::ServerError { status, errors } => Err(MessageBirdError::ApiRuntime {
                reason: ApiRuntimeReason::ServerError { status },
                errors,
            }),
            Self::Unexpected { status, errors } => Err(MessageBirdError::ApiRuntime {
                reason: ApiRuntimeReason::UnexpectedStatus { status },
                errors,
            }),
        }
    }
}
