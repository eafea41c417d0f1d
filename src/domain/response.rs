use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Delivery lifecycle stage reported by MessageBird for the first recipient.
///
/// Values this crate does not know collapse to [`DeliveryStatus::Unknown`].
pub enum DeliveryStatus {
    Scheduled,
    Buffered,
    Sent,
    Delivered,
    DeliveryFailed,
    NotSent,
    Unknown,
}

impl DeliveryStatus {
    /// Map the API's status string; anything unrecognized becomes `Unknown`.
    pub fn from_api(value: &str) -> Self {
        match value {
            "scheduled" => Self::Scheduled,
            "buffered" => Self::Buffered,
            "sent" => Self::Sent,
            "delivered" => Self::Delivered,
            "delivery_failed" => Self::DeliveryFailed,
            "not_sent" => Self::NotSent,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Buffered => "buffered",
            Self::Sent => "sent",
            Self::Delivered => "delivered",
            Self::DeliveryFailed => "delivery_failed",
            Self::NotSent => "not_sent",
            Self::Unknown => "unknown",
        }
    }

    /// Whether the message was accepted for delivery (or already delivered).
    pub fn is_accepted(self) -> bool {
        matches!(
            self,
            Self::Buffered | Self::Sent | Self::Delivered | Self::Scheduled
        )
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known MessageBird error codes.
pub enum ApiErrorCode {
    RequestNotAllowed,
    MissingParams,
    InvalidParams,
    NotFound,
    NotEnoughBalance,
    ApiNotFound,
    InternalError,
}

impl ApiErrorCode {
    /// Convert a raw integer error code into a known variant.
    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            2 => Self::RequestNotAllowed,
            9 => Self::MissingParams,
            10 => Self::InvalidParams,
            20 => Self::NotFound,
            25 => Self::NotEnoughBalance,
            98 => Self::ApiNotFound,
            99 => Self::InternalError,
            _ => return None,
        })
    }

    pub fn code(self) -> i64 {
        match self {
            Self::RequestNotAllowed => 2,
            Self::MissingParams => 9,
            Self::InvalidParams => 10,
            Self::NotFound => 20,
            Self::NotEnoughBalance => 25,
            Self::ApiNotFound => 98,
            Self::InternalError => 99,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One entry of the `errors` array returned by MessageBird.
pub struct RawError {
    pub code: i64,
    pub description: String,
    pub parameter: Option<String>,
}

impl RawError {
    /// Map the raw code to a known variant, if one exists.
    pub fn known_code(&self) -> Option<ApiErrorCode> {
        ApiErrorCode::from_code(self.code)
    }
}

impl fmt::Display for RawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(#{}) {}", self.code, self.description)
    }
}

/// Render errors as `(#9) no (correct) recipients found; (#10) originator is invalid`.
pub fn format_errors(errors: &[RawError]) -> String {
    errors
        .iter()
        .map(RawError::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of one accepted send request.
///
/// A `SendResult` can still describe a failed delivery: inspect
/// [`SendResult::is_success`] rather than assuming success.
pub struct SendResult {
    delivery_status: DeliveryStatus,
    errors: Vec<RawError>,
}

impl SendResult {
    pub fn new(delivery_status: DeliveryStatus, errors: Vec<RawError>) -> Self {
        Self {
            delivery_status,
            errors,
        }
    }

    /// Build from the API's status string, collapsing unknown values.
    pub fn from_api_status(status: &str, errors: Vec<RawError>) -> Self {
        Self::new(DeliveryStatus::from_api(status), errors)
    }

    pub fn delivery_status(&self) -> DeliveryStatus {
        self.delivery_status
    }

    pub fn raw_errors(&self) -> &[RawError] {
        &self.errors
    }

    /// No errors were reported and the message was accepted for delivery.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty() && self.delivery_status.is_accepted()
    }

    /// MessageBird reported invalid parameters (code 10).
    pub fn is_message_invalid(&self) -> bool {
        self.has_error(ApiErrorCode::InvalidParams)
    }

    /// MessageBird did not allow the request (code 2), usually a bad access key.
    pub fn is_access_key_invalid(&self) -> bool {
        self.has_error(ApiErrorCode::RequestNotAllowed)
    }

    pub fn errors_as_string(&self) -> String {
        format_errors(&self.errors)
    }

    fn has_error(&self, code: ApiErrorCode) -> bool {
        self.errors.iter().any(|error| error.code == code.code())
    }
}
