use once_cell::sync::Lazy;
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

use crate::domain::validation::ValidationError;

static RECIPIENT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid recipient pattern"));

static ORIGINATOR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[0-9]+|[A-Za-z0-9]{1,11})$").expect("valid originator pattern")
});

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
/// Sender identity shown to the recipient (`originator`).
///
/// Invariant: either digits only (any length), or 1 to 11 ASCII alphanumeric
/// characters. The value is kept exactly as provided.
pub struct Originator(String);

impl Originator {
    /// JSON field name used by MessageBird (`originator`).
    pub const FIELD: &'static str = "originator";

    /// Create a validated [`Originator`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !ORIGINATOR_PATTERN.is_match(&value) {
            return Err(ValidationError::InvalidOriginator { input: value });
        }
        Ok(Self(value))
    }

    /// Borrow the validated originator.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this originator is a phone number rather than an alphanumeric name.
    pub fn is_numeric(&self) -> bool {
        RECIPIENT_PATTERN.is_match(&self.0)
    }
}

impl TryFrom<String> for Originator {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Destination phone number (`recipients`).
///
/// Country code, area code and subscriber number without any separators,
/// e.g. `31612345678`. Invariant: non-empty, ASCII digits only.
pub struct Recipient(String);

impl Recipient {
    /// JSON field name used by MessageBird (`recipients`).
    pub const FIELD: &'static str = "recipients";

    /// Create a validated [`Recipient`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !RECIPIENT_PATTERN.is_match(&value) {
            return Err(ValidationError::InvalidRecipient { input: value });
        }
        Ok(Self(value))
    }

    /// Borrow the validated phone number.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
/// MessageBird access key, sent as `Authorization: AccessKey <key>`.
///
/// Invariant: non-empty after trimming. The key is never printed by `Debug`.
pub struct AccessKey(SecretString);

impl AccessKey {
    /// Scheme prefix of the `Authorization` header value.
    pub const SCHEME: &'static str = "AccessKey ";

    /// Create a validated [`AccessKey`] from the bare key.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: "access_key",
            });
        }
        Ok(Self(SecretString::from(trimmed.to_owned())))
    }

    /// Parse a full header value of the form `AccessKey <key>`.
    pub fn from_authorization(value: &str) -> Result<Self, ValidationError> {
        let key = value
            .strip_prefix(Self::SCHEME)
            .ok_or(ValidationError::InvalidAuthorization)?;
        Self::new(key).map_err(|_| ValidationError::InvalidAuthorization)
    }

    /// Render the `Authorization` header value. Exposes the secret.
    pub fn authorization_value(&self) -> String {
        format!("{}{}", Self::SCHEME, self.0.expose_secret())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
/// Base URL of the MessageBird REST API.
///
/// Invariant: parses as an absolute URL with both a scheme and a host.
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Production endpoint.
    pub const DEFAULT: &'static str = "https://rest.messagebird.com";

    /// Parse and validate a base URL.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let invalid = |reason: String| ValidationError::InvalidBaseUrl {
            input: value.to_owned(),
            reason,
        };
        let url = Url::parse(value).map_err(|err| invalid(err.to_string()))?;
        if url.scheme().is_empty() || url.host_str().is_none_or(str::is_empty) {
            return Err(invalid("scheme and host are required".to_owned()));
        }
        Ok(Self(url))
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Resolve an absolute endpoint path (e.g. `/messages`) against this base.
    pub fn join(&self, path: &str) -> Result<Url, url::ParseError> {
        self.0.join(path)
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self(Url::parse(Self::DEFAULT).expect("valid default base URL"))
    }
}

impl TryFrom<String> for BaseUrl {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}
