//! Configuration surface: base URL, access key and default originator.

use serde::{Deserialize, Deserializer};

use crate::domain::{AccessKey, BaseUrl, Originator, ValidationError};

/// Environment variable holding the base URL (optional).
pub const ENV_BASE_URL: &str = "MESSAGEBIRD_BASE_URL";
/// Environment variable holding `AccessKey <key>`.
pub const ENV_AUTHORIZATION: &str = "MESSAGEBIRD_AUTHORIZATION";
/// Environment variable holding the default originator.
pub const ENV_ORIGINATOR: &str = "MESSAGEBIRD_ORIGINATOR";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required setting {name}")]
    Missing { name: &'static str },

    #[error("invalid setting {name}: {source}")]
    Invalid {
        name: &'static str,
        #[source]
        source: ValidationError,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
/// Validated client configuration.
///
/// Deserializing validates every field, so a loaded value is always usable:
///
/// ```json
/// {
///   "base_url": "https://rest.messagebird.com",
///   "authorization": "AccessKey live_xxx",
///   "messaging": { "originator": "SURFnet" }
/// }
/// ```
pub struct MessageBirdConfig {
    #[serde(default)]
    pub base_url: BaseUrl,
    #[serde(rename = "authorization", deserialize_with = "deserialize_authorization")]
    pub access_key: AccessKey,
    pub messaging: MessagingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessagingConfig {
    /// Originator used when the caller does not supply one.
    pub originator: Originator,
}

impl MessageBirdConfig {
    /// Build a configuration from raw strings, validating each of them.
    pub fn new(
        base_url: &str,
        authorization: &str,
        originator: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: BaseUrl::parse(base_url).map_err(|source| ConfigError::Invalid {
                name: "base_url",
                source,
            })?,
            access_key: AccessKey::from_authorization(authorization).map_err(|source| {
                ConfigError::Invalid {
                    name: "authorization",
                    source,
                }
            })?,
            messaging: MessagingConfig {
                originator: Originator::new(originator).map_err(|source| {
                    ConfigError::Invalid {
                        name: "messaging.originator",
                        source,
                    }
                })?,
            },
        })
    }

    /// Load from `MESSAGEBIRD_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup, e.g. a map in tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(ENV_BASE_URL).unwrap_or_else(|| BaseUrl::DEFAULT.to_owned());
        let authorization = lookup(ENV_AUTHORIZATION).ok_or(ConfigError::Missing {
            name: ENV_AUTHORIZATION,
        })?;
        let originator = lookup(ENV_ORIGINATOR).ok_or(ConfigError::Missing {
            name: ENV_ORIGINATOR,
        })?;
        Self::new(&base_url, &authorization, originator)
    }
}

fn deserialize_authorization<'de, D>(deserializer: D) -> Result<AccessKey, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    AccessKey::from_authorization(&value).map_err(serde::de::Error::custom)
}
