//! Client layer: orchestrates the transport call and maps transport ↔ domain.

mod classify;
mod error;

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::config::MessageBirdConfig;
use crate::domain::{AccessKey, BaseUrl, DeliveryStatus, Message, SendResult, ValidationError};
use crate::transport::{
    MESSAGES_PATH, TransportError, decode_send_message_json_response, encode_send_message_json,
};

pub use classify::{Outcome, classify};
pub use error::{ApiRuntimeReason, BoxError, MessageBirdError};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Status code and raw body of one HTTP response.
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Issues one HTTP POST with a JSON body against the MessageBird API.
///
/// Implementations attach the `Authorization` header themselves and must not
/// fail on non-2xx responses; only transport-level failures are errors.
pub trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        path: &'a str,
        body: serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone)]
/// Default [`HttpTransport`] backed by `reqwest`.
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: BaseUrl,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        path: &'a str,
        body: serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let url = self.base_url.join(path)?;
            let response = self.client.post(url).json(&body).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// Builder for [`MessageBirdClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct MessageBirdClientBuilder {
    access_key: AccessKey,
    base_url: BaseUrl,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl MessageBirdClientBuilder {
    /// Create a builder with the production base URL and no timeout/user-agent override.
    pub fn new(access_key: AccessKey) -> Self {
        Self {
            access_key,
            base_url: BaseUrl::default(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base URL (`https://rest.messagebird.com` by default).
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = base_url;
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`MessageBirdClient`] using [`ReqwestTransport`].
    pub fn build(self) -> Result<MessageBirdClient, MessageBirdError> {
        let mut authorization = HeaderValue::from_str(&self.access_key.authorization_value())
            .map_err(|_| ValidationError::InvalidAuthorization)?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| MessageBirdError::Transport(Box::new(err)))?;

        Ok(MessageBirdClient::with_transport(Arc::new(ReqwestTransport {
            client,
            base_url: self.base_url,
        })))
    }
}

#[derive(Clone)]
/// High-level MessageBird client.
///
/// Sends one message per call through `POST /messages` and classifies the
/// response. The client holds no per-call state and can be shared freely.
pub struct MessageBirdClient {
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for MessageBirdClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageBirdClient").finish_non_exhaustive()
    }
}

impl MessageBirdClient {
    /// Create a client for the production API.
    ///
    /// For more customization, use [`MessageBirdClient::builder`].
    pub fn new(access_key: AccessKey) -> Result<Self, MessageBirdError> {
        Self::builder(access_key).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(access_key: AccessKey) -> MessageBirdClientBuilder {
        MessageBirdClientBuilder::new(access_key)
    }

    /// Create a client from a validated [`MessageBirdConfig`].
    pub fn from_config(config: &MessageBirdConfig) -> Result<Self, MessageBirdError> {
        Self::builder(config.access_key.clone())
            .base_url(config.base_url.clone())
            .build()
    }

    /// Create a client on top of a caller-provided transport.
    pub fn with_transport(http: Arc<dyn HttpTransport>) -> Self {
        Self { http }
    }

    /// Send one SMS through MessageBird.
    ///
    /// Any 2xx response yields a [`SendResult`]; check
    /// [`SendResult::is_success`] since the API can accept a request without
    /// delivering it.
    ///
    /// Errors:
    /// - [`MessageBirdError::AccessKeyInvalid`] for HTTP 401,
    /// - [`MessageBirdError::UnprocessableMessage`] for HTTP 422,
    /// - [`MessageBirdError::ApiClient`] for other 4xx responses,
    /// - [`MessageBirdError::ApiRuntime`] for 5xx, unexpected status codes and
    ///   bodies that are not valid JSON or lack required fields,
    /// - [`MessageBirdError::Transport`] when the request never completed.
    #[tracing::instrument(
        name = "MessageBirdClient::send",
        skip_all,
        fields(recipient = message.recipient().as_str())
    )]
    pub async fn send(&self, message: &Message) -> Result<SendResult, MessageBirdError> {
        let body = encode_send_message_json(message);

        let response = self
            .http
            .post_json(MESSAGES_PATH, body)
            .await
            .map_err(MessageBirdError::Transport)?;

        tracing::debug!(status = response.status, "received MessageBird response");

        let document = decode_send_message_json_response(&response.body).map_err(|err| {
            let reason = match err {
                TransportError::Json(err) => ApiRuntimeReason::InvalidJson(Box::new(err)),
                other => ApiRuntimeReason::MalformedResponse(Box::new(other)),
            };
            MessageBirdError::ApiRuntime {
                reason,
                errors: Vec::new(),
            }
        })?;

        let delivery_status = document
            .delivery_status
            .as_deref()
            .map_or(DeliveryStatus::NotSent, DeliveryStatus::from_api);

        let outcome = classify(response.status, document.errors);
        tracing::debug!(?outcome, %delivery_status, "classified MessageBird response");

        outcome.into_result(delivery_status)
    }
}
