//! Typed Rust client for the MessageBird SMS HTTP API.
//!
//! The crate is split into a domain layer of validated types, a transport
//! layer for the JSON wire format, a client layer that sends one message and
//! classifies the response, and a [`MessagingService`] that logs failures
//! through `tracing`.
//!
//! ```rust,no_run
//! use messagebird::{AccessKey, Message, MessageBirdClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MessageBirdClient::new(AccessKey::new("...")?)?;
//!     let message = Message::new("SURFnet", "31612345678", "hello")?;
//!     let result = client.send(&message).await?;
//!     println!("delivery status: {}", result.delivery_status());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod domain;
pub mod service;
mod transport;

pub use client::{
    ApiRuntimeReason, HttpResponse, HttpTransport, MessageBirdClient, MessageBirdClientBuilder,
    MessageBirdError, Outcome, ReqwestTransport, classify,
};
pub use config::{ConfigError, MessageBirdConfig, MessagingConfig};
pub use domain::{
    AccessKey, ApiErrorCode, BaseUrl, DeliveryStatus, Message, Originator, RawError, Recipient,
    SendResult, ValidationError,
};
pub use service::{MessagingService, Severity};
