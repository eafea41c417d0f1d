use crate::domain::validation::ValidationError;
use crate::domain::value::{Originator, Recipient};

#[derive(Debug, Clone, PartialEq, Eq)]
/// One outbound SMS: who sends it, who receives it, and what it says.
///
/// Constructed once per send and never mutated afterwards.
pub struct Message {
    originator: Originator,
    recipient: Recipient,
    body: String,
}

impl Message {
    /// JSON field name used by MessageBird for the text (`body`).
    pub const BODY_FIELD: &'static str = "body";

    /// Validate all three parts and build a [`Message`].
    ///
    /// The body is free text and may be empty.
    pub fn new(
        originator: impl Into<String>,
        recipient: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            originator: Originator::new(originator)?,
            recipient: Recipient::new(recipient)?,
            body: body.into(),
        })
    }

    /// Build a [`Message`] from already validated parts.
    pub fn from_parts(originator: Originator, recipient: Recipient, body: impl Into<String>) -> Self {
        Self {
            originator,
            recipient,
            body: body.into(),
        }
    }

    pub fn originator(&self) -> &Originator {
        &self.originator
    }

    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}
