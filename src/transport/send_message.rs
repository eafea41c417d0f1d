use serde::Deserialize;
use serde_json::{Value, json};

use crate::domain::{Message, Originator, RawError, Recipient};

/// Path of the message-creation endpoint, relative to the base URL.
pub const MESSAGES_PATH: &str = "/messages";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("server did not return valid JSON: {0}")]
    Json(#[source] serde_json::Error),

    #[error("missing required response field in errors[{index}]: {source}")]
    MalformedError {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
struct RawErrorJson {
    code: i64,
    description: String,
    #[serde(default)]
    parameter: Option<String>,
}

/// The parts of a `/messages` response this crate consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessageDocument {
    /// `recipients.items[0].status`, if present.
    pub delivery_status: Option<String>,
    /// Top-level `errors`, empty when absent or not an array.
    pub errors: Vec<RawError>,
}

pub fn encode_send_message_json(message: &Message) -> Value {
    json!({
        (Originator::FIELD): message.originator().as_str(),
        (Recipient::FIELD): message.recipient().as_str(),
        (Message::BODY_FIELD): message.body(),
    })
}

pub fn decode_send_message_json_response(body: &str) -> Result<SendMessageDocument, TransportError> {
    let document: Value = serde_json::from_str(body).map_err(TransportError::Json)?;

    // Anything other than an object carries neither a status nor errors.
    let Value::Object(mut document) = document else {
        return Ok(SendMessageDocument {
            delivery_status: None,
            errors: Vec::new(),
        });
    };

    let errors = match document.remove("errors") {
        Some(Value::Array(entries)) => entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                RawErrorJson::deserialize(entry)
                    .map(|raw| RawError {
                        code: raw.code,
                        description: raw.description,
                        parameter: raw.parameter,
                    })
                    .map_err(|source| TransportError::MalformedError { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?,
        _ => Vec::new(),
    };

    // `recipients` is read leniently: any shape other than
    // `{"items": [{"status": "<string>"}, ...]}` means no status.
    let delivery_status = document
        .get(Recipient::FIELD)
        .and_then(|recipients| recipients.get("items"))
        .and_then(|items| items.get(0))
        .and_then(|item| item.get("status"))
        .and_then(Value::as_str)
        .map(str::to_owned);

    Ok(SendMessageDocument {
        delivery_status,
        errors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_uses_message_fields() {
        let message = Message::new("SURFnet", "31612345678", "This is a text message.").unwrap();
        assert_eq!(
            encode_send_message_json(&message),
            json!({
                "originator": "SURFnet",
                "recipients": "31612345678",
                "body": "This is a text message."
            })
        );
    }

    #[test]
    fn decode_reads_first_recipient_status_and_errors() {
        let json = r#"
        {
          "id": "e8077d803532c0b5937c639b60216938",
          "recipients": {
            "totalCount": 2,
            "items": [
              { "recipient": 31612345678, "status": "sent" },
              { "recipient": 31687654321, "status": "delivered" }
            ]
          },
          "errors": [
            { "code": 9, "description": "no (correct) recipients found", "parameter": "recipients" },
            { "code": 10, "description": "originator is invalid" }
          ]
        }
        "#;

        let document = decode_send_message_json_response(json).unwrap();
        assert_eq!(document.delivery_status.as_deref(), Some("sent"));
        assert_eq!(
            document.errors,
            vec![
                RawError {
                    code: 9,
                    description: "no (correct) recipients found".to_owned(),
                    parameter: Some("recipients".to_owned()),
                },
                RawError {
                    code: 10,
                    description: "originator is invalid".to_owned(),
                    parameter: None,
                },
            ]
        );
    }

    #[test]
    fn decode_defaults_missing_parts() {
        let document = decode_send_message_json_response("{}").unwrap();
        assert_eq!(document.delivery_status, None);
        assert!(document.errors.is_empty());

        let document =
            decode_send_message_json_response(r#"{"recipients": {"items": []}}"#).unwrap();
        assert_eq!(document.delivery_status, None);

        let document =
            decode_send_message_json_response(r#"{"recipients": {"items": [{}]}}"#).unwrap();
        assert_eq!(document.delivery_status, None);
    }

    #[test]
    fn decode_ignores_errors_that_are_not_an_array() {
        let document =
            decode_send_message_json_response(r#"{"errors": "something broke"}"#).unwrap();
        assert!(document.errors.is_empty());

        let document = decode_send_message_json_response(r#"{"errors": null}"#).unwrap();
        assert!(document.errors.is_empty());
    }

    #[test]
    fn decode_treats_non_object_documents_as_empty() {
        let document = decode_send_message_json_response("[1, 2]").unwrap();
        assert_eq!(document.delivery_status, None);
        assert!(document.errors.is_empty());
    }

    #[test]
    fn decode_rejects_invalid_json() {
        let err = decode_send_message_json_response("<html>Bad gateway</html>").unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
        assert!(err.to_string().contains("valid JSON"));
    }

    #[test]
    fn decode_rejects_error_entries_without_required_fields() {
        let err = decode_send_message_json_response(
            r#"{"errors": [{"code": 2, "description": "ok"}, {"description": "no code"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, TransportError::MalformedError { index: 1, .. }));
        assert!(err.to_string().contains("missing required response field"));
    }

    #[test]
    fn decode_reads_oddly_shaped_recipients_as_no_status() {
        for json in [
            r#"{"recipients": "31612345678"}"#,
            r#"{"recipients": null}"#,
            r#"{"recipients": {"items": null}}"#,
            r#"{"recipients": {"items": {"status": "sent"}}}"#,
            r#"{"recipients": {"items": ["sent"]}}"#,
            r#"{"recipients": {"items": [{"status": 5}]}}"#,
        ] {
            let document = decode_send_message_json_response(json).unwrap();
            assert_eq!(document.delivery_status, None, "{json}");
        }
    }

    #[test]
    fn decode_keeps_errors_next_to_oddly_shaped_recipients() {
        let document = decode_send_message_json_response(
            r#"{"recipients": {"items": null}, "errors": [{"code": 2, "description": "denied"}]}"#,
        )
        .unwrap();
        assert_eq!(document.delivery_status, None);
        assert_eq!(document.errors.len(), 1);
        assert_eq!(document.errors[0].code, 2);
    }
}
