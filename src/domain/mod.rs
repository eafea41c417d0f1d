//! Domain layer: strong types with validation and invariants (no I/O).

mod message;
mod response;
mod validation;
mod value;

pub use message::Message;
pub use response::{ApiErrorCode, DeliveryStatus, RawError, SendResult, format_errors};
pub use validation::ValidationError;
pub use value::{AccessKey, BaseUrl, Originator, Recipient};

#[cfg(test)]
mod tests {
    use super::*;

    fn error(code: i64, description: &str) -> RawError {
        RawError {
            code,
            description: description.to_owned(),
            parameter: None,
        }
    }

    #[test]
    fn message_keeps_inputs_as_given() {
        let message = Message::new("SURFnet", "31612345678", "This is a text message.").unwrap();
        assert_eq!(message.originator().as_str(), "SURFnet");
        assert_eq!(message.recipient().as_str(), "31612345678");
        assert_eq!(message.body(), "This is a text message.");

        let message = Message::new("SURFnet", "31612345678", "").unwrap();
        assert_eq!(message.body(), "");

        let message = Message::new("SURFnet", "31612345678", "  spaced  ").unwrap();
        assert_eq!(message.body(), "  spaced  ");
    }

    #[test]
    fn message_rejects_bad_recipient() {
        for recipient in ["", "abc", "+31612345678", "316 12345678"] {
            assert!(matches!(
                Message::new("SURFnet", recipient, "body"),
                Err(ValidationError::InvalidRecipient { .. })
            ));
        }
    }

    #[test]
    fn message_rejects_bad_originator() {
        for originator in ["ThisIsTooLon", "its.invalid", ""] {
            assert!(matches!(
                Message::new(originator, "31612345678", "body"),
                Err(ValidationError::InvalidOriginator { .. })
            ));
        }
    }

    #[test]
    fn message_from_parts_uses_validated_values() {
        let message = Message::from_parts(
            Originator::new("3429038382929284").unwrap(),
            Recipient::new("31612345678").unwrap(),
            "hi",
        );
        assert_eq!(message.originator().as_str(), "3429038382929284");
        assert_eq!(message.body(), "hi");
    }

    #[test]
    fn success_requires_no_errors_and_an_accepted_status() {
        let some_errors = vec![error(99, "what happened")];
        let cases = [
            (true, DeliveryStatus::Buffered, vec![]),
            (true, DeliveryStatus::Sent, vec![]),
            (true, DeliveryStatus::Delivered, vec![]),
            (true, DeliveryStatus::Scheduled, vec![]),
            (false, DeliveryStatus::DeliveryFailed, vec![]),
            (false, DeliveryStatus::NotSent, vec![]),
            (false, DeliveryStatus::Unknown, vec![]),
            (false, DeliveryStatus::Buffered, some_errors.clone()),
            (false, DeliveryStatus::Sent, some_errors.clone()),
            (false, DeliveryStatus::Delivered, some_errors.clone()),
            (false, DeliveryStatus::Scheduled, some_errors.clone()),
            (false, DeliveryStatus::DeliveryFailed, some_errors.clone()),
            (false, DeliveryStatus::NotSent, some_errors.clone()),
            (false, DeliveryStatus::Unknown, some_errors),
        ];

        for (expected, status, errors) in cases {
            let result = SendResult::new(status, errors.clone());
            assert_eq!(
                result.is_success(),
                expected,
                "status {status} with errors {errors:?}"
            );
        }
    }

    #[test]
    fn unrecognized_delivery_status_collapses_to_unknown() {
        for status in ["expired", "DELIVERED", "", "sent "] {
            let result = SendResult::from_api_status(status, vec![]);
            assert_eq!(result.delivery_status(), DeliveryStatus::Unknown);
            assert!(!result.is_success());
        }

        let result = SendResult::from_api_status("delivery_failed", vec![]);
        assert_eq!(result.delivery_status(), DeliveryStatus::DeliveryFailed);
        assert_eq!(result.delivery_status().as_str(), "delivery_failed");
    }

    #[test]
    fn message_invalid_tracks_error_code_10() {
        let result = SendResult::new(DeliveryStatus::NotSent, vec![error(10, "")]);
        assert!(result.is_message_invalid());
        assert!(!result.is_access_key_invalid());

        let result = SendResult::new(DeliveryStatus::Delivered, vec![error(9, ""), error(10, "")]);
        assert!(result.is_message_invalid());

        let result = SendResult::new(DeliveryStatus::NotSent, vec![]);
        assert!(!result.is_message_invalid());
    }

    #[test]
    fn access_key_invalid_tracks_error_code_2() {
        let result = SendResult::new(DeliveryStatus::NotSent, vec![error(2, "")]);
        assert!(result.is_access_key_invalid());
        assert!(!result.is_message_invalid());

        let result = SendResult::new(DeliveryStatus::Sent, vec![error(2, "")]);
        assert!(result.is_access_key_invalid());

        let result = SendResult::new(DeliveryStatus::NotSent, vec![]);
        assert!(!result.is_access_key_invalid());
    }

    #[test]
    fn errors_as_string_joins_in_original_order() {
        let result = SendResult::new(
            DeliveryStatus::NotSent,
            vec![
                error(2, "Request not allowed (incorrect access_key)"),
                error(9, "no (correct) recipients found"),
                error(10, "originator is invalid"),
            ],
        );
        assert_eq!(
            result.errors_as_string(),
            "(#2) Request not allowed (incorrect access_key); (#9) no (correct) recipients found; \
             (#10) originator is invalid"
        );

        assert_eq!(SendResult::new(DeliveryStatus::Sent, vec![]).errors_as_string(), "");
    }

    #[test]
    fn api_error_codes_map_both_ways() {
        assert_eq!(ApiErrorCode::from_code(25), Some(ApiErrorCode::NotEnoughBalance));
        assert_eq!(ApiErrorCode::from_code(3), None);
        assert_eq!(ApiErrorCode::InternalError.code(), 99);
        assert_eq!(
            error(98, "").known_code(),
            Some(ApiErrorCode::ApiNotFound)
        );
    }
}
