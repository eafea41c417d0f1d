use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidRecipient { input: String },
    InvalidOriginator { input: String },
    InvalidAuthorization,
    InvalidBaseUrl { input: String, reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidRecipient { input } => {
                write!(f, "recipient must consist of digits only: {input:?}")
            }
            Self::InvalidOriginator { input } => write!(
                f,
                "originator must consist of digits only, or of 1 to 11 alphanumeric characters: {input:?}"
            ),
            Self::InvalidAuthorization => write!(
                f,
                "authorization should be in the format 'AccessKey your_access_key_here'"
            ),
            Self::InvalidBaseUrl { input, reason } => {
                write!(f, "invalid base URL '{input}': {reason}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
