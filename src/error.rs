// ⚠️ Error taxonomy for receipt processing
// Every variant is terminal: the caller has to resubmit corrected input

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReceiptError {
    /// Body could not be decoded into the receipt shape at all
    #[error("Malformed receipt: {0}")]
    MalformedInput(String),

    /// Decoded fine but failed a format check
    #[error("Invalid receipt field '{field}': {reason}")]
    ValidationFailed { field: String, reason: String },

    #[error("No receipt found for id {0}")]
    NotFound(String),
}

impl ReceiptError {
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        ReceiptError::ValidationFailed {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReceiptError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_field() {
        let err = ReceiptError::invalid("total", "must have exactly two decimal places");
        assert_eq!(
            err.to_string(),
            "Invalid receipt field 'total': must have exactly two decimal places"
        );
    }

    #[test]
    fn test_not_found_message() {
        let err = ReceiptError::NotFound("abc".to_string());
        assert_eq!(err.to_string(), "No receipt found for id abc");
    }
}
