use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    #[error("failed to parse {input:?}: invalid die format")]
    InvalidFormat { input: String },
}

impl DiceError {
    pub(crate) fn invalid_format(input: &str) -> Self {
        tracing::debug!(input, "rejected die string");
        DiceError::InvalidFormat { input: input.to_string() }
    }

    /// True when the error came from a malformed die string.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, DiceError::InvalidFormat { .. })
    }
}

pub type Result<T> = std::result::Result<T, DiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_message() {
        let err = DiceError::invalid_format("D-1");
        assert!(err.is_invalid_format());
        assert_eq!(err.to_string(), "failed to parse \"D-1\": invalid die format");
    }
}
