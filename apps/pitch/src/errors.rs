use thiserror::Error;

/// Page construction error.
/// Every fatal condition in building a pitch page ends up here.
#[derive(Debug, Error)]
pub enum PitchError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid color for {field}: '{value}' (expected #RRGGBB)")]
    InvalidColor { field: &'static str, value: String },

    #[error("Configuration parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PitchError {
    /// Stable machine-readable code for this error, for log lines and exit reports.
    pub fn code(&self) -> &'static str {
        match self {
            PitchError::MissingField(_) => "MISSING_FIELD",
            PitchError::InvalidColor { .. } => "INVALID_COLOR",
            PitchError::Parse(_) => "PARSE_ERROR",
            PitchError::Io(_) => "IO_ERROR",
        }
    }

    /// True for errors caused by the page author's configuration rather than the environment.
    pub fn is_authoring_error(&self) -> bool {
        matches!(
            self,
            PitchError::MissingField(_) | PitchError::InvalidColor { .. } | PitchError::Parse(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_color_message_names_field_and_value() {
        let err = PitchError::InvalidColor {
            field: "theme.accent",
            value: "#F99E1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("theme.accent"));
        assert!(msg.contains("#F99E1"));
        assert_eq!(err.code(), "INVALID_COLOR");
    }

    #[test]
    fn test_missing_field_is_authoring_error() {
        let err = PitchError::MissingField("company.name");
        assert!(err.is_authoring_error());
        assert_eq!(err.to_string(), "Missing required field: company.name");
    }

    #[test]
    fn test_io_error_is_not_authoring_error() {
        let err = PitchError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(!err.is_authoring_error());
        assert_eq!(err.code(), "IO_ERROR");
    }

    #[test]
    fn test_parse_error_is_authoring_error() {
        let err = PitchError::from(serde_json::from_str::<serde_json::Value>("{").unwrap_err());
        assert!(err.is_authoring_error());
        assert_eq!(err.code(), "PARSE_ERROR");
    }
}
