//! Error types for slide deck generation.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while planning a slide deck.
///
/// Malformed directive lines never show up here: the text parser falls back
/// to plain content instead of failing.
#[derive(Error, Debug)]
pub enum Error {
    /// A `@chart` specification could not be turned into chart data.
    #[error("Chart parsing error: {0}")]
    ChartParse(#[from] ChartParseError),

    /// Resolution was requested against a template name that is not registered.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// A template (or a customization of one) has out-of-range attributes.
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    /// The deck text is empty or whitespace only.
    #[error("No slide text was provided")]
    EmptyInput,

    /// Failed to read template definitions or write a deck plan.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to encode or decode JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Errors raised by the chart specification parser.
///
/// These are recoverable: the deck planner drops the chart and keeps going.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartParseError {
    /// A `;`-separated clause has no `name: values` separator.
    #[error("clause '{clause}' is missing a ':' separator")]
    MissingSeparator { clause: String },

    /// A value in a numeric series is not a number.
    #[error("series '{series}' has non-numeric value '{token}'")]
    InvalidNumber { series: String, token: String },

    /// A series has a different number of values than there are categories.
    #[error("series '{series}' has {found} values but there are {expected} categories")]
    LengthMismatch {
        series: String,
        expected: usize,
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_error_converts() {
        let err: Error = ChartParseError::MissingSeparator {
            clause: "oops".to_string(),
        }
        .into();
        assert!(matches!(err, Error::ChartParse(_)));
        assert_eq!(
            err.to_string(),
            "Chart parsing error: clause 'oops' is missing a ':' separator"
        );
    }

    #[test]
    fn test_template_not_found_message() {
        let err = Error::TemplateNotFound("Neon".to_string());
        assert_eq!(err.to_string(), "Template not found: Neon");
    }
}
