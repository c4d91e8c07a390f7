//! Output format value object

use serde::{Deserialize, Serialize};

/// How CLI results are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Sectioned, human-readable text (default)
    #[default]
    Full,
    /// The pretty-printed result object, as tool callers receive it
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_full() {
        assert_eq!(OutputFormat::default(), OutputFormat::Full);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&OutputFormat::Json).unwrap(),
            "\"json\""
        );
        let format: OutputFormat = serde_json::from_str("\"full\"").unwrap();
        assert_eq!(format, OutputFormat::Full);
    }
}
