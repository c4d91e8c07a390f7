//! Model categories and the category selection accepted by orchestrators

use serde::{Deserialize, Serialize};

/// Kind of model that answers a question (Value Object)
///
/// Only concrete categories exist here. `auto` is an input-side concept,
/// see [`CategorySelection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelCategory {
    #[default]
    /// Explanations, comparisons and synthesis
    General,
    /// Code samples and implementation details
    Code,
}

impl ModelCategory {
    /// All categories in registry order
    pub const ALL: [ModelCategory; 2] = [ModelCategory::General, ModelCategory::Code];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelCategory::General => "general",
            ModelCategory::Code => "code",
        }
    }

    /// Strict parse: `None` for anything that is not a known category
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general" => Some(ModelCategory::General),
            "code" => Some(ModelCategory::Code),
            _ => None,
        }
    }
}

impl std::fmt::Display for ModelCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category requested by a caller
///
/// `Auto` defers to the question classifier. Parsing is lenient:
/// unrecognized strings select [`ModelCategory::General`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategorySelection {
    #[default]
    Auto,
    Category(ModelCategory),
}

impl CategorySelection {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategorySelection::Auto => "auto",
            CategorySelection::Category(c) => c.as_str(),
        }
    }
}

impl From<ModelCategory> for CategorySelection {
    fn from(category: ModelCategory) -> Self {
        CategorySelection::Category(category)
    }
}

impl std::str::FromStr for CategorySelection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("auto") {
            return Ok(CategorySelection::Auto);
        }
        Ok(CategorySelection::Category(
            ModelCategory::parse(s).unwrap_or_default(),
        ))
    }
}

impl std::fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ModelCategory::Code).unwrap(),
            "\"code\""
        );
        assert_eq!(
            serde_json::from_str::<ModelCategory>("\"general\"").unwrap(),
            ModelCategory::General
        );
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!(ModelCategory::parse("Code"), Some(ModelCategory::Code));
        assert_eq!(ModelCategory::parse(" general "), Some(ModelCategory::General));
        assert_eq!(ModelCategory::parse("auto"), None);
        assert_eq!(ModelCategory::parse("vision"), None);
    }

    #[test]
    fn test_selection_parse() {
        assert_eq!(
            "auto".parse::<CategorySelection>().unwrap(),
            CategorySelection::Auto
        );
        assert_eq!(
            "AUTO".parse::<CategorySelection>().unwrap(),
            CategorySelection::Auto
        );
        assert_eq!(
            "CODE".parse::<CategorySelection>().unwrap(),
            CategorySelection::Category(ModelCategory::Code)
        );
    }

    #[test]
    fn test_unknown_selection_falls_back_to_general() {
        for input in ["banana", "", "vision", "codes"] {
            assert_eq!(
                input.parse::<CategorySelection>().unwrap(),
                CategorySelection::Category(ModelCategory::General),
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn test_selection_default_is_auto() {
        assert_eq!(CategorySelection::default(), CategorySelection::Auto);
        assert_eq!(CategorySelection::default().to_string(), "auto");
    }
}
