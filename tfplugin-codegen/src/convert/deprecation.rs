use super::SchemaClause;
use crate::schema::go_quote;

/// `DeprecationMessage` clause
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeprecationMessage {
    deprecation_message: Option<String>,
}

impl DeprecationMessage {
    /// Wrap the declared message
    #[must_use]
    pub fn new(deprecation_message: Option<&str>) -> Self {
        Self {
            deprecation_message: deprecation_message.map(str::to_string),
        }
    }
}

impl SchemaClause for DeprecationMessage {
    fn schema(&self) -> String {
        match self.deprecation_message.as_deref() {
            Some(message) if !message.is_empty() => {
                format!("DeprecationMessage: {},\n", go_quote(message))
            }
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema() {
        assert_eq!(DeprecationMessage::new(None).schema(), "");
        assert_eq!(DeprecationMessage::new(Some("")).schema(), "");
        assert_eq!(
            DeprecationMessage::new(Some("use \"other\"")).schema(),
            "DeprecationMessage: \"use \\\"other\\\"\",\n"
        );
    }

    #[test]
    fn test_equal_is_nil_safe() {
        assert_eq!(DeprecationMessage::new(None), DeprecationMessage::new(None));
        assert_ne!(DeprecationMessage::new(None), DeprecationMessage::new(Some("")));
    }
}
