use super::SchemaClause;
use crate::schema::go_quote;

/// `Description` and `MarkdownDescription` clauses
///
/// Both carry the same text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description {
    description: Option<String>,
}

impl Description {
    /// Wrap the declared description
    #[must_use]
    pub fn new(description: Option<&str>) -> Self {
        Self {
            description: description.map(str::to_string),
        }
    }
}

impl SchemaClause for Description {
    fn schema(&self) -> String {
        match self.description.as_deref() {
            Some(text) if !text.is_empty() => {
                let quoted = go_quote(text);
                format!("Description: {quoted},\nMarkdownDescription: {quoted},\n")
            }
            _ => String::new(),
        }
    }
}
