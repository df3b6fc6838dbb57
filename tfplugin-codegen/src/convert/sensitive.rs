use super::SchemaClause;

/// `Sensitive` clause
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sensitive {
    sensitive: Option<bool>,
}

impl Sensitive {
    /// Wrap the declared flag
    #[must_use]
    pub const fn new(sensitive: Option<bool>) -> Self {
        Self { sensitive }
    }
}

impl SchemaClause for Sensitive {
    fn schema(&self) -> String {
        if self.sensitive == Some(true) {
            "Sensitive: true,\n".to_string()
        } else {
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema() {
        assert_eq!(Sensitive::new(Some(true)).schema(), "Sensitive: true,\n");
        assert_eq!(Sensitive::new(Some(false)).schema(), "");
        assert_eq!(Sensitive::new(None).schema(), "");
    }

    #[test]
    fn test_equal() {
        assert_eq!(Sensitive::new(None), Sensitive::new(None));
        assert_ne!(Sensitive::new(None), Sensitive::new(Some(false)));
    }
}
