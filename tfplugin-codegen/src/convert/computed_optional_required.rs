use super::SchemaClause;
use crate::spec;

/// `Computed`/`Optional`/`Required` flags of an attribute
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComputedOptionalRequired {
    computed_optional_required: spec::ComputedOptionalRequired,
}

impl ComputedOptionalRequired {
    /// Wrap the declared setting
    #[must_use]
    pub const fn new(computed_optional_required: spec::ComputedOptionalRequired) -> Self {
        Self {
            computed_optional_required,
        }
    }
}

impl SchemaClause for ComputedOptionalRequired {
    fn schema(&self) -> String {
        match self.computed_optional_required {
            spec::ComputedOptionalRequired::Computed => "Computed: true,\n",
            spec::ComputedOptionalRequired::ComputedOptional => {
                "Computed: true,\nOptional: true,\n"
            }
            spec::ComputedOptionalRequired::Optional => "Optional: true,\n",
            spec::ComputedOptionalRequired::Required => "Required: true,\n",
        }
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema() {
        let cases = [
            (spec::ComputedOptionalRequired::Computed, "Computed: true,\n"),
            (
                spec::ComputedOptionalRequired::ComputedOptional,
                "Computed: true,\nOptional: true,\n",
            ),
            (spec::ComputedOptionalRequired::Optional, "Optional: true,\n"),
            (spec::ComputedOptionalRequired::Required, "Required: true,\n"),
        ];

        for (setting, expected) in cases {
            let clause = ComputedOptionalRequired::new(setting);
            assert_eq!(clause.schema(), expected);
            assert!(clause.imports().is_empty());
        }
    }

    #[test]
    fn test_equal() {
        let required = ComputedOptionalRequired::new(spec::ComputedOptionalRequired::Required);
        assert_eq!(
            required,
            ComputedOptionalRequired::new(spec::ComputedOptionalRequired::Required)
        );
        assert_ne!(
            required,
            ComputedOptionalRequired::new(spec::ComputedOptionalRequired::Optional)
        );
    }
}
