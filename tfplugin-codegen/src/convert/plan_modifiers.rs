use super::{custom_definition_imports, slice_clause, SchemaClause};
use crate::schema::{GeneratorSchemaType, Imports, PLAN_MODIFIER_IMPORT};
use crate::spec::CustomDefinition;

/// `PlanModifiers` clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanModifiers {
    kind: GeneratorSchemaType,
    custom: Vec<Option<CustomDefinition>>,
}

impl PlanModifiers {
    /// Wrap the custom plan modifiers of a `kind` attribute
    #[must_use]
    pub const fn new(kind: GeneratorSchemaType, custom: Vec<Option<CustomDefinition>>) -> Self {
        Self { kind, custom }
    }
}

impl SchemaClause for PlanModifiers {
    fn imports(&self) -> Imports {
        let mut imports = custom_definition_imports(&self.custom);

        if !self.schema().is_empty() {
            imports.add_path(PLAN_MODIFIER_IMPORT);
        }

        imports
    }

    fn schema(&self) -> String {
        slice_clause("PlanModifiers", &self.kind.plan_modifier_type(), &self.custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::CodeImport;

    fn keep() -> Option<CustomDefinition> {
        Some(CustomDefinition {
            imports: vec![CodeImport::new("example.com/pm")],
            schema_definition: "pm.Keep()".to_string(),
        })
    }

    #[test]
    fn test_empty() {
        let clause = PlanModifiers::new(GeneratorSchemaType::Dynamic, vec![]);
        assert_eq!(clause.schema(), "");
        assert!(clause.imports().is_empty());
    }

    #[test]
    fn test_schema() {
        let clause = PlanModifiers::new(GeneratorSchemaType::Dynamic, vec![keep(), None]);

        assert_eq!(
            clause.schema(),
            "PlanModifiers: []planmodifier.Dynamic{\npm.Keep(),\n},\n"
        );

        let imports = clause.imports();
        assert!(imports.contains("example.com/pm"));
        assert!(imports.contains(PLAN_MODIFIER_IMPORT));
    }

    #[test]
    fn test_element_type_follows_kind() {
        let clause = PlanModifiers::new(GeneratorSchemaType::Bool, vec![keep()]);
        assert!(clause.schema().starts_with("PlanModifiers: []planmodifier.Bool{"));
    }

    #[test]
    fn test_equal_is_positional() {
        let a = PlanModifiers::new(GeneratorSchemaType::Dynamic, vec![keep(), None]);
        let b = PlanModifiers::new(GeneratorSchemaType::Dynamic, vec![None, keep()]);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
