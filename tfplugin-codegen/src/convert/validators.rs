use super::{custom_definition_imports, slice_clause, SchemaClause};
use crate::schema::{GeneratorSchemaType, Imports, VALIDATOR_IMPORT};
use crate::spec::CustomDefinition;

/// `Validators` clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validators {
    kind: GeneratorSchemaType,
    custom: Vec<Option<CustomDefinition>>,
}

impl Validators {
    /// Wrap the custom validators of a `kind` attribute
    #[must_use]
    pub const fn new(kind: GeneratorSchemaType, custom: Vec<Option<CustomDefinition>>) -> Self {
        Self { kind, custom }
    }
}

impl SchemaClause for Validators {
    fn imports(&self) -> Imports {
        let mut imports = custom_definition_imports(&self.custom);

        if !self.schema().is_empty() {
            imports.add_path(VALIDATOR_IMPORT);
        }

        imports
    }

    fn schema(&self) -> String {
        slice_clause("Validators", &self.kind.validator_type(), &self.custom)
    }
}
