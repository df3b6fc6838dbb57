use super::SchemaClause;
use crate::schema::{Imports, BOOL_DEFAULT_IMPORT};
use crate::spec::{BoolDefault, CustomDefinition, DynamicDefault};

fn custom_imports(custom: Option<&CustomDefinition>) -> Imports {
    custom
        .map(|c| c.imports.iter().cloned().collect())
        .unwrap_or_default()
}

fn custom_schema(custom: Option<&CustomDefinition>) -> Option<String> {
    custom
        .filter(|c| !c.schema_definition.is_empty())
        .map(|c| format!("Default: {},\n", c.schema_definition))
}

/// `Default` clause of a dynamic attribute
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultDynamic {
    dynamic_default: Option<DynamicDefault>,
}

impl DefaultDynamic {
    /// Wrap the declared default
    #[must_use]
    pub fn new(dynamic_default: Option<&DynamicDefault>) -> Self {
        Self {
            dynamic_default: dynamic_default.cloned(),
        }
    }
}

impl SchemaClause for DefaultDynamic {
    fn imports(&self) -> Imports {
        custom_imports(self.dynamic_default.as_ref().and_then(|d| d.custom.as_ref()))
    }

    fn schema(&self) -> String {
        custom_schema(self.dynamic_default.as_ref().and_then(|d| d.custom.as_ref()))
            .unwrap_or_default()
    }
}

/// `Default` clause of a bool attribute
///
/// A static value takes precedence over a custom definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultBool {
    bool_default: Option<BoolDefault>,
}

impl DefaultBool {
    /// Wrap the declared default
    #[must_use]
    pub fn new(bool_default: Option<&BoolDefault>) -> Self {
        Self {
            bool_default: bool_default.cloned(),
        }
    }
}

impl SchemaClause for DefaultBool {
    fn imports(&self) -> Imports {
        let Some(bool_default) = &self.bool_default else {
            return Imports::new();
        };

        if bool_default.r#static.is_some() {
            let mut imports = Imports::new();
            imports.add_path(BOOL_DEFAULT_IMPORT);
            return imports;
        }

        custom_imports(bool_default.custom.as_ref())
    }

    fn schema(&self) -> String {
        let Some(bool_default) = &self.bool_default else {
            return String::new();
        };

        if let Some(value) = bool_default.r#static {
            return format!("Default: booldefault.StaticBool({value}),\n");
        }

        custom_schema(bool_default.custom.as_ref()).unwrap_or_default()
    }
}
