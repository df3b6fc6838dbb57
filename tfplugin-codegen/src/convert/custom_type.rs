use crate::schema::{AssocExtType, FrameworkIdentifier, Imports};
use crate::spec::{AssociatedExternalType, CustomType};

/// `CustomType` clause of a primitive attribute
///
/// An explicit custom type wins. Without one, an external type binding
/// switches the attribute to the generated `<Name>Type`/`<Name>Value` pair,
/// named after the identifier passed to each query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomTypePrimitive {
    custom_type: Option<CustomType>,
    assoc_ext_type: Option<AssocExtType>,
}

impl CustomTypePrimitive {
    /// Resolve the custom type from the declared fragments
    #[must_use]
    pub fn new(
        custom_type: Option<&CustomType>,
        assoc_ext_type: Option<&AssociatedExternalType>,
    ) -> Self {
        Self {
            custom_type: custom_type.cloned(),
            assoc_ext_type: AssocExtType::new(assoc_ext_type),
        }
    }

    /// Value type overriding the kind's model value type, if any
    #[must_use]
    pub fn value_type(&self, name: &FrameworkIdentifier) -> Option<String> {
        match &self.custom_type {
            Some(custom) if !custom.value_type.is_empty() => Some(custom.value_type.clone()),
            _ if self.assoc_ext_type.is_some() => Some(format!("{}Value", name.to_pascal_case())),
            _ => None,
        }
    }

    /// Imports of the custom type; the binding's own imports are not included
    #[must_use]
    pub fn imports(&self) -> Imports {
        let mut imports = Imports::new();

        if let Some(import) = self.custom_type.as_ref().and_then(|c| c.import.clone()) {
            imports.add(import);
        }

        imports
    }

    /// `CustomType: <expr>,\n`, or an empty string
    #[must_use]
    pub fn schema(&self, name: &FrameworkIdentifier) -> String {
        let type_expr = match &self.custom_type {
            Some(custom) if !custom.r#type.is_empty() => custom.r#type.clone(),
            _ if self.assoc_ext_type.is_some() => format!("{}Type{{}}", name.to_pascal_case()),
            _ => return String::new(),
        };

        format!("CustomType: {type_expr},\n")
    }
}
