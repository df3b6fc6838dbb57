//! Attribute intermediate representation
//!
//! These types mirror the JSON representation of provider schemas that
//! upstream tooling produces. The generators only read them; validation happens before
//! a fragment reaches this crate.
//!
//! # Example
//!
//! ```rust
//! use tfplugin_codegen::spec::{ComputedOptionalRequired, DynamicAttribute};
//!
//! let attribute: DynamicAttribute = serde_json::from_str(
//!     r#"{ "computed_optional_required": "optional", "sensitive": true }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     attribute.computed_optional_required,
//!     ComputedOptionalRequired::Optional
//! );
//! assert_eq!(attribute.sensitive, Some(true));
//! ```

use serde::{Deserialize, Serialize};

/// Whether an attribute is computed, optional, required, or computed and optional
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputedOptionalRequired {
    /// Set by the provider only
    Computed,
    /// Set by the practitioner, or by the provider when absent
    ComputedOptional,
    /// Set by the practitioner when desired
    #[default]
    Optional,
    /// Must be set by the practitioner
    Required,
}

/// A Go import referenced by generated code
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodeImport {
    /// Optional package alias
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    /// Import path (e.g., `github.com/example/apisdk`)
    pub path: String,
}

impl CodeImport {
    /// Create an import without an alias
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            alias: None,
            path: path.into(),
        }
    }

    /// Set the package alias
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

/// Custom framework type override for an attribute
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomType {
    /// Import required by the custom type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import: Option<CodeImport>,

    /// Type expression used in the schema (e.g., `mytypes.JsonType{}`)
    #[serde(rename = "type")]
    pub r#type: String,

    /// Value type used in the data model (e.g., `mytypes.JsonValue`)
    pub value_type: String,
}

/// Non-framework type an attribute value converts to and from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociatedExternalType {
    /// Import of the package declaring the external type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import: Option<CodeImport>,

    /// External type expression (e.g., `*apisdk.Settings`)
    #[serde(rename = "type")]
    pub r#type: String,
}

/// A schema expression supplied verbatim by the provider author
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomDefinition {
    /// Imports required by the expression
    #[serde(default)]
    pub imports: Vec<CodeImport>,

    /// Go expression emitted into the schema
    #[serde(default)]
    pub schema_definition: String,
}

/// Default value of a dynamic attribute
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicDefault {
    /// Custom default expression
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomDefinition>,
}

/// Default value of a bool attribute
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoolDefault {
    /// Custom default expression
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomDefinition>,

    /// Static default value
    #[serde(default, rename = "static", skip_serializing_if = "Option::is_none")]
    pub r#static: Option<bool>,
}

/// A plan modifier entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanModifier {
    /// Custom plan modifier expression
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomDefinition>,
}

/// A validator entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validator {
    /// Custom validator expression
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomDefinition>,
}

/// Collect the custom definitions of plan modifiers, keeping list positions
#[must_use]
pub fn custom_plan_modifiers(plan_modifiers: &[PlanModifier]) -> Vec<Option<CustomDefinition>> {
    plan_modifiers.iter().map(|p| p.custom.clone()).collect()
}

/// Collect the custom definitions of validators, keeping list positions
#[must_use]
pub fn custom_validators(validators: &[Validator]) -> Vec<Option<CustomDefinition>> {
    validators.iter().map(|v| v.custom.clone()).collect()
}

/// Resource schema attribute holding a value of any type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DynamicAttribute {
    /// External type binding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_external_type: Option<AssociatedExternalType>,

    /// Computed/optional/required setting
    pub computed_optional_required: ComputedOptionalRequired,

    /// Custom type override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,

    /// Default value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<DynamicDefault>,

    /// Deprecation message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,

    /// Attribute description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Plan modifiers
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plan_modifiers: Vec<PlanModifier>,

    /// Sensitivity flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,

    /// Validators
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

/// Resource schema attribute holding a boolean
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoolAttribute {
    /// External type binding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_external_type: Option<AssociatedExternalType>,

    /// Computed/optional/required setting
    pub computed_optional_required: ComputedOptionalRequired,

    /// Custom type override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<CustomType>,

    /// Default value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<BoolDefault>,

    /// Deprecation message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,

    /// Attribute description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Plan modifiers
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plan_modifiers: Vec<PlanModifier>,

    /// Sensitivity flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,

    /// Validators
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}
