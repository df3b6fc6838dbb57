//! Shared capability interface for attribute generators

use super::assoc_ext_type::AssocExtType;
use super::identifier::FrameworkIdentifier;
use super::imports::Imports;
use crate::model::{ModelField, BOOL_VALUE_TYPE, DYNAMIC_VALUE_TYPE};
use crate::render::{RenderError, Renderer};
use std::any::Any;
use std::fmt;

/// Attribute kinds with a generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorSchemaType {
    /// `schema.DynamicAttribute`
    Dynamic,
    /// `schema.BoolAttribute`
    Bool,
}

/// Converter names used when an attribute has no external type binding
///
/// `to` is the value method read by a parent's conversion code, `from` is the
/// `types` constructor that builds the value back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionDefaults {
    /// Method on the framework value (e.g., `ValueBoolPointer`)
    pub to: &'static str,
    /// Constructor in the `types` package (e.g., `BoolPointerValue`)
    pub from: &'static str,
}

impl GeneratorSchemaType {
    /// Framework name of the kind (e.g., `Dynamic`)
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dynamic => "Dynamic",
            Self::Bool => "Bool",
        }
    }

    /// Resource schema attribute type (e.g., `schema.DynamicAttribute`)
    #[must_use]
    pub fn schema_attribute(self) -> String {
        format!("schema.{}Attribute", self.name())
    }

    /// Built-in attribute type expression (e.g., `basetypes.DynamicType{}`)
    #[must_use]
    pub fn base_type(self) -> String {
        format!("basetypes.{}Type{{}}", self.name())
    }

    /// Built-in attribute value expression (e.g., `basetypes.DynamicValue`)
    #[must_use]
    pub fn base_value(self) -> String {
        format!("basetypes.{}Value", self.name())
    }

    /// Element type of the `PlanModifiers` slice (e.g., `planmodifier.Dynamic`)
    #[must_use]
    pub fn plan_modifier_type(self) -> String {
        format!("planmodifier.{}", self.name())
    }

    /// Element type of the `Validators` slice (e.g., `validator.Dynamic`)
    #[must_use]
    pub fn validator_type(self) -> String {
        format!("validator.{}", self.name())
    }

    /// Model value type used when no custom type overrides it
    #[must_use]
    pub const fn model_value_type(self) -> &'static str {
        match self {
            Self::Dynamic => DYNAMIC_VALUE_TYPE,
            Self::Bool => BOOL_VALUE_TYPE,
        }
    }

    /// Default to/from converter names of the kind
    ///
    /// Dynamic values carry no primitive of their own; they keep the
    /// string-oriented converters the generated parent code has always used.
    #[must_use]
    pub const fn conversion_defaults(self) -> ConversionDefaults {
        match self {
            Self::Dynamic => ConversionDefaults {
                to: "ValueStringPointer",
                from: "StringPointerValue",
            },
            Self::Bool => ConversionDefaults {
                to: "ValueBoolPointer",
                from: "BoolPointerValue",
            },
        }
    }
}

impl fmt::Display for GeneratorSchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a parent converts this attribute's value to and from an external type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToFromConversion {
    /// Use the binding's own generated `To`/`From` functions
    AssocExtType(AssocExtType),
    /// Use a fixed converter name for the underlying primitive
    Default(&'static str),
}

/// Generator for one schema attribute
///
/// Implemented once per kind. Every method except the two renderer-backed
/// ones is a pure function of the state resolved at construction.
pub trait GeneratorAttribute: fmt::Debug + Send + Sync {
    /// Kind of attribute this generator emits
    fn generator_schema_type(&self) -> GeneratorSchemaType;

    /// Imports needed by every artifact emitted for this attribute
    fn imports(&self) -> Imports;

    /// Structural equality across generator kinds
    ///
    /// Generators of different kinds are never equal.
    fn equal(&self, other: &dyn GeneratorAttribute) -> bool;

    /// Schema clause for the attribute
    fn schema(&self, name: &FrameworkIdentifier) -> String;

    /// Data model field for the attribute
    fn model_field(&self, name: &FrameworkIdentifier) -> ModelField;

    /// Custom type and value wrappers for an external type binding
    ///
    /// Returns `Ok(None)` when the attribute has no binding.
    ///
    /// # Errors
    ///
    /// Returns the renderer's error unchanged.
    fn custom_type_and_value(
        &self,
        renderer: &dyn Renderer,
        name: &FrameworkIdentifier,
    ) -> Result<Option<String>, RenderError>;

    /// Conversion functions to and from the bound external type
    ///
    /// Returns `Ok(None)` when the attribute has no binding.
    ///
    /// # Errors
    ///
    /// Returns the renderer's error unchanged.
    fn to_from_functions(
        &self,
        renderer: &dyn Renderer,
        name: &FrameworkIdentifier,
    ) -> Result<Option<String>, RenderError>;

    /// Attribute type expression
    fn attr_type(&self, name: &FrameworkIdentifier) -> String;

    /// Attribute value type expression
    fn attr_value(&self, name: &FrameworkIdentifier) -> String;

    /// Conversion used when reading the value into an external type
    fn to(&self) -> ToFromConversion;

    /// Conversion used when building the value from an external type
    fn from(&self) -> ToFromConversion;

    /// Upcast for same-kind downcasting in [`GeneratorAttribute::equal`]
    fn as_any(&self) -> &dyn Any;
}
