//! Sets of attribute generators
//!
//! [`GeneratorAttributes`] holds the generators of one resource keyed by
//! attribute name and assembles their per-attribute output into whole
//! resource artifacts. Every operation walks the attributes in name order, so
//! output does not depend on insertion order.

use crate::error::GeneratorError;
use crate::render::Renderer;
use crate::resource::{GeneratorBoolAttribute, GeneratorDynamicAttribute};
use crate::schema::{
    FrameworkIdentifier, GeneratorAttribute, Imports, CONTEXT_IMPORT, RESOURCE_SCHEMA_IMPORT,
    TYPES_IMPORT,
};
use crate::spec::{BoolAttribute, DynamicAttribute};
use std::collections::BTreeMap;

/// Attribute generators of one resource, ordered by name
#[derive(Debug, Default)]
pub struct GeneratorAttributes {
    attributes: BTreeMap<String, Box<dyn GeneratorAttribute>>,
}

impl GeneratorAttributes {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a generator
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::DuplicateAttribute`] if `name` is already present.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        generator: Box<dyn GeneratorAttribute>,
    ) -> Result<(), GeneratorError> {
        let name = name.into();

        if self.attributes.contains_key(&name) {
            return Err(GeneratorError::DuplicateAttribute(name));
        }

        self.attributes.insert(name, generator);
        Ok(())
    }

    /// Build and add a dynamic attribute generator
    ///
    /// # Errors
    ///
    /// Returns an error if the attribute is nil or the name is taken.
    pub fn add_dynamic(
        &mut self,
        name: &str,
        attribute: Option<&DynamicAttribute>,
    ) -> Result<(), GeneratorError> {
        let generator = GeneratorDynamicAttribute::new(name, attribute).inspect_err(|e| {
            tracing::warn!(attribute = name, error = %e, "Skipping attribute");
        })?;

        self.insert(name, Box::new(generator))
    }

    /// Build and add a bool attribute generator
    ///
    /// # Errors
    ///
    /// Returns an error if the attribute is nil or the name is taken.
    pub fn add_bool(
        &mut self,
        name: &str,
        attribute: Option<&BoolAttribute>,
    ) -> Result<(), GeneratorError> {
        let generator = GeneratorBoolAttribute::new(name, attribute).inspect_err(|e| {
            tracing::warn!(attribute = name, error = %e, "Skipping attribute");
        })?;

        self.insert(name, Box::new(generator))
    }

    /// Generator of an attribute
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn GeneratorAttribute> {
        self.attributes.get(name).map(AsRef::as_ref)
    }

    /// Iterate `(name, generator)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (FrameworkIdentifier, &dyn GeneratorAttribute)> {
        self.attributes
            .iter()
            .map(|(name, generator)| (FrameworkIdentifier::from(name.as_str()), generator.as_ref()))
    }

    /// Number of attributes
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Check whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Same attribute names with pairwise equal generators
    #[must_use]
    pub fn equal(&self, other: &Self) -> bool {
        self.attributes.len() == other.attributes.len()
            && self.attributes.iter().all(|(name, generator)| {
                other
                    .attributes
                    .get(name)
                    .is_some_and(|o| generator.equal(o.as_ref()))
            })
    }

    /// Imports of every attribute
    #[must_use]
    pub fn imports(&self) -> Imports {
        let mut imports = Imports::new();

        for generator in self.attributes.values() {
            imports.append(&generator.imports());
        }

        imports
    }

    /// Schema clause of every attribute, one per line
    #[must_use]
    pub fn schema(&self) -> String {
        self.iter()
            .map(|(name, generator)| format!("{}\n", generator.schema(&name)))
            .collect()
    }

    /// `<Name>Model` struct with one field per attribute
    #[must_use]
    pub fn model_struct(&self, name: &FrameworkIdentifier) -> String {
        let fields: String = self
            .iter()
            .map(|(attribute, generator)| format!("\t{}\n", generator.model_field(&attribute)))
            .collect();

        format!("type {}Model struct {{\n{fields}}}\n", name.to_pascal_case())
    }

    /// Imports of [`GeneratorAttributes::model_struct`]
    ///
    /// Only the framework `types` package is reported. Custom value types are
    /// covered by [`GeneratorAttributes::imports`], and generated wrappers
    /// live in the same package as the model.
    #[must_use]
    pub fn model_imports(&self) -> Imports {
        let mut imports = Imports::new();
        let uses_builtin_types = self.iter().any(|(attribute, generator)| {
            generator.model_field(&attribute).value_type.starts_with("types.")
        });

        if uses_builtin_types {
            imports.add_path(TYPES_IMPORT);
        }

        imports
    }

    /// Custom types and values of every attribute bound to an external type
    ///
    /// # Errors
    ///
    /// Returns the first render error.
    pub fn custom_types_and_values(&self, renderer: &dyn Renderer) -> Result<String, GeneratorError> {
        let mut source = String::new();

        for (name, generator) in self.iter() {
            if let Some(rendered) = generator.custom_type_and_value(renderer, &name)? {
                source.push_str(&rendered);
            }
        }

        Ok(source)
    }

    /// Conversion functions of every attribute bound to an external type
    ///
    /// # Errors
    ///
    /// Returns the first render error.
    pub fn to_from_functions(&self, renderer: &dyn Renderer) -> Result<String, GeneratorError> {
        let mut source = String::new();

        for (name, generator) in self.iter() {
            if let Some(rendered) = generator.to_from_functions(renderer, &name)? {
                source.push_str(&rendered);
            }
        }

        Ok(source)
    }

    /// `<Name>ResourceSchema` function returning the complete resource schema
    ///
    /// The output is not gofmt-formatted.
    #[must_use]
    pub fn resource_schema(&self, name: &FrameworkIdentifier) -> String {
        format!(
            "func {}ResourceSchema(ctx context.Context) schema.Schema {{\n\
             return schema.Schema{{\n\
             Attributes: map[string]schema.Attribute{{\n\
             {}\
             }},\n\
             }}\n\
             }}\n",
            name.to_pascal_case(),
            self.schema(),
        )
    }

    /// Imports of [`GeneratorAttributes::resource_schema`] and its attributes
    #[must_use]
    pub fn resource_imports(&self) -> Imports {
        let mut imports = self.imports();
        imports.add_path(CONTEXT_IMPORT);
        imports.add_path(RESOURCE_SCHEMA_IMPORT);
        imports
    }
}
