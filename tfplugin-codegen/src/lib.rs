//! tfplugin-codegen: attribute generators for Terraform Plugin Framework Go source
//!
//! Each schema attribute of a resource is described by a declarative
//! fragment (see [`spec`]). An attribute generator turns that fragment into
//! Go source:
//!
//! - the `schema.<Kind>Attribute{...}` clause of the resource schema
//! - a data model struct field
//! - the imports those need
//! - for attributes bound to an external Go type, custom type and value
//!   wrappers plus `To`/`From` conversion functions, produced by a
//!   [`render::Renderer`]
//!
//! # Quick Start
//!
//! ```rust
//! use tfplugin_codegen::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let declared: DynamicAttribute = serde_json::from_str(
//!     r#"{
//!         "computed_optional_required": "computed_optional",
//!         "description": "Arbitrary settings",
//!         "associated_external_type": { "type": "*apisdk.Settings" }
//!     }"#,
//! )?;
//!
//! let name = FrameworkIdentifier::from("settings");
//! let generator = GeneratorDynamicAttribute::new(name.as_str(), Some(&declared))?;
//!
//! assert!(generator
//!     .schema(&name)
//!     .starts_with("\"settings\": schema.DynamicAttribute{\nCustomType: SettingsType{},\n"));
//!
//! let renderer = TemplateRenderer::new()?;
//! let wrappers = generator.custom_type_and_value(&renderer, &name)?;
//! assert!(wrappers.is_some_and(|source| source.contains("type SettingsValue struct")));
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`spec`]: input fragments
//! - [`convert`]: one sub-generator per schema clause
//! - [`resource`]: attribute generators per kind
//! - [`attributes`]: whole-resource assembly
//! - [`render`]: artifact rendering
//! - [`config`], [`observability`]: configuration and logging

pub mod attributes;
pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod observability;
pub mod render;
pub mod resource;
pub mod schema;
pub mod spec;

/// Commonly used types
pub mod prelude {
    pub use crate::attributes::GeneratorAttributes;
    pub use crate::config::GeneratorConfig;
    pub use crate::error::{ConstructionError, GeneratorError};
    pub use crate::model::ModelField;
    pub use crate::render::{ArtifactDescriptor, RenderError, Renderer, TemplateRenderer};
    pub use crate::resource::{GeneratorBoolAttribute, GeneratorDynamicAttribute};
    pub use crate::schema::{
        FrameworkIdentifier, GeneratorAttribute, GeneratorSchemaType, Imports, ToFromConversion,
    };
    pub use crate::spec::{BoolAttribute, ComputedOptionalRequired, DynamicAttribute};
}
