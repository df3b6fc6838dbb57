//! Rendering of custom type, value and conversion artifacts
//!
//! Attribute generators decide *whether* an artifact is needed; a
//! [`Renderer`] produces its source text. [`TemplateRenderer`] is the
//! minijinja-backed implementation. Its templates are compiled into the crate
//! and can be overridden one by one from a directory.
//!
//! # Example
//!
//! ```rust
//! use tfplugin_codegen::render::{ArtifactDescriptor, Renderer, TemplateRenderer};
//! use tfplugin_codegen::schema::{FrameworkIdentifier, GeneratorSchemaType};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let renderer = TemplateRenderer::new()?;
//! let descriptor = ArtifactDescriptor::custom_type(
//!     FrameworkIdentifier::from("settings"),
//!     GeneratorSchemaType::Dynamic,
//! );
//!
//! let source = renderer.render(&descriptor)?;
//! assert!(source.contains("type SettingsType struct"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

mod loader;
pub mod templates;

pub use loader::TemplateRenderer;

use crate::schema::{AssocExtType, FrameworkIdentifier, GeneratorSchemaType};
use thiserror::Error;

/// Errors that can occur when rendering an artifact
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template is not registered
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// Template override could not be read
    #[error("failed to read template '{0}': {1}")]
    ReadFailed(String, std::io::Error),

    /// Template compilation or rendering failed
    #[error("template render error: {0}")]
    Template(#[from] minijinja::Error),

    /// Conversion functions requested for an attribute without an external type
    #[error("attribute '{name}' has no associated external type")]
    MissingAssocExtType {
        /// Attribute name
        name: String,
    },
}

/// Kind of source artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    /// `<Name>Type` wrapper
    CustomType,
    /// `<Name>Value` wrapper
    CustomValue,
    /// `To<Ext>`/`From<Ext>` conversion functions
    ToFrom,
}

/// Request for one rendered artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDescriptor {
    /// Attribute the artifact belongs to
    pub name: FrameworkIdentifier,
    /// Kind of the attribute
    pub kind: GeneratorSchemaType,
    /// Which artifact to render
    pub artifact: Artifact,
    /// External type binding, required for [`Artifact::ToFrom`]
    pub assoc_ext_type: Option<AssocExtType>,
}

impl ArtifactDescriptor {
    /// Request the custom type wrapper of an attribute
    #[must_use]
    pub const fn custom_type(name: FrameworkIdentifier, kind: GeneratorSchemaType) -> Self {
        Self {
            name,
            kind,
            artifact: Artifact::CustomType,
            assoc_ext_type: None,
        }
    }

    /// Request the custom value wrapper of an attribute
    #[must_use]
    pub const fn custom_value(name: FrameworkIdentifier, kind: GeneratorSchemaType) -> Self {
        Self {
            name,
            kind,
            artifact: Artifact::CustomValue,
            assoc_ext_type: None,
        }
    }

    /// Request the conversion functions between an attribute and its external type
    #[must_use]
    pub const fn to_from(
        name: FrameworkIdentifier,
        kind: GeneratorSchemaType,
        assoc_ext_type: AssocExtType,
    ) -> Self {
        Self {
            name,
            kind,
            artifact: Artifact::ToFrom,
            assoc_ext_type: Some(assoc_ext_type),
        }
    }

    /// Name of the template that renders this artifact
    #[must_use]
    pub const fn template_name(&self) -> &'static str {
        match (self.artifact, self.kind) {
            (Artifact::CustomType, _) => templates::CUSTOM_TYPE,
            (Artifact::CustomValue, _) => templates::CUSTOM_VALUE,
            (Artifact::ToFrom, GeneratorSchemaType::Dynamic) => templates::TO_FROM_DYNAMIC,
            (Artifact::ToFrom, _) => templates::TO_FROM_PRIMITIVE,
        }
    }
}

/// Produces source text for artifacts
#[cfg_attr(test, mockall::automock)]
pub trait Renderer: Send + Sync {
    /// Render one artifact
    ///
    /// # Errors
    ///
    /// Returns an error if the artifact cannot be rendered.
    fn render(&self, descriptor: &ArtifactDescriptor) -> Result<String, RenderError>;
}
