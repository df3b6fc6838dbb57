//! Error types

use crate::render::RenderError;
use crate::schema::GeneratorSchemaType;
use thiserror::Error;

/// Attribute generator could not be constructed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} attribute '{name}' is nil")]
pub struct ConstructionError {
    /// Kind of the attribute
    pub kind: GeneratorSchemaType,
    /// Attribute name
    pub name: String,
}

/// Errors raised while generating code for a set of attributes
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// An attribute generator could not be constructed
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    /// An artifact could not be rendered
    #[error("failed to render artifact: {0}")]
    Render(#[from] RenderError),

    /// Two attributes share a name
    #[error("duplicate attribute '{0}'")]
    DuplicateAttribute(String),
}
