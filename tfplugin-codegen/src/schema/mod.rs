//! Building blocks shared by every attribute generator
//!
//! - [`Imports`]: path-keyed import aggregation
//! - [`FrameworkIdentifier`]: attribute names and Go naming
//! - [`AssocExtType`]: external type bindings
//! - [`GeneratorAttribute`]: the per-kind generator contract

mod assoc_ext_type;
mod attribute;
mod identifier;
mod imports;

pub use assoc_ext_type::AssocExtType;
pub use attribute::{ConversionDefaults, GeneratorAttribute, GeneratorSchemaType, ToFromConversion};
pub use identifier::{go_quote, FrameworkIdentifier};
pub use imports::{
    associated_external_type_imports, Imports, ATTR_IMPORT, BASE_TYPES_IMPORT,
    BOOL_DEFAULT_IMPORT, CONTEXT_IMPORT, DIAG_IMPORT, FMT_IMPORT, PLAN_MODIFIER_IMPORT,
    RESOURCE_SCHEMA_IMPORT, TFSDK_IMPORT, TF_TYPES_IMPORT, TYPES_IMPORT, VALIDATOR_IMPORT,
};
