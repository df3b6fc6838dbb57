//! Data model struct fields

use std::fmt;

/// Model value type of a dynamic attribute
pub const DYNAMIC_VALUE_TYPE: &str = "types.Dynamic";

/// Model value type of a bool attribute
pub const BOOL_VALUE_TYPE: &str = "types.Bool";

/// One field of a generated `...Model` struct
///
/// # Examples
///
/// ```rust
/// use tfplugin_codegen::model::ModelField;
///
/// let field = ModelField {
///     name: "ApiSettings".to_string(),
///     tfsdk_name: "api_settings".to_string(),
///     value_type: "types.Dynamic".to_string(),
/// };
///
/// assert_eq!(
///     field.to_string(),
///     "ApiSettings types.Dynamic `tfsdk:\"api_settings\"`"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelField {
    /// Exported Go field name
    pub name: String,
    /// Attribute key used in the `tfsdk` struct tag
    pub tfsdk_name: String,
    /// Go value type of the field
    pub value_type: String,
}

impl fmt::Display for ModelField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} `tfsdk:\"{}\"`",
            self.name, self.value_type, self.tfsdk_name
        )
    }
}
