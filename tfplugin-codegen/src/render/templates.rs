//! Go source templates compiled into the crate

/// Custom type wrapping the kind's framework type
pub const CUSTOM_TYPE: &str = "custom_type.go.j2";

/// Custom value wrapping the kind's framework value
pub const CUSTOM_VALUE: &str = "custom_value.go.j2";

/// To/From functions converting a dynamic value through `tfsdk`
pub const TO_FROM_DYNAMIC: &str = "to_from_dynamic.go.j2";

/// To/From functions converting a primitive value through its pointer accessors
pub const TO_FROM_PRIMITIVE: &str = "to_from_primitive.go.j2";

/// Names of all templates
pub const TEMPLATE_NAMES: &[&str] = &[CUSTOM_TYPE, CUSTOM_VALUE, TO_FROM_DYNAMIC, TO_FROM_PRIMITIVE];

/// Embedded source of a template
#[must_use]
pub fn embedded(name: &str) -> Option<&'static str> {
    match name {
        CUSTOM_TYPE => Some(include_str!("../../templates/custom_type.go.j2")),
        CUSTOM_VALUE => Some(include_str!("../../templates/custom_value.go.j2")),
        TO_FROM_DYNAMIC => Some(include_str!("../../templates/to_from_dynamic.go.j2")),
        TO_FROM_PRIMITIVE => Some(include_str!("../../templates/to_from_primitive.go.j2")),
        _ => None,
    }
}
