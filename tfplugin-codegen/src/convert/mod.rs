//! Schema clause sub-generators
//!
//! Each sub-generator wraps one optional fragment of an attribute declaration
//! and reports the clause text plus the imports that text needs. An absent
//! fragment contributes no imports and an empty clause.
//!
//! Attribute generators build every sub-generator once and then concatenate
//! their clauses in a fixed order. [`CustomTypePrimitive`] leads that order
//! and is the only one that needs the attribute identifier, which it takes
//! per call.

mod computed_optional_required;
mod custom_type;
mod default;
mod deprecation;
mod description;
mod plan_modifiers;
mod sensitive;
mod validators;

pub use computed_optional_required::ComputedOptionalRequired;
pub use custom_type::CustomTypePrimitive;
pub use default::{DefaultBool, DefaultDynamic};
pub use deprecation::DeprecationMessage;
pub use description::Description;
pub use plan_modifiers::PlanModifiers;
pub use sensitive::Sensitive;
pub use validators::Validators;

use crate::schema::Imports;
use crate::spec::CustomDefinition;

/// One clause of a schema attribute definition
pub trait SchemaClause {
    /// Imports needed by the emitted clause
    fn imports(&self) -> Imports {
        Imports::new()
    }

    /// Clause text, or an empty string when the fragment contributes nothing
    fn schema(&self) -> String;
}

/// Imports of every custom definition, skipping absent entries
fn custom_definition_imports<'a>(
    definitions: impl IntoIterator<Item = &'a Option<CustomDefinition>>,
) -> Imports {
    definitions
        .into_iter()
        .flatten()
        .flat_map(|definition| definition.imports.iter().cloned())
        .collect()
}

/// Render `Keyword: []<element>{\n<def>,\n...},\n` over non-empty definitions
fn slice_clause(keyword: &str, element: &str, definitions: &[Option<CustomDefinition>]) -> String {
    let entries: String = definitions
        .iter()
        .flatten()
        .filter(|definition| !definition.schema_definition.is_empty())
        .map(|definition| format!("{},\n", definition.schema_definition))
        .collect();

    if entries.is_empty() {
        return String::new();
    }

    format!("{keyword}: []{element}{{\n{entries}}},\n")
}
