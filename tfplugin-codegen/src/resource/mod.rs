//! Resource schema attribute generators
//!
//! One generator per attribute kind. Each resolves every schema clause at
//! construction and implements [`GeneratorAttribute`] on top of them. The
//! external type handling below is identical across kinds; only the
//! built-in names differ.
//!
//! [`GeneratorAttribute`]: crate::schema::GeneratorAttribute

mod bool_attribute;
mod dynamic_attribute;

pub use bool_attribute::GeneratorBoolAttribute;
pub use dynamic_attribute::GeneratorDynamicAttribute;

use crate::convert::{CustomTypePrimitive, SchemaClause};
use crate::render::{ArtifactDescriptor, RenderError, Renderer};
use crate::schema::{
    associated_external_type_imports, AssocExtType, FrameworkIdentifier, GeneratorSchemaType,
    Imports, ToFromConversion,
};

/// `"<name>": schema.<Kind>Attribute{\n<custom type><clauses>},`
fn schema_block(
    kind: GeneratorSchemaType,
    name: &FrameworkIdentifier,
    custom_type: &CustomTypePrimitive,
    clauses: &[&dyn SchemaClause],
) -> String {
    let mut block = format!("{}: {}{{\n", name.to_go_literal(), kind.schema_attribute());
    block.push_str(&custom_type.schema(name));

    for clause in clauses {
        block.push_str(&clause.schema());
    }

    block.push_str("},");
    block
}

/// Union of the clause imports plus the external type support imports
fn attribute_imports(
    custom_type: &CustomTypePrimitive,
    clauses: &[&dyn SchemaClause],
    assoc_ext_type: Option<&AssocExtType>,
) -> Imports {
    let mut imports = custom_type.imports();

    for clause in clauses {
        imports.append(&clause.imports());
    }

    if let Some(assoc_ext_type) = assoc_ext_type {
        imports.append(&associated_external_type_imports());
        imports.append(&assoc_ext_type.imports());
    }

    imports
}

fn custom_type_and_value(
    renderer: &dyn Renderer,
    kind: GeneratorSchemaType,
    name: &FrameworkIdentifier,
    assoc_ext_type: Option<&AssocExtType>,
) -> Result<Option<String>, RenderError> {
    if assoc_ext_type.is_none() {
        return Ok(None);
    }

    let mut source = renderer.render(&ArtifactDescriptor::custom_type(name.clone(), kind))?;
    source.push_str(&renderer.render(&ArtifactDescriptor::custom_value(name.clone(), kind))?);

    Ok(Some(source))
}

fn to_from_functions(
    renderer: &dyn Renderer,
    kind: GeneratorSchemaType,
    name: &FrameworkIdentifier,
    assoc_ext_type: Option<&AssocExtType>,
) -> Result<Option<String>, RenderError> {
    let Some(assoc_ext_type) = assoc_ext_type else {
        return Ok(None);
    };

    renderer
        .render(&ArtifactDescriptor::to_from(
            name.clone(),
            kind,
            assoc_ext_type.clone(),
        ))
        .map(Some)
}

fn attr_type(
    kind: GeneratorSchemaType,
    name: &FrameworkIdentifier,
    assoc_ext_type: Option<&AssocExtType>,
) -> String {
    if assoc_ext_type.is_some() {
        format!("{}Type{{}}", name.to_pascal_case())
    } else {
        kind.base_type()
    }
}

fn attr_value(
    kind: GeneratorSchemaType,
    name: &FrameworkIdentifier,
    assoc_ext_type: Option<&AssocExtType>,
) -> String {
    if assoc_ext_type.is_some() {
        format!("{}Value", name.to_pascal_case())
    } else {
        kind.base_value()
    }
}

fn to_conversion(kind: GeneratorSchemaType, assoc_ext_type: Option<&AssocExtType>) -> ToFromConversion {
    assoc_ext_type.map_or_else(
        || ToFromConversion::Default(kind.conversion_defaults().to),
        |a| ToFromConversion::AssocExtType(a.clone()),
    )
}

fn from_conversion(kind: GeneratorSchemaType, assoc_ext_type: Option<&AssocExtType>) -> ToFromConversion {
    assoc_ext_type.map_or_else(
        || ToFromConversion::Default(kind.conversion_defaults().from),
        |a| ToFromConversion::AssocExtType(a.clone()),
    )
}
