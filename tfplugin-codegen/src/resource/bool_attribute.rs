use super::{
    attr_type, attr_value, attribute_imports, custom_type_and_value, from_conversion,
    schema_block, to_conversion, to_from_functions,
};
use crate::convert::{
    ComputedOptionalRequired, CustomTypePrimitive, DefaultBool, DeprecationMessage, Description,
    PlanModifiers, SchemaClause, Sensitive, Validators,
};
use crate::error::ConstructionError;
use crate::model::ModelField;
use crate::render::{RenderError, Renderer};
use crate::schema::{
    AssocExtType, FrameworkIdentifier, GeneratorAttribute, GeneratorSchemaType, Imports,
    ToFromConversion,
};
use crate::spec::{self, BoolAttribute};
use std::any::Any;

const KIND: GeneratorSchemaType = GeneratorSchemaType::Bool;

/// Generator for a `schema.BoolAttribute`
#[derive(Debug, Clone)]
pub struct GeneratorBoolAttribute {
    assoc_ext_type: Option<AssocExtType>,
    computed_optional_required: ComputedOptionalRequired,
    custom_type: CustomTypePrimitive,
    default: DefaultBool,
    deprecation_message: DeprecationMessage,
    description: Description,
    plan_modifiers: PlanModifiers,
    sensitive: Sensitive,
    validators: Validators,
}

impl GeneratorBoolAttribute {
    /// Build the generator for attribute `name`
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] when `attribute` is `None`.
    pub fn new(name: &str, attribute: Option<&BoolAttribute>) -> Result<Self, ConstructionError> {
        let Some(a) = attribute else {
            return Err(ConstructionError {
                kind: KIND,
                name: name.to_string(),
            });
        };

        tracing::debug!(
            attribute = name,
            kind = %KIND,
            assoc_ext_type = a.associated_external_type.is_some(),
            "Building attribute generator"
        );

        Ok(Self {
            assoc_ext_type: AssocExtType::new(a.associated_external_type.as_ref()),
            computed_optional_required: ComputedOptionalRequired::new(a.computed_optional_required),
            custom_type: CustomTypePrimitive::new(
                a.custom_type.as_ref(),
                a.associated_external_type.as_ref(),
            ),
            default: DefaultBool::new(a.default.as_ref()),
            deprecation_message: DeprecationMessage::new(a.deprecation_message.as_deref()),
            description: Description::new(a.description.as_deref()),
            plan_modifiers: PlanModifiers::new(KIND, spec::custom_plan_modifiers(&a.plan_modifiers)),
            sensitive: Sensitive::new(a.sensitive),
            validators: Validators::new(KIND, spec::custom_validators(&a.validators)),
        })
    }

    /// Clauses following `CustomType`, in schema emission order
    fn clauses(&self) -> [&dyn SchemaClause; 7] {
        [
            &self.computed_optional_required,
            &self.sensitive,
            &self.description,
            &self.deprecation_message,
            &self.plan_modifiers,
            &self.validators,
            &self.default,
        ]
    }
}

impl PartialEq for GeneratorBoolAttribute {
    fn eq(&self, other: &Self) -> bool {
        self.assoc_ext_type == other.assoc_ext_type
            && self.computed_optional_required == other.computed_optional_required
            && self.custom_type == other.custom_type
            && self.default == other.default
            && self.deprecation_message == other.deprecation_message
            && self.description == other.description
            && self.plan_modifiers == other.plan_modifiers
            && self.sensitive == other.sensitive
            && self.validators == other.validators
    }
}

impl Eq for GeneratorBoolAttribute {}

impl GeneratorAttribute for GeneratorBoolAttribute {
    fn generator_schema_type(&self) -> GeneratorSchemaType {
        KIND
    }

    fn imports(&self) -> Imports {
        attribute_imports(&self.custom_type, &self.clauses(), self.assoc_ext_type.as_ref())
    }

    fn equal(&self, other: &dyn GeneratorAttribute) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }

    fn schema(&self, name: &FrameworkIdentifier) -> String {
        schema_block(KIND, name, &self.custom_type, &self.clauses())
    }

    fn model_field(&self, name: &FrameworkIdentifier) -> ModelField {
        ModelField {
            name: name.to_pascal_case(),
            tfsdk_name: name.to_string(),
            value_type: self
                .custom_type
                .value_type(name)
                .unwrap_or_else(|| KIND.model_value_type().to_string()),
        }
    }

    fn custom_type_and_value(
        &self,
        renderer: &dyn Renderer,
        name: &FrameworkIdentifier,
    ) -> Result<Option<String>, RenderError> {
        custom_type_and_value(renderer, KIND, name, self.assoc_ext_type.as_ref())
    }

    fn to_from_functions(
        &self,
        renderer: &dyn Renderer,
        name: &FrameworkIdentifier,
    ) -> Result<Option<String>, RenderError> {
        to_from_functions(renderer, KIND, name, self.assoc_ext_type.as_ref())
    }

    fn attr_type(&self, name: &FrameworkIdentifier) -> String {
        attr_type(KIND, name, self.assoc_ext_type.as_ref())
    }

    fn attr_value(&self, name: &FrameworkIdentifier) -> String {
        attr_value(KIND, name, self.assoc_ext_type.as_ref())
    }

    fn to(&self) -> ToFromConversion {
        to_conversion(KIND, self.assoc_ext_type.as_ref())
    }

    fn from(&self) -> ToFromConversion {
        from_conversion(KIND, self.assoc_ext_type.as_ref())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
