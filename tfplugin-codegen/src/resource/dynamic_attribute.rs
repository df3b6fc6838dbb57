use super::{
    attr_type, attr_value, attribute_imports, custom_type_and_value, from_conversion,
    schema_block, to_conversion, to_from_functions,
};
use crate::convert::{
    ComputedOptionalRequired, CustomTypePrimitive, DefaultDynamic, DeprecationMessage,
    Description, PlanModifiers, SchemaClause, Sensitive, Validators,
};
use crate::error::ConstructionError;
use crate::model::ModelField;
use crate::render::{RenderError, Renderer};
use crate::schema::{
    AssocExtType, FrameworkIdentifier, GeneratorAttribute, GeneratorSchemaType, Imports,
    ToFromConversion,
};
use crate::spec::{self, DynamicAttribute};
use std::any::Any;

const KIND: GeneratorSchemaType = GeneratorSchemaType::Dynamic;

/// Generator for a `schema.DynamicAttribute`
///
/// # Examples
///
/// ```rust
/// use tfplugin_codegen::resource::GeneratorDynamicAttribute;
/// use tfplugin_codegen::schema::{FrameworkIdentifier, GeneratorAttribute};
/// use tfplugin_codegen::spec::DynamicAttribute;
///
/// let generator =
///     GeneratorDynamicAttribute::new("example", Some(&DynamicAttribute::default())).unwrap();
///
/// assert_eq!(
///     generator.schema(&FrameworkIdentifier::from("example")),
///     "\"example\": schema.DynamicAttribute{\nOptional: true,\n},"
/// );
/// assert!(generator.imports().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorDynamicAttribute {
    assoc_ext_type: Option<AssocExtType>,
    computed_optional_required: ComputedOptionalRequired,
    custom_type: CustomTypePrimitive,
    default: DefaultDynamic,
    deprecation_message: DeprecationMessage,
    description: Description,
    plan_modifiers: PlanModifiers,
    sensitive: Sensitive,
    validators: Validators,
}

impl GeneratorDynamicAttribute {
    /// Build the generator for attribute `name`
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] when `attribute` is `None`.
    pub fn new(name: &str, attribute: Option<&DynamicAttribute>) -> Result<Self, ConstructionError> {
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
            default: DefaultDynamic::new(a.default.as_ref()),
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

impl PartialEq for GeneratorDynamicAttribute {
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

impl Eq for GeneratorDynamicAttribute {}

impl GeneratorAttribute for GeneratorDynamicAttribute {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Artifact, MockRenderer};
    use crate::resource::GeneratorBoolAttribute;
    use crate::schema::{BASE_TYPES_IMPORT, PLAN_MODIFIER_IMPORT, TF_TYPES_IMPORT, VALIDATOR_IMPORT};
    use crate::spec::{
        AssociatedExternalType, BoolAttribute, CodeImport, CustomDefinition, CustomType,
        DynamicDefault, PlanModifier, Validator,
    };
    use proptest::prelude::*;

    fn name() -> FrameworkIdentifier {
        FrameworkIdentifier::from("example")
    }

    fn generator(attribute: &DynamicAttribute) -> GeneratorDynamicAttribute {
        GeneratorDynamicAttribute::new("example", Some(attribute)).unwrap()
    }

    fn custom(schema_definition: &str, path: &str) -> Option<CustomDefinition> {
        Some(CustomDefinition {
            imports: vec![CodeImport::new(path)],
            schema_definition: schema_definition.to_string(),
        })
    }

    fn bound() -> DynamicAttribute {
        DynamicAttribute {
            associated_external_type: Some(AssociatedExternalType {
                import: Some(CodeImport::new("example.com/apisdk")),
                r#type: "*apisdk.Settings".to_string(),
            }),
            ..DynamicAttribute::default()
        }
    }

    fn full() -> DynamicAttribute {
        DynamicAttribute {
            computed_optional_required: spec::ComputedOptionalRequired::ComputedOptional,
            custom_type: Some(CustomType {
                import: Some(CodeImport::new("example.com/mytypes")),
                r#type: "mytypes.JsonType{}".to_string(),
                value_type: "mytypes.JsonValue".to_string(),
            }),
            default: Some(DynamicDefault {
                custom: custom("defaults.Dynamic()", "example.com/defaults"),
            }),
            deprecation_message: Some("do not use".to_string()),
            description: Some("the thing".to_string()),
            plan_modifiers: vec![PlanModifier {
                custom: custom("pm.Keep()", "example.com/pm"),
            }],
            sensitive: Some(true),
            validators: vec![Validator {
                custom: custom("v.Check()", "example.com/v"),
            }],
            ..DynamicAttribute::default()
        }
    }

    #[test]
    fn test_new_nil() {
        let err = GeneratorDynamicAttribute::new("example", None).unwrap_err();
        assert_eq!(err.to_string(), "Dynamic attribute 'example' is nil");
    }

    #[test]
    fn test_schema_minimal() {
        assert_eq!(
            generator(&DynamicAttribute::default()).schema(&name()),
            "\"example\": schema.DynamicAttribute{\nOptional: true,\n},"
        );
    }

    #[test]
    fn test_schema_clause_order() {
        let expected = "\"example\": schema.DynamicAttribute{\n\
            CustomType: mytypes.JsonType{},\n\
            Computed: true,\n\
            Optional: true,\n\
            Sensitive: true,\n\
            Description: \"the thing\",\n\
            MarkdownDescription: \"the thing\",\n\
            DeprecationMessage: \"do not use\",\n\
            PlanModifiers: []planmodifier.Dynamic{\n\
            pm.Keep(),\n\
            },\n\
            Validators: []validator.Dynamic{\n\
            v.Check(),\n\
            },\n\
            Default: defaults.Dynamic(),\n\
            },";

        let g = generator(&full());
        assert_eq!(g.schema(&name()), expected);
        assert_eq!(g.schema(&name()), g.schema(&name()));
    }

    #[test]
    fn test_schema_with_binding_only() {
        assert_eq!(
            generator(&bound()).schema(&name()),
            "\"example\": schema.DynamicAttribute{\nCustomType: ExampleType{},\nOptional: true,\n},"
        );
    }

    #[test]
    fn test_imports() {
        let imports = generator(&full()).imports();

        for path in [
            "example.com/mytypes",
            "example.com/defaults",
            "example.com/pm",
            "example.com/v",
            PLAN_MODIFIER_IMPORT,
            VALIDATOR_IMPORT,
        ] {
            assert!(imports.contains(path), "{path}");
        }
        assert_eq!(imports.len(), 6);
    }

    #[test]
    fn test_imports_with_binding() {
        let imports = generator(&bound()).imports();

        assert!(imports.contains("example.com/apisdk"));
        assert!(imports.contains(BASE_TYPES_IMPORT));
        assert!(imports.contains(TF_TYPES_IMPORT));
        assert_eq!(imports.len(), 8);
    }

    #[test]
    fn test_model_field() {
        let field = generator(&DynamicAttribute::default()).model_field(&name());
        assert_eq!(field.name, "Example");
        assert_eq!(field.tfsdk_name, "example");
        assert_eq!(field.value_type, "types.Dynamic");

        assert_eq!(generator(&full()).model_field(&name()).value_type, "mytypes.JsonValue");
        assert_eq!(generator(&bound()).model_field(&name()).value_type, "ExampleValue");
    }

    #[test]
    fn test_attr_type_and_value() {
        let plain = generator(&DynamicAttribute::default());
        assert_eq!(plain.attr_type(&name()), "basetypes.DynamicType{}");
        assert_eq!(plain.attr_value(&name()), "basetypes.DynamicValue");

        let foo = FrameworkIdentifier::from("foo");
        let with_binding = generator(&bound());
        assert!(with_binding.attr_type(&foo).contains("FooType"));
        assert!(with_binding.attr_value(&foo).contains("FooValue"));
    }

    #[test]
    fn test_to_from() {
        let plain = generator(&DynamicAttribute::default());
        assert_eq!(plain.to(), ToFromConversion::Default("ValueStringPointer"));
        assert_eq!(plain.from(), ToFromConversion::Default("StringPointerValue"));

        let with_binding = generator(&bound());
        assert!(matches!(with_binding.to(), ToFromConversion::AssocExtType(_)));
        assert!(matches!(with_binding.from(), ToFromConversion::AssocExtType(_)));
    }

    #[test]
    fn test_no_binding_never_renders() {
        let mut renderer = MockRenderer::new();
        renderer.expect_render().never();

        let g = generator(&DynamicAttribute::default());
        assert_eq!(g.custom_type_and_value(&renderer, &name()).unwrap(), None);
        assert_eq!(g.to_from_functions(&renderer, &name()).unwrap(), None);
    }

    #[test]
    fn test_custom_type_and_value_renders_type_then_value() {
        let mut renderer = MockRenderer::new();
        let mut seq = mockall::Sequence::new();
        renderer
            .expect_render()
            .withf(|d| d.artifact == Artifact::CustomType && d.kind == KIND)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("type;".to_string()));
        renderer
            .expect_render()
            .withf(|d| d.artifact == Artifact::CustomValue)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("value;".to_string()));

        let source = generator(&bound())
            .custom_type_and_value(&renderer, &name())
            .unwrap();
        assert_eq!(source.as_deref(), Some("type;value;"));
    }

    #[test]
    fn test_custom_type_failure_stops_rendering() {
        let mut renderer = MockRenderer::new();
        renderer
            .expect_render()
            .times(1)
            .returning(|_| Err(RenderError::TemplateNotFound("custom_type.go.j2".to_string())));

        let err = generator(&bound())
            .custom_type_and_value(&renderer, &name())
            .unwrap_err();
        assert!(matches!(err, RenderError::TemplateNotFound(t) if t == "custom_type.go.j2"));
    }

    #[test]
    fn test_to_from_functions_passes_binding() {
        let mut renderer = MockRenderer::new();
        renderer
            .expect_render()
            .withf(|d| {
                d.artifact == Artifact::ToFrom
                    && d.assoc_ext_type
                        .as_ref()
                        .is_some_and(|a| a.type_expr() == "*apisdk.Settings")
            })
            .times(1)
            .returning(|_| Ok("to_from;".to_string()));

        let source = generator(&bound()).to_from_functions(&renderer, &name()).unwrap();
        assert_eq!(source.as_deref(), Some("to_from;"));
    }

    #[test]
    fn test_equal_across_kinds() {
        let dynamic = generator(&DynamicAttribute::default());
        let boolean =
            GeneratorBoolAttribute::new("example", Some(&BoolAttribute::default())).unwrap();

        assert!(dynamic.equal(&dynamic.clone()));
        assert!(!dynamic.equal(&boolean));
        assert!(!boolean.equal(&dynamic));
    }

    #[test]
    fn test_equal_ignores_attribute_name() {
        for declared in [DynamicAttribute::default(), bound(), full()] {
            let alpha = GeneratorDynamicAttribute::new("alpha", Some(&declared)).unwrap();
            let beta = GeneratorDynamicAttribute::new("beta", Some(&declared)).unwrap();

            assert!(alpha.equal(&beta));
            assert!(beta.equal(&alpha));
        }
    }

    #[test]
    fn test_wrapper_names_come_from_the_queried_identifier() {
        let g = generator(&bound());
        let foo = FrameworkIdentifier::from("foo");

        assert!(g.schema(&foo).contains("CustomType: FooType{},\n"));
        assert_eq!(g.attr_type(&foo), "FooType{}");
        assert_eq!(g.attr_value(&foo), "FooValue");
        assert_eq!(g.model_field(&foo).value_type, "FooValue");
    }

    #[test]
    fn test_equal_single_field_difference() {
        let base = full();
        let variants = [
            DynamicAttribute {
                sensitive: Some(false),
                ..base.clone()
            },
            DynamicAttribute {
                description: None,
                ..base.clone()
            },
            DynamicAttribute {
                computed_optional_required: spec::ComputedOptionalRequired::Required,
                ..base.clone()
            },
            DynamicAttribute {
                validators: vec![],
                ..base.clone()
            },
            DynamicAttribute {
                associated_external_type: bound().associated_external_type,
                ..base.clone()
            },
        ];

        let g = generator(&base);
        for variant in &variants {
            let other = generator(variant);
            assert!(!g.equal(&other));
            assert!(!other.equal(&g));
        }
    }

    fn arb_attribute() -> impl Strategy<Value = DynamicAttribute> {
        (
            prop::option::of(any::<bool>()),
            prop::option::of("[a-z ]{0,8}"),
            prop::option::of("[a-z ]{0,8}"),
            prop::sample::select(vec![
                spec::ComputedOptionalRequired::Computed,
                spec::ComputedOptionalRequired::ComputedOptional,
                spec::ComputedOptionalRequired::Optional,
                spec::ComputedOptionalRequired::Required,
            ]),
            any::<bool>(),
        )
            .prop_map(|(sensitive, description, deprecation_message, cor, with_binding)| {
                DynamicAttribute {
                    associated_external_type: with_binding
                        .then(|| bound().associated_external_type)
                        .flatten(),
                    computed_optional_required: cor,
                    deprecation_message,
                    description,
                    sensitive,
                    ..DynamicAttribute::default()
                }
            })
    }

    proptest! {
        #[test]
        fn equal_matches_input_equality(a in arb_attribute(), b in arb_attribute()) {
            let ga = generator(&a);
            let gb = generator(&b);

            prop_assert!(ga.equal(&ga));
            prop_assert_eq!(ga.equal(&gb), gb.equal(&ga));
            prop_assert_eq!(ga.equal(&gb), a == b);
        }

        #[test]
        fn imports_are_stable_and_never_empty_paths(a in arb_attribute()) {
            let g = generator(&a);
            prop_assert_eq!(g.imports(), g.imports());
            prop_assert!(g.imports().all().all(|i| !i.path.is_empty()));
        }
    }
}
