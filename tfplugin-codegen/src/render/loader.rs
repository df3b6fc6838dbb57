//! minijinja-backed renderer with directory overrides and reload support

use super::templates::{self, TEMPLATE_NAMES};
use super::{Artifact, ArtifactDescriptor, RenderError, Renderer};
use crate::config::RenderSettings;
use crate::schema::AssocExtType;
use minijinja::{AutoEscape, Environment, ErrorKind};
use parking_lot::RwLock;
use serde::Serialize;
use std::path::Path;

/// Thread-safe template renderer
///
/// Every template is compiled into the crate. When
/// [`RenderSettings::template_dir`] is set, a file of the same name in that
/// directory replaces the embedded source. The environment can be rebuilt
/// with [`TemplateRenderer::reload`] while other threads render.
#[derive(Debug)]
pub struct TemplateRenderer {
    env: RwLock<Environment<'static>>,
    settings: RenderSettings,
}

impl TemplateRenderer {
    /// Create a renderer using only the embedded templates
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded template fails to compile.
    pub fn new() -> Result<Self, RenderError> {
        Self::from_settings(&RenderSettings::default())
    }

    /// Create a renderer from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be read or a template fails to
    /// compile.
    pub fn from_settings(settings: &RenderSettings) -> Result<Self, RenderError> {
        let env = Self::create_environment(settings)?;

        Ok(Self {
            env: RwLock::new(env),
            settings: settings.clone(),
        })
    }

    fn create_environment(settings: &RenderSettings) -> Result<Environment<'static>, RenderError> {
        let mut env = Environment::new();

        env.set_trim_blocks(settings.trim_blocks);
        env.set_lstrip_blocks(settings.lstrip_blocks);
        env.set_keep_trailing_newline(true);
        // Go source, not HTML
        env.set_auto_escape_callback(|_| AutoEscape::None);

        for name in TEMPLATE_NAMES {
            let content = Self::load_template_content(name, settings.template_dir.as_deref())?;
            env.add_template_owned((*name).to_string(), content)?;
        }

        Ok(env)
    }

    /// Template source, preferring an override on disk
    fn load_template_content(name: &str, template_dir: Option<&Path>) -> Result<String, RenderError> {
        if let Some(dir) = template_dir {
            let path = dir.join(name);
            if path.exists() {
                return std::fs::read_to_string(&path)
                    .map_err(|e| RenderError::ReadFailed(name.to_string(), e));
            }
        }

        templates::embedded(name)
            .map(str::to_string)
            .ok_or_else(|| RenderError::TemplateNotFound(name.to_string()))
    }

    /// Rebuild every template from its current source
    ///
    /// The new environment replaces the old one atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be read or a template fails to
    /// compile. The previous templates stay in use.
    pub fn reload(&self) -> Result<(), RenderError> {
        let new_env = Self::create_environment(&self.settings)?;

        *self.env.write() = new_env;

        tracing::debug!("Artifact templates reloaded");
        Ok(())
    }

    /// Check if a template is overridden from the template directory
    #[must_use]
    pub fn is_customized(&self, name: &str) -> bool {
        self.settings
            .template_dir
            .as_ref()
            .is_some_and(|dir| dir.join(name).exists())
    }
}

impl Renderer for TemplateRenderer {
    fn render(&self, descriptor: &ArtifactDescriptor) -> Result<String, RenderError> {
        let template_name = descriptor.template_name();

        tracing::debug!(
            attribute = %descriptor.name,
            kind = %descriptor.kind,
            template = template_name,
            "Rendering artifact"
        );

        let context = ArtifactContext::new(descriptor)?;

        let env = self.env.read();
        let template = env.get_template(template_name).map_err(|e| {
            if e.kind() == ErrorKind::TemplateNotFound {
                RenderError::TemplateNotFound(template_name.to_string())
            } else {
                RenderError::Template(e)
            }
        })?;

        Ok(template.render(context)?)
    }
}

/// Values available to every template
#[derive(Debug, Serialize)]
struct ArtifactContext<'a> {
    name: String,
    kind: &'static str,
    to_func: &'static str,
    from_func: &'static str,
    assoc_ext_type: Option<AssocExtTypeContext<'a>>,
}

#[derive(Debug, Serialize)]
struct AssocExtTypeContext<'a> {
    type_expr: &'a str,
    type_reference: &'a str,
    pascal: String,
    is_pointer: bool,
    zero: String,
}

impl<'a> ArtifactContext<'a> {
    fn new(descriptor: &'a ArtifactDescriptor) -> Result<Self, RenderError> {
        let assoc_ext_type = descriptor.assoc_ext_type.as_ref().map(AssocExtTypeContext::new);

        if descriptor.artifact == Artifact::ToFrom && assoc_ext_type.is_none() {
            return Err(RenderError::MissingAssocExtType {
                name: descriptor.name.to_string(),
            });
        }

        let conversions = descriptor.kind.conversion_defaults();

        Ok(Self {
            name: descriptor.name.to_pascal_case(),
            kind: descriptor.kind.name(),
            to_func: conversions.to,
            from_func: conversions.from,
            assoc_ext_type,
        })
    }
}

impl<'a> AssocExtTypeContext<'a> {
    fn new(assoc_ext_type: &'a AssocExtType) -> Self {
        let is_pointer = assoc_ext_type.type_expr().starts_with('*');
        let zero = if is_pointer {
            "nil".to_string()
        } else {
            format!("{}{{}}", assoc_ext_type.type_reference())
        };

        Self {
            type_expr: assoc_ext_type.type_expr(),
            type_reference: assoc_ext_type.type_reference(),
            pascal: assoc_ext_type.to_pascal_case(),
            is_pointer,
            zero,
        }
    }
}
