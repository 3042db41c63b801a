//! Templating collaborators

use crate::config::FormConfig;
use crate::descriptor::FieldDescriptor;
use crate::error::TemplateError;
use handlebars::Handlebars;

/// Handlebars source for a single `<input>` element
///
/// The `value` attribute is emitted only when `HasValue` is set.
pub const DEFAULT_INPUT_TEMPLATE: &str =
    r#"<input type="{{Type}}" name="{{Name}}"{{#if HasValue}} value="{{Value}}"{{/if}}>"#;

const FIELD_TEMPLATE_NAME: &str = "field";

/// Renders one descriptor into a markup fragment
///
/// Implementations are responsible for escaping anything they embed.
pub trait Template {
    fn execute(&self, field: &FieldDescriptor) -> Result<String, TemplateError>;
}

impl<T: Template + ?Sized> Template for &T {
    fn execute(&self, field: &FieldDescriptor) -> Result<String, TemplateError> {
        (**self).execute(field)
    }
}

impl<T: Template + ?Sized> Template for Box<T> {
    fn execute(&self, field: &FieldDescriptor) -> Result<String, TemplateError> {
        (**self).execute(field)
    }
}

/// Handlebars-backed template with HTML escaping
pub struct HandlebarsTemplate {
    registry: Handlebars<'static>,
}

impl HandlebarsTemplate {
    /// Compile `source` as the per-field template
    pub fn new(source: &str) -> Result<Self, TemplateError> {
        Self::build(source, false)
    }

    /// Compile `source` in strict mode: unknown attributes fail rendering
    pub fn strict(source: &str) -> Result<Self, TemplateError> {
        Self::build(source, true)
    }

    /// The built-in `<input>` template
    pub fn input() -> Result<Self, TemplateError> {
        Self::new(DEFAULT_INPUT_TEMPLATE)
    }

    /// Template and strictness taken from configuration
    pub fn from_config(config: &FormConfig) -> Result<Self, TemplateError> {
        let source = config.template.as_deref().unwrap_or(DEFAULT_INPUT_TEMPLATE);
        Self::build(source, config.strict_templates)
    }

    fn build(source: &str, strict: bool) -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(strict);
        registry.register_template_string(FIELD_TEMPLATE_NAME, source)?;
        Ok(Self { registry })
    }
}

impl std::fmt::Debug for HandlebarsTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlebarsTemplate")
            .field("strict", &self.registry.strict_mode())
            .finish()
    }
}

impl Template for HandlebarsTemplate {
    fn execute(&self, field: &FieldDescriptor) -> Result<String, TemplateError> {
        self.registry
            .render(FIELD_TEMPLATE_NAME, field)
            .map_err(Into::into)
    }
}

#[cfg(test)]
#[path = "template/template_tests.rs"]
mod template_tests;
