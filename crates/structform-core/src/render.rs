//! Form rendering: descriptors through a template into markup

use crate::error::{RenderError, RenderResult};
use crate::extract::Extractor;
use crate::field::Field;
use crate::template::Template;
use std::fmt;

/// Markup produced by a template
///
/// Content is whatever the template emitted; escaping is the template's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Html(String);

impl Html {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Html {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Html> for String {
    fn from(html: Html) -> Self {
        html.0
    }
}

impl PartialEq<&str> for Html {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Render `value` with the default extractor
///
/// # Example
///
/// ```ignore
/// let tpl = HandlebarsTemplate::input()?;
/// let html = render(&tpl, &Contact { name: "Kajetan Ka".into(), email: String::new() })?;
/// assert_eq!(html, r#"<input type="text" name="name" value="Kajetan Ka"><input type="text" name="email">"#);
/// ```
pub fn render<T: Field + ?Sized>(template: &dyn Template, value: &T) -> RenderResult<Html> {
    Renderer::default().render(template, value)
}

/// Extracts descriptors and renders each through a template
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    extractor: Extractor,
}

impl Renderer {
    pub fn new(extractor: Extractor) -> Self {
        Self { extractor }
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    /// Render every field of `value`, concatenated in field order
    ///
    /// Stops at the first template failure and returns only the error.
    pub fn render<T: Field + ?Sized>(
        &self,
        template: &dyn Template,
        value: &T,
    ) -> RenderResult<Html> {
        let fields = self.extractor.extract(value)?;
        let mut markup = String::new();
        for field in &fields {
            let fragment = template.execute(field).map_err(|source| {
                tracing::warn!(field = %field.name, error = %source, "template execution failed");
                RenderError::TemplateExecution {
                    field: field.name.clone(),
                    source,
                }
            })?;
            markup.push_str(&fragment);
        }
        tracing::debug!(fields = fields.len(), bytes = markup.len(), "rendered form");
        Ok(Html(markup))
    }
}
