//! Pre-compiled stylesheet renderer.

use minijinja::{Environment, Error};
use serde::Serialize;

use super::filters::register_filters;
use crate::breakpoints::Breakpoints;

/// A renderer with pre-registered stylesheet templates.
///
/// Every template sees the media query filters, with width thresholds resolved
/// against the renderer's breakpoints. Templates are compiled once and reused.
///
/// # Example
///
/// ```rust
/// use styled_media_queries::Renderer;
/// use serde::Serialize;
///
/// let mut renderer = Renderer::new();
/// renderer
///     .add_template("nav", r#"{{ hidden | breakpoint_down("md") }}"#)
///     .unwrap();
///
/// #[derive(Serialize)]
/// struct Nav { hidden: String }
///
/// let css = renderer
///     .render("nav", &Nav { hidden: "display: none;".into() })
///     .unwrap();
/// assert_eq!(css, "@media screen and (max-width: 767.98px) { display: none; }");
/// ```
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Creates a renderer using Bootstrap's breakpoints.
    pub fn new() -> Self {
        Self::with_breakpoints(Breakpoints::bootstrap())
    }

    /// Creates a renderer resolving breakpoint names against `breakpoints`.
    pub fn with_breakpoints(breakpoints: Breakpoints) -> Self {
        let mut env = Environment::new();
        register_filters(&mut env, breakpoints);
        Self { env }
    }

    /// Registers a named template.
    ///
    /// The template is compiled immediately; errors are returned if syntax is invalid.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;

        #[cfg(feature = "tracing")]
        tracing::debug!(template = name, "registered stylesheet template");

        Ok(())
    }

    /// Renders a registered template with the given data.
    ///
    /// # Errors
    ///
    /// Returns an error if the template name is not found, a breakpoint name is
    /// unknown, or rendering fails.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }

    /// Compiles and renders a template in one step.
    pub fn render_str<T: Serialize>(&self, source: &str, data: &T) -> Result<String, Error> {
        self.env.render_str(source, data)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders a stylesheet template once, using Bootstrap's breakpoints.
///
/// For repeated rendering, build a [`Renderer`] instead.
///
/// # Example
///
/// ```rust
/// use styled_media_queries::render_stylesheet;
///
/// let css = render_stylesheet(
///     r#"{{ "animation: none;" | user_prefers_reduced_motion }}"#,
///     &serde_json::json!({}),
/// )
/// .unwrap();
/// assert_eq!(css, "@media (prefers-reduced-motion) { animation: none; }");
/// ```
pub fn render_stylesheet<T: Serialize>(template: &str, data: &T) -> Result<String, Error> {
    Renderer::new().render_str(template, data)
}
