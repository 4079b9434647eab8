//! Stylesheet templating.
//!
//! The media query helpers are exposed to minijinja templates as filters, so
//! a stylesheet template can wrap any fragment in a query:
//!
//! ```text
//! {{ sidebar | breakpoint_up("lg") }}
//! {% filter user_prefers_reduced_motion %}animation: none;{% endfilter %}
//! ```
//!
//! - [`register_filters`]: Installs the filters on an existing environment
//! - [`Renderer`]: Pre-compiled templates with the filters installed
//! - [`render_stylesheet`]: One-shot rendering

mod filters;
mod renderer;

pub use filters::register_filters;
pub use renderer::{render_stylesheet, Renderer};
