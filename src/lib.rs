//! # Styled Media Queries
//!
//! Helpers that wrap a style fragment in a CSS media query: width and height
//! breakpoints, aspect ratios, and contrast or motion preferences.
//!
//! ## Quick Start
//!
//! ```rust
//! use styled_media_queries::{breakpoint_between, viewport_width_up, user_prefers_reduced_motion};
//!
//! assert_eq!(
//!     viewport_width_up(768.0, "color: red;").to_string(),
//!     "@media screen and (min-width: 768px) { color: red; }"
//! );
//! assert_eq!(
//!     breakpoint_between(576.0, 768.0, "display: none;").to_string(),
//!     "@media screen and (min-width: 576px) and (max-width: 767.98px) { display: none; }"
//! );
//! assert_eq!(
//!     user_prefers_reduced_motion("animation: none;").to_string(),
//!     "@media (prefers-reduced-motion) { animation: none; }"
//! );
//! ```
//!
//! ## Concepts
//!
//! - [`MediaBlock`]: The returned value. It holds the query and the caller's
//!   fragment, and renders through [`Display`](std::fmt::Display). Any
//!   `Display` type can be a fragment, including another block.
//! - Upper bounds: `*_down` and `*_between` subtract [`BOUNDARY_ADJUSTMENT`]
//!   (0.02px) from the bound, following Bootstrap, so `down(n)` and `up(n)`
//!   never both match.
//! - No validation: thresholds are written out as given. An inverted range or
//!   a zero aspect-ratio height produces a query that never matches, not an error.
//! - [`Breakpoints`]: Optional named breakpoint sets, loadable from YAML or JSON.
//! - [`Renderer`]: The helpers as minijinja filters for stylesheet templates.
//!
//! ## Features
//!
//! - `tracing`: Emits `tracing` debug events when breakpoint files are loaded
//!   and templates are registered.

mod breakpoints;
mod helpers;
mod query;
mod render;
mod util;

pub use breakpoints::{BreakpointError, Breakpoints};
pub use helpers::{
    breakpoint_between, breakpoint_down, breakpoint_up, user_prefers_less_contrast,
    user_prefers_more_contrast, user_prefers_reduced_motion, viewport_height_down,
    viewport_height_up, viewport_max_aspect_ratio, viewport_min_aspect_ratio,
    viewport_width_between, viewport_width_down, viewport_width_up,
};
pub use query::{Contrast, MediaBlock, MediaFeature, MediaQuery, MediaType, BOUNDARY_ADJUSTMENT};
pub use render::{register_filters, render_stylesheet, Renderer};
pub use util::format_number;
