//! Media query helper functions.
//!
//! Each helper takes its threshold(s) and a style fragment and returns the
//! fragment wrapped in a [`MediaBlock`]. Nothing is validated: negative, zero
//! or inverted thresholds are written into the query as given.
//!
//! Upper bounds (`*_down`, `*_between`) subtract [`BOUNDARY_ADJUSTMENT`] so a
//! `down(768)` block never overlaps an `up(768)` block.

use std::fmt::Display;

use crate::query::{Contrast, MediaBlock, MediaFeature, MediaQuery, BOUNDARY_ADJUSTMENT};

/// Applies styles at the given width breakpoint and above.
///
/// # Example
///
/// ```rust
/// use styled_media_queries::viewport_width_up;
///
/// let css = viewport_width_up(768.0, "color: red;").to_string();
/// assert_eq!(css, "@media screen and (min-width: 768px) { color: red; }");
/// ```
pub fn viewport_width_up<S: Display>(breakpoint: f64, styles: S) -> MediaBlock<S> {
    MediaQuery::screen()
        .and(MediaFeature::MinWidth(breakpoint))
        .wrap(styles)
}

/// Alias for [`viewport_width_up`].
pub fn breakpoint_up<S: Display>(breakpoint: f64, styles: S) -> MediaBlock<S> {
    viewport_width_up(breakpoint, styles)
}

/// Applies styles below the given width breakpoint.
///
/// # Example
///
/// ```rust
/// use styled_media_queries::viewport_width_down;
///
/// let css = viewport_width_down(768.0, "color: red;").to_string();
/// assert_eq!(css, "@media screen and (max-width: 767.98px) { color: red; }");
/// ```
pub fn viewport_width_down<S: Display>(breakpoint: f64, styles: S) -> MediaBlock<S> {
    MediaQuery::screen()
        .and(MediaFeature::MaxWidth(breakpoint - BOUNDARY_ADJUSTMENT))
        .wrap(styles)
}

/// Alias for [`viewport_width_down`].
pub fn breakpoint_down<S: Display>(breakpoint: f64, styles: S) -> MediaBlock<S> {
    viewport_width_down(breakpoint, styles)
}

/// Applies styles from `start` up to, but not including, `end`.
///
/// An inverted range produces a query that never matches.
pub fn viewport_width_between<S: Display>(start: f64, end: f64, styles: S) -> MediaBlock<S> {
    MediaQuery::screen()
        .and(MediaFeature::MinWidth(start))
        .and(MediaFeature::MaxWidth(end - BOUNDARY_ADJUSTMENT))
        .wrap(styles)
}

/// Alias for [`viewport_width_between`].
pub fn breakpoint_between<S: Display>(start: f64, end: f64, styles: S) -> MediaBlock<S> {
    viewport_width_between(start, end, styles)
}

/// Applies styles at the given viewport height and above.
pub fn viewport_height_up<S: Display>(height: f64, styles: S) -> MediaBlock<S> {
    MediaQuery::screen()
        .and(MediaFeature::MinHeight(height))
        .wrap(styles)
}

/// Applies styles below the given viewport height.
pub fn viewport_height_down<S: Display>(height: f64, styles: S) -> MediaBlock<S> {
    MediaQuery::screen()
        .and(MediaFeature::MaxHeight(height - BOUNDARY_ADJUSTMENT))
        .wrap(styles)
}

/// Applies styles at the given aspect ratio and wider.
///
/// The ratio is emitted as `width/height` without reduction. A zero height
/// is not guarded against.
pub fn viewport_min_aspect_ratio<S: Display>(
    width: f64,
    height: f64,
    styles: S,
) -> MediaBlock<S> {
    MediaQuery::screen()
        .and(MediaFeature::MinAspectRatio { width, height })
        .wrap(styles)
}

/// Applies styles at the given aspect ratio and narrower.
pub fn viewport_max_aspect_ratio<S: Display>(
    width: f64,
    height: f64,
    styles: S,
) -> MediaBlock<S> {
    MediaQuery::screen()
        .and(MediaFeature::MaxAspectRatio { width, height })
        .wrap(styles)
}

/// Applies styles for users whose settings ask for lower contrast.
pub fn user_prefers_less_contrast<S: Display>(styles: S) -> MediaBlock<S> {
    MediaQuery::any()
        .and(MediaFeature::PrefersContrast(Contrast::Less))
        .wrap(styles)
}

/// Applies styles for users whose settings ask for higher contrast.
pub fn user_prefers_more_contrast<S: Display>(styles: S) -> MediaBlock<S> {
    MediaQuery::any()
        .and(MediaFeature::PrefersContrast(Contrast::More))
        .wrap(styles)
}

/// Applies styles for users whose settings ask for reduced motion.
pub fn user_prefers_reduced_motion<S: Display>(styles: S) -> MediaBlock<S> {
    MediaQuery::any()
        .and(MediaFeature::PrefersReducedMotion)
        .wrap(styles)
}
