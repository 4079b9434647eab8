//! Media query model.
//!
//! This module provides the primitives the helpers are built from:
//!
//! - [`MediaFeature`]: A single parenthesized condition such as `min-width: 768px`
//! - [`MediaQuery`]: An optional media type plus features joined by `and`
//! - [`MediaBlock`]: A query wrapped around a caller-supplied style fragment
//!
//! Queries never validate their inputs. Whatever numbers go in are written out.

mod block;
mod feature;

pub use block::MediaBlock;
pub use feature::{Contrast, MediaFeature};

use std::fmt;

/// Amount subtracted from an exclusive upper bound.
///
/// Follows Bootstrap's breakpoint convention so that `max-width` queries stay
/// clear of the matching `min-width` on high-density screens, where the
/// viewport can report fractional widths.
pub const BOUNDARY_ADJUSTMENT: f64 = 0.02;

/// The media type a query is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Screen,
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaType::Screen => f.write_str("screen"),
        }
    }
}

/// The condition part of an `@media` rule.
///
/// # Example
///
/// ```rust
/// use styled_media_queries::{MediaFeature, MediaQuery};
///
/// let query = MediaQuery::screen()
///     .and(MediaFeature::MinWidth(576.0))
///     .and(MediaFeature::MaxWidth(767.98));
/// assert_eq!(
///     query.to_string(),
///     "screen and (min-width: 576px) and (max-width: 767.98px)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MediaQuery {
    media_type: Option<MediaType>,
    features: Vec<MediaFeature>,
}

impl MediaQuery {
    /// Creates a query restricted to screens.
    pub fn screen() -> Self {
        Self {
            media_type: Some(MediaType::Screen),
            features: Vec::new(),
        }
    }

    /// Creates a query with no media type, as used for user preferences.
    pub fn any() -> Self {
        Self {
            media_type: None,
            features: Vec::new(),
        }
    }

    /// Appends a feature, returning the updated query for chaining.
    pub fn and(mut self, feature: MediaFeature) -> Self {
        self.features.push(feature);
        self
    }

    pub fn media_type(&self) -> Option<MediaType> {
        self.media_type
    }

    pub fn features(&self) -> &[MediaFeature] {
        &self.features
    }

    /// Wraps a style fragment in this query.
    pub fn wrap<S: fmt::Display>(self, styles: S) -> MediaBlock<S> {
        MediaBlock::new(self, styles)
    }
}

impl fmt::Display for MediaQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        if let Some(media_type) = self.media_type {
            write!(f, "{}", media_type)?;
            first = false;
        }
        for feature in &self.features {
            if !first {
                f.write_str(" and ")?;
            }
            write!(f, "({})", feature)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_without_features() {
        assert_eq!(MediaQuery::screen().to_string(), "screen");
    }

    #[test]
    fn test_screen_with_single_feature() {
        let query = MediaQuery::screen().and(MediaFeature::MinHeight(600.0));
        assert_eq!(query.to_string(), "screen and (min-height: 600px)");
    }

    #[test]
    fn test_any_with_features_joins_with_and() {
        let query = MediaQuery::any()
            .and(MediaFeature::PrefersReducedMotion)
            .and(MediaFeature::PrefersContrast(Contrast::More));
        assert_eq!(
            query.to_string(),
            "(prefers-reduced-motion) and (prefers-contrast: more)"
        );
    }

    #[test]
    fn test_accessors() {
        let query = MediaQuery::screen().and(MediaFeature::MinWidth(1.0));
        assert_eq!(query.media_type(), Some(MediaType::Screen));
        assert_eq!(query.features(), &[MediaFeature::MinWidth(1.0)]);
        assert_eq!(MediaQuery::any().media_type(), None);
    }
}
