//! Media blocks wrapping a style fragment.

use std::fmt;

use super::MediaQuery;

/// A style fragment wrapped in an `@media` rule.
///
/// The fragment can be anything that implements [`fmt::Display`]: a `&str`,
/// a `String`, or another `MediaBlock`. It is written into the block exactly
/// once and is never inspected, trimmed or escaped.
///
/// # Example
///
/// ```rust
/// use styled_media_queries::{MediaFeature, MediaQuery};
///
/// let block = MediaQuery::screen()
///     .and(MediaFeature::MinWidth(768.0))
///     .wrap("color: red;");
/// assert_eq!(
///     block.to_string(),
///     "@media screen and (min-width: 768px) { color: red; }"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MediaBlock<S> {
    query: MediaQuery,
    styles: S,
}

impl<S: fmt::Display> MediaBlock<S> {
    pub fn new(query: MediaQuery, styles: S) -> Self {
        Self { query, styles }
    }

    pub fn query(&self) -> &MediaQuery {
        &self.query
    }

    pub fn styles(&self) -> &S {
        &self.styles
    }

    /// Consumes the block, returning the wrapped fragment.
    pub fn into_styles(self) -> S {
        self.styles
    }
}

impl<S: fmt::Display> fmt::Display for MediaBlock<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@media {} {{ {} }}", self.query, self.styles)
    }
}

impl<S: fmt::Display> From<MediaBlock<S>> for String {
    fn from(block: MediaBlock<S>) -> Self {
        block.to_string()
    }
}
