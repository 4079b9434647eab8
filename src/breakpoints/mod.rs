//! Named breakpoint sets.
//!
//! This module provides:
//!
//! - [`Breakpoints`]: A registry of named width breakpoints with a fluent builder API
//! - [`BreakpointError`]: Errors from name lookup and loading
//!
//! A set can be built in code, taken from the Bootstrap defaults, or loaded
//! from a YAML or JSON map of names to pixel values:
//!
//! ```yaml
//! phone: 0
//! tablet: 768
//! desktop: 1200
//! ```
//!
//! Named queries resolve the name and then behave exactly like the numeric
//! helpers. Unknown names are the only failure.

mod error;

pub use error::BreakpointError;

use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::helpers::{viewport_width_between, viewport_width_down, viewport_width_up};
use crate::query::MediaBlock;

/// A named collection of width breakpoints.
///
/// # Example
///
/// ```rust
/// use styled_media_queries::Breakpoints;
///
/// let breakpoints = Breakpoints::bootstrap();
/// let css = breakpoints.only("sm", "display: none;").unwrap().to_string();
/// assert_eq!(
///     css,
///     "@media screen and (min-width: 576px) and (max-width: 767.98px) { display: none; }"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breakpoints {
    values: BTreeMap<String, f64>,
}

impl Breakpoints {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Returns Bootstrap's default breakpoints: `xs`, `sm`, `md`, `lg`, `xl` and `xxl`.
    pub fn bootstrap() -> Self {
        Self::new()
            .add("xs", 0.0)
            .add("sm", 576.0)
            .add("md", 768.0)
            .add("lg", 992.0)
            .add("xl", 1200.0)
            .add("xxl", 1400.0)
    }

    /// Adds a named breakpoint, returning the updated set for chaining.
    ///
    /// Adding an existing name replaces its value.
    pub fn add(mut self, name: &str, px: f64) -> Self {
        self.values.insert(name.to_string(), px);
        self
    }

    /// Parses a YAML map of names to pixel values.
    pub fn from_yaml(source: &str) -> Result<Self, BreakpointError> {
        let set: Self = serde_yaml::from_str(source)?;
        Ok(set)
    }

    /// Parses a JSON object of names to pixel values.
    pub fn from_json(source: &str) -> Result<Self, BreakpointError> {
        let set: Self = serde_json::from_str(source)?;
        Ok(set)
    }

    /// Loads a set from a `.yaml`, `.yml` or `.json` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BreakpointError> {
        let path = path.as_ref();
        let io_error = |message: String| BreakpointError::Io {
            path: path.to_path_buf(),
            message,
        };

        let source = std::fs::read_to_string(path).map_err(|e| io_error(e.to_string()))?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let set = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml(&source)?,
            Some("json") => Self::from_json(&source)?,
            _ => return Err(io_error("unsupported file extension".to_string())),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(path = %path.display(), count = set.len(), "loaded breakpoints");

        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value registered under `name`, if any.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Returns the value registered under `name`, or an error naming it.
    pub fn resolve(&self, name: &str) -> Result<f64, BreakpointError> {
        self.get(name).ok_or_else(|| BreakpointError::Unknown {
            name: name.to_string(),
        })
    }

    /// Iterates over breakpoints in ascending order of value.
    ///
    /// Breakpoints sharing a value are ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self
            .values
            .iter()
            .map(|(name, px)| (name.as_str(), *px))
            .collect();
        entries.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        entries.into_iter()
    }

    /// Returns the breakpoint that follows `name` in ascending order.
    ///
    /// `Ok(None)` means `name` is the largest breakpoint.
    pub fn next_after(&self, name: &str) -> Result<Option<(&str, f64)>, BreakpointError> {
        self.resolve(name)?;
        Ok(self.iter().skip_while(|(n, _)| *n != name).nth(1))
    }

    /// Applies styles at the named breakpoint and above.
    pub fn up<S: Display>(
        &self,
        name: &str,
        styles: S,
    ) -> Result<MediaBlock<S>, BreakpointError> {
        Ok(viewport_width_up(self.resolve(name)?, styles))
    }

    /// Applies styles below the named breakpoint.
    pub fn down<S: Display>(
        &self,
        name: &str,
        styles: S,
    ) -> Result<MediaBlock<S>, BreakpointError> {
        Ok(viewport_width_down(self.resolve(name)?, styles))
    }

    /// Applies styles from `lower` up to, but not including, `upper`.
    pub fn between<S: Display>(
        &self,
        lower: &str,
        upper: &str,
        styles: S,
    ) -> Result<MediaBlock<S>, BreakpointError> {
        let start = self.resolve(lower)?;
        let end = self.resolve(upper)?;
        Ok(viewport_width_between(start, end, styles))
    }

    /// Applies styles only within the named breakpoint's range.
    ///
    /// The range ends at the first breakpoint with a strictly larger value,
    /// so breakpoints sharing a value share a range. When no larger value
    /// exists this is the same as [`up`](Self::up).
    pub fn only<S: Display>(
        &self,
        name: &str,
        styles: S,
    ) -> Result<MediaBlock<S>, BreakpointError> {
        let start = self.resolve(name)?;
        match self.iter().find(|(_, px)| *px > start) {
            Some((_, end)) => Ok(viewport_width_between(start, end, styles)),
            None => Ok(viewport_width_up(start, styles)),
        }
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::bootstrap()
    }
}
