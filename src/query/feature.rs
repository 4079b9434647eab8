//! Individual media features.

use std::fmt;

use crate::util::format_number;

/// Requested contrast level for `prefers-contrast`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contrast {
    Less,
    More,
}

impl fmt::Display for Contrast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Contrast::Less => f.write_str("less"),
            Contrast::More => f.write_str("more"),
        }
    }
}

/// A single condition inside a media query.
///
/// Pixel values are written out exactly as given. `MaxWidth(767.98)` renders
/// `max-width: 767.98px`; subtracting the boundary adjustment is up to the caller.
/// Aspect ratios are not reduced, so `16/10` stays `16/10`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaFeature {
    MinWidth(f64),
    MaxWidth(f64),
    MinHeight(f64),
    MaxHeight(f64),
    MinAspectRatio { width: f64, height: f64 },
    MaxAspectRatio { width: f64, height: f64 },
    PrefersContrast(Contrast),
    /// Boolean feature, rendered without a value.
    PrefersReducedMotion,
}

impl fmt::Display for MediaFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaFeature::MinWidth(px) => write!(f, "min-width: {}px", format_number(*px)),
            MediaFeature::MaxWidth(px) => write!(f, "max-width: {}px", format_number(*px)),
            MediaFeature::MinHeight(px) => write!(f, "min-height: {}px", format_number(*px)),
            MediaFeature::MaxHeight(px) => write!(f, "max-height: {}px", format_number(*px)),
            MediaFeature::MinAspectRatio { width, height } => write!(
                f,
                "min-aspect-ratio: {}/{}",
                format_number(*width),
                format_number(*height)
            ),
            MediaFeature::MaxAspectRatio { width, height } => write!(
                f,
                "max-aspect-ratio: {}/{}",
                format_number(*width),
                format_number(*height)
            ),
            MediaFeature::PrefersContrast(level) => write!(f, "prefers-contrast: {}", level),
            MediaFeature::PrefersReducedMotion => f.write_str("prefers-reduced-motion"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_features() {
        assert_eq!(MediaFeature::MinWidth(768.0).to_string(), "min-width: 768px");
        assert_eq!(MediaFeature::MaxWidth(767.98).to_string(), "max-width: 767.98px");
        assert_eq!(MediaFeature::MinHeight(0.0).to_string(), "min-height: 0px");
        assert_eq!(MediaFeature::MaxHeight(-0.02).to_string(), "max-height: -0.02px");
    }

    #[test]
    fn test_aspect_ratio_is_not_reduced() {
        let feature = MediaFeature::MinAspectRatio {
            width: 16.0,
            height: 10.0,
        };
        assert_eq!(feature.to_string(), "min-aspect-ratio: 16/10");
    }

    #[test]
    fn test_aspect_ratio_zero_height_passes_through() {
        let feature = MediaFeature::MaxAspectRatio {
            width: 3.0,
            height: 0.0,
        };
        assert_eq!(feature.to_string(), "max-aspect-ratio: 3/0");
    }

    #[test]
    fn test_preference_features() {
        assert_eq!(
            MediaFeature::PrefersContrast(Contrast::Less).to_string(),
            "prefers-contrast: less"
        );
        assert_eq!(
            MediaFeature::PrefersContrast(Contrast::More).to_string(),
            "prefers-contrast: more"
        );
        assert_eq!(
            MediaFeature::PrefersReducedMotion.to_string(),
            "prefers-reduced-motion"
        );
    }
}
