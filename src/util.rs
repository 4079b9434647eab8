//! Number formatting for emitted query text.

/// Formats a threshold the way a JavaScript template literal stringifies a number.
///
/// Integral values drop the fractional part, fractional values use the shortest
/// representation that round-trips, and very large or very small magnitudes
/// switch to exponent notation.
///
/// # Example
///
/// ```rust
/// use styled_media_queries::format_number;
///
/// assert_eq!(format_number(768.0), "768");
/// assert_eq!(format_number(768.0 - 0.02), "767.98");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// ```
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let exp = format!("{:e}", n);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        };
    }

    format!("{}", n)
}
