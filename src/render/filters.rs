//! MiniJinja filter registration.

use std::sync::Arc;

use minijinja::{Environment, Error, ErrorKind, Value};

use crate::breakpoints::{BreakpointError, Breakpoints};
use crate::helpers::{
    breakpoint_between, breakpoint_down, breakpoint_up, user_prefers_less_contrast,
    user_prefers_more_contrast, user_prefers_reduced_motion, viewport_height_down,
    viewport_height_up, viewport_max_aspect_ratio, viewport_min_aspect_ratio,
    viewport_width_between, viewport_width_down, viewport_width_up,
};
use crate::query::MediaBlock;

/// Registers a filter for every media query helper on a minijinja environment.
///
/// The filtered value is the style fragment. Width thresholds accept either a
/// number or the name of a breakpoint in `breakpoints`; heights and aspect
/// ratios take numbers.
///
/// The output keeps the fragment's escaping state. A fragment marked safe
/// (a `{% filter %}` body, or a value piped through `safe`) yields
/// a safe block. Any other value yields a plain string, which auto-escaping
/// templates escape like `{{ value }}` itself. A `none` or undefined fragment
/// is an error.
///
/// ```text
/// {{ "color: red;" | breakpoint_up("md") }}
/// {% filter viewport_width_between(576, 768) %}display: none;{% endfilter %}
/// ```
pub fn register_filters(env: &mut Environment<'static>, breakpoints: Breakpoints) {
    let breakpoints = Arc::new(breakpoints);

    let bp = Arc::clone(&breakpoints);
    env.add_filter(
        "viewport_width_up",
        move |styles: Value, at: Value| -> Result<Value, Error> {
            Ok(emit(viewport_width_up(threshold(&bp, &at)?, fragment(styles)?)))
        },
    );
    let bp = Arc::clone(&breakpoints);
    env.add_filter(
        "breakpoint_up",
        move |styles: Value, at: Value| -> Result<Value, Error> {
            Ok(emit(breakpoint_up(threshold(&bp, &at)?, fragment(styles)?)))
        },
    );

    let bp = Arc::clone(&breakpoints);
    env.add_filter(
        "viewport_width_down",
        move |styles: Value, at: Value| -> Result<Value, Error> {
            Ok(emit(viewport_width_down(threshold(&bp, &at)?, fragment(styles)?)))
        },
    );
    let bp = Arc::clone(&breakpoints);
    env.add_filter(
        "breakpoint_down",
        move |styles: Value, at: Value| -> Result<Value, Error> {
            Ok(emit(breakpoint_down(threshold(&bp, &at)?, fragment(styles)?)))
        },
    );

    let bp = Arc::clone(&breakpoints);
    env.add_filter(
        "viewport_width_between",
        move |styles: Value, start: Value, end: Value| -> Result<Value, Error> {
            let (start, end) = (threshold(&bp, &start)?, threshold(&bp, &end)?);
            Ok(emit(viewport_width_between(start, end, fragment(styles)?)))
        },
    );
    let bp = Arc::clone(&breakpoints);
    env.add_filter(
        "breakpoint_between",
        move |styles: Value, start: Value, end: Value| -> Result<Value, Error> {
            let (start, end) = (threshold(&bp, &start)?, threshold(&bp, &end)?);
            Ok(emit(breakpoint_between(start, end, fragment(styles)?)))
        },
    );

    let bp = Arc::clone(&breakpoints);
    env.add_filter(
        "breakpoint_only",
        move |styles: Value, name: String| -> Result<Value, Error> {
            bp.only(&name, fragment(styles)?)
                .map(emit)
                .map_err(invalid_operation)
        },
    );

    env.add_filter(
        "viewport_height_up",
        |styles: Value, height: f64| -> Result<Value, Error> {
            Ok(emit(viewport_height_up(height, fragment(styles)?)))
        },
    );
    env.add_filter(
        "viewport_height_down",
        |styles: Value, height: f64| -> Result<Value, Error> {
            Ok(emit(viewport_height_down(height, fragment(styles)?)))
        },
    );

    env.add_filter(
        "viewport_min_aspect_ratio",
        |styles: Value, width: f64, height: f64| -> Result<Value, Error> {
            Ok(emit(viewport_min_aspect_ratio(width, height, fragment(styles)?)))
        },
    );
    env.add_filter(
        "viewport_max_aspect_ratio",
        |styles: Value, width: f64, height: f64| -> Result<Value, Error> {
            Ok(emit(viewport_max_aspect_ratio(width, height, fragment(styles)?)))
        },
    );

    env.add_filter(
        "user_prefers_less_contrast",
        |styles: Value| -> Result<Value, Error> {
            Ok(emit(user_prefers_less_contrast(fragment(styles)?)))
        },
    );
    env.add_filter(
        "user_prefers_more_contrast",
        |styles: Value| -> Result<Value, Error> {
            Ok(emit(user_prefers_more_contrast(fragment(styles)?)))
        },
    );
    env.add_filter(
        "user_prefers_reduced_motion",
        |styles: Value| -> Result<Value, Error> {
            Ok(emit(user_prefers_reduced_motion(fragment(styles)?)))
        },
    );
}

fn fragment(styles: Value) -> Result<Value, Error> {
    if styles.is_none() || styles.is_undefined() {
        return Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("expected a style fragment, got {}", styles.kind()),
        ));
    }
    Ok(styles)
}

fn emit(block: MediaBlock<Value>) -> Value {
    let css = block.to_string();
    if block.styles().is_safe() {
        Value::from_safe_string(css)
    } else {
        Value::from(css)
    }
}

fn threshold(breakpoints: &Breakpoints, value: &Value) -> Result<f64, Error> {
    if let Some(name) = value.as_str() {
        return breakpoints.resolve(name).map_err(invalid_operation);
    }
    f64::try_from(value.clone()).map_err(|_| {
        Error::new(
            ErrorKind::InvalidOperation,
            format!("expected a number or breakpoint name, got {}", value.kind()),
        )
    })
}

fn invalid_operation(err: BreakpointError) -> Error {
    Error::new(ErrorKind::InvalidOperation, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> Environment<'static> {
        let mut env = Environment::new();
        register_filters(&mut env, Breakpoints::bootstrap());
        env
    }

    fn render(source: &str) -> Result<String, Error> {
        env().render_str(source, minijinja::context! {})
    }

    fn render_html(source: &str, styles: &str) -> Result<String, Error> {
        let mut env = env();
        env.add_template_owned("page.html".to_string(), source.to_string())?;
        env.get_template("page.html")?
            .render(minijinja::context! { styles => styles })
    }

    #[test]
    fn test_numeric_and_named_thresholds_agree() {
        let numeric = render(r#"{{ "color: red;" | viewport_width_up(768) }}"#).unwrap();
        let named = render(r#"{{ "color: red;" | viewport_width_up("md") }}"#).unwrap();
        assert_eq!(numeric, "@media screen and (min-width: 768px) { color: red; }");
        assert_eq!(numeric, named);
    }

    #[test]
    fn test_down_and_between_filters() {
        assert_eq!(
            render(r#"{{ "a: b;" | breakpoint_down("md") }}"#).unwrap(),
            "@media screen and (max-width: 767.98px) { a: b; }"
        );
        assert_eq!(
            render(r#"{{ "a: b;" | breakpoint_between("sm", 768) }}"#).unwrap(),
            "@media screen and (min-width: 576px) and (max-width: 767.98px) { a: b; }"
        );
    }

    #[test]
    fn test_only_filter() {
        assert_eq!(
            render(r#"{{ "a: b;" | breakpoint_only("lg") }}"#).unwrap(),
            "@media screen and (min-width: 992px) and (max-width: 1199.98px) { a: b; }"
        );
    }

    #[test]
    fn test_height_and_aspect_filters() {
        assert_eq!(
            render(r#"{{ "a: b;" | viewport_height_down(0) }}"#).unwrap(),
            "@media screen and (max-height: -0.02px) { a: b; }"
        );
        assert_eq!(
            render(r#"{{ "a: b;" | viewport_min_aspect_ratio(16, 9) }}"#).unwrap(),
            "@media screen and (min-aspect-ratio: 16/9) { a: b; }"
        );
    }

    #[test]
    fn test_preference_filters() {
        assert_eq!(
            render(r#"{{ "a: b;" | user_prefers_reduced_motion }}"#).unwrap(),
            "@media (prefers-reduced-motion) { a: b; }"
        );
        assert_eq!(
            render(r#"{{ "a: b;" | user_prefers_more_contrast }}"#).unwrap(),
            "@media (prefers-contrast: more) { a: b; }"
        );
    }

    #[test]
    fn test_filter_block_wraps_body() {
        let out = render(
            r#"{% filter user_prefers_less_contrast %}border: none;{% endfilter %}"#,
        )
        .unwrap();
        assert_eq!(out, "@media (prefers-contrast: less) { border: none; }");
    }

    #[test]
    fn test_unknown_breakpoint_is_error() {
        let err = render(r#"{{ "a: b;" | breakpoint_up("huge") }}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);
        assert!(err.to_string().contains("huge"));
    }

    #[test]
    fn test_non_numeric_threshold_is_error() {
        let err = render(r#"{{ "a: b;" | breakpoint_up([1]) }}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);
    }

    #[test]
    fn test_none_fragment_is_error() {
        let err = render(r#"{{ none | user_prefers_reduced_motion }}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);
        assert!(err.to_string().contains("style fragment"));
    }

    #[test]
    fn test_undefined_fragment_is_error() {
        let err = render(r#"{{ missing | breakpoint_up("md") }}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);
    }

    #[test]
    fn test_unsafe_context_fragment_is_escaped_in_html() {
        let styles = "</style><script>alert(1)</script>";
        let out = render_html("{{ styles | user_prefers_reduced_motion }}", styles).unwrap();
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
        let escaped_first =
            render_html("{{ styles | e | user_prefers_reduced_motion }}", styles).unwrap();
        assert_eq!(out, escaped_first);
    }

    #[test]
    fn test_safe_fragment_stays_raw_in_html() {
        let out =
            render_html("{{ styles | safe | breakpoint_up(768) }}", "a > b { c: d; }").unwrap();
        assert_eq!(out, "@media screen and (min-width: 768px) { a > b { c: d; } }");
    }
}
