//! The persistence shim for view state: a flat string-keyed
//! parameter set, conceptually the page's URL query string.  Reading
//! is total; anything missing, unparseable, or out of range falls
//! back to the home view, so a mangled URL degrades to the default
//! rendering instead of an error.

use color::SCHEMES;
use num::Complex;
use std::str::FromStr;
use viewport::ViewState;

/// Default world-space center, the classic framing of the whole set.
pub const DEFAULT_X: f64 = -0.5;
/// Default world-space center, imaginary component.
pub const DEFAULT_Y: f64 = 0.0;
/// Default world-space width of the visible region.
pub const DEFAULT_SCALE: f64 = 4.0;
/// Default iteration budget.
pub const DEFAULT_MAX_ITERATIONS: u32 = 50;
/// Default palette index.
pub const DEFAULT_COLOR_SCHEME: u32 = 0;

/// Parses a value, keeping `current` when the string doesn't parse.
fn parse_or<T: FromStr>(value: &str, current: T) -> T {
    match T::from_str(value) {
        Ok(parsed) => parsed,
        Err(_) => current,
    }
}

/// Reads a view state out of a query string such as
/// `x=-0.5&y=0&scale=4&maxIter=50&colorScheme=0`.  A leading `?` is
/// tolerated, unknown keys are ignored, and each missing or invalid
/// value independently falls back to its default.  A non-positive
/// scale or zero budget counts as invalid here: the boundary corrects
/// them so the numeric core never sees them.
pub fn view_from_query(query: &str) -> ViewState {
    let mut x = DEFAULT_X;
    let mut y = DEFAULT_Y;
    let mut scale = DEFAULT_SCALE;
    let mut max_iterations = DEFAULT_MAX_ITERATIONS;
    let mut color_scheme = DEFAULT_COLOR_SCHEME;

    for pair in query.trim_start_matches('?').split('&') {
        let mut parts = pair.splitn(2, '=');
        let key = parts.next();
        let value = parts.next();
        if let (Some(key), Some(value)) = (key, value) {
            match key {
                "x" => x = parse_or(value, x),
                "y" => y = parse_or(value, y),
                "scale" => scale = parse_or(value, scale),
                "maxIter" => max_iterations = parse_or(value, max_iterations),
                "colorScheme" => color_scheme = parse_or(value, color_scheme),
                _ => {}
            }
        }
    }

    if !(scale > 0.0) {
        scale = DEFAULT_SCALE;
    }
    if max_iterations == 0 {
        max_iterations = DEFAULT_MAX_ITERATIONS;
    }
    color_scheme %= SCHEMES.len() as u32;

    ViewState {
        position: Complex::new(x, y),
        scale,
        max_iterations,
        color_scheme,
    }
}

/// Serializes a view state back into the query-string form that
/// `view_from_query` reads, which is how one zoom's result becomes
/// the next page load's starting view.
pub fn view_to_query(view: &ViewState) -> String {
    format!(
        "x={}&y={}&scale={}&maxIter={}&colorScheme={}",
        view.position.re, view.position.im, view.scale, view.max_iterations, view.color_scheme
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_yields_the_home_view() {
        let view = view_from_query("");
        assert_eq!(view.position, Complex::new(-0.5, 0.0));
        assert_eq!(view.scale, 4.0);
        assert_eq!(view.max_iterations, 50);
        assert_eq!(view.color_scheme, 0);
    }

    #[test]
    fn present_keys_override_their_defaults() {
        let view = view_from_query("?x=0.25&scale=0.5&maxIter=200");
        assert_eq!(view.position, Complex::new(0.25, 0.0));
        assert_eq!(view.scale, 0.5);
        assert_eq!(view.max_iterations, 200);
        assert_eq!(view.color_scheme, 0);
    }

    #[test]
    fn garbage_values_fall_back_independently() {
        let view = view_from_query("x=abc&y=0.5&scale=&maxIter=lots");
        assert_eq!(view.position, Complex::new(-0.5, 0.5));
        assert_eq!(view.scale, 4.0);
        assert_eq!(view.max_iterations, 50);
    }

    #[test]
    fn out_of_range_values_are_corrected() {
        assert_eq!(view_from_query("scale=-2").scale, 4.0);
        assert_eq!(view_from_query("scale=0").scale, 4.0);
        assert_eq!(view_from_query("maxIter=0").max_iterations, 50);
    }

    #[test]
    fn scheme_index_wraps_around_the_palette_list() {
        assert_eq!(view_from_query("colorScheme=6").color_scheme, 6);
        assert_eq!(view_from_query("colorScheme=7").color_scheme, 0);
        assert_eq!(view_from_query("colorScheme=9").color_scheme, 2);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let view = view_from_query("zoom=9&x=1.5");
        assert_eq!(view.position.re, 1.5);
    }

    #[test]
    fn serialization_round_trips() {
        let view = view_from_query("x=-0.7435&y=0.1314&scale=0.002&maxIter=500&colorScheme=3");
        assert_eq!(view_from_query(&view_to_query(&view)), view);
    }
}
