//! Lenient float conversion that never fails.
//!
//! [`parse_float_or`] turns anything implementing [`FloatSource`] into an
//! `f64`, substituting a caller-supplied default when the conversion does
//! not work out.

/// Values that may be convertible to `f64`.
pub trait FloatSource {
    /// The converted value, or `None` if this value is not a number.
    fn to_float(&self) -> Option<f64>;
}

/// Convert `value` to `f64`, or return `default` if that fails.
///
/// `default` is itself optional so callers can distinguish "no number"
/// (`None`) from any real fallback value.
///
/// ```
/// use utilkit_core::parse_float_or;
///
/// assert_eq!(parse_float_or("3.14", None), Some(3.14));
/// assert_eq!(parse_float_or("abc", Some(-1.0)), Some(-1.0));
/// assert_eq!(parse_float_or(&None::<&str>, Some(0.0)), Some(0.0));
/// ```
pub fn parse_float_or<V: FloatSource + ?Sized>(value: &V, default: Option<f64>) -> Option<f64> {
    value.to_float().or(default)
}

impl FloatSource for str {
    fn to_float(&self) -> Option<f64> {
        parse_decimal(self)
    }
}

impl FloatSource for String {
    fn to_float(&self) -> Option<f64> {
        parse_decimal(self)
    }
}

impl<T: FloatSource + ?Sized> FloatSource for &T {
    fn to_float(&self) -> Option<f64> {
        (**self).to_float()
    }
}

impl<T: FloatSource> FloatSource for Option<T> {
    fn to_float(&self) -> Option<f64> {
        self.as_ref().and_then(|v| v.to_float())
    }
}

impl FloatSource for bool {
    fn to_float(&self) -> Option<f64> {
        Some(if *self { 1.0 } else { 0.0 })
    }
}

macro_rules! numeric_float_source {
    ($($t:ty),* $(,)?) => {
        $(
            impl FloatSource for $t {
                fn to_float(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

numeric_float_source!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Parse a decimal string the way a human would write it.
///
/// Surrounding whitespace is ignored and single underscores between digits
/// (`1_000.5`) are accepted as group separators.
fn parse_decimal(s: &str) -> Option<f64> {
    let s = s.trim();
    if !s.contains('_') {
        return s.parse().ok();
    }

    let bytes = s.as_bytes();
    let separators_ok = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    if !separators_ok {
        return None;
    }
    s.replace('_', "").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_strings() {
        assert_eq!(parse_float_or("2.75", None), Some(2.75));
        assert_eq!(parse_float_or("-2", None), Some(-2.0));
        assert_eq!(parse_float_or("1e3", None), Some(1000.0));
        assert_eq!(parse_float_or(".5", None), Some(0.5));
        assert_eq!(parse_float_or(&String::from("42"), None), Some(42.0));
    }

    #[test]
    fn test_whitespace_is_ignored() {
        assert_eq!(parse_float_or("  7.25\n", None), Some(7.25));
    }

    #[test]
    fn test_underscore_groups() {
        assert_eq!(parse_float_or("1_000", None), Some(1000.0));
        assert_eq!(parse_float_or("1_000.000_5", None), Some(1000.0005));
        assert_eq!(parse_float_or("_1", Some(-1.0)), Some(-1.0));
        assert_eq!(parse_float_or("1__0", Some(-1.0)), Some(-1.0));
        assert_eq!(parse_float_or("1_", Some(-1.0)), Some(-1.0));
    }

    #[test]
    fn test_special_values() {
        assert!(parse_float_or("inf", None).unwrap().is_infinite());
        assert!(parse_float_or("nan", None).unwrap().is_nan());
    }

    #[test]
    fn test_malformed_uses_default() {
        assert_eq!(parse_float_or("abc", Some(-1.0)), Some(-1.0));
        assert_eq!(parse_float_or("", Some(2.0)), Some(2.0));
        assert_eq!(parse_float_or("1.2.3", None), None);
    }

    #[test]
    fn test_absent_value_uses_default() {
        assert_eq!(parse_float_or(&None::<&str>, Some(0.0)), Some(0.0));
        assert_eq!(parse_float_or(&None::<f64>, None), None);
        assert_eq!(parse_float_or(&Some("8"), Some(0.0)), Some(8.0));
    }

    #[test]
    fn test_numeric_inputs() {
        assert_eq!(parse_float_or(&3u8, None), Some(3.0));
        assert_eq!(parse_float_or(&-12i64, None), Some(-12.0));
        assert_eq!(parse_float_or(&1.5f32, None), Some(1.5));
        assert_eq!(parse_float_or(&true, None), Some(1.0));
        assert_eq!(parse_float_or(&false, None), Some(0.0));
    }
}
