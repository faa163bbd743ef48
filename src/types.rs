//! Value types rendered as element text or attribute values

use std::io::Write;

use crate::error::Result;

/// A primitive value written as element text or an attribute value
///
/// Conversions exist for the common primitive types, so callers pass plain
/// values and the writer picks the right textual form:
///
/// ```
/// use xmlstream::XmlValue;
///
/// let v: XmlValue = 42i64.into();
/// assert_eq!(v, XmlValue::Int(42));
/// let v: XmlValue = true.into();
/// assert_eq!(v, XmlValue::Bool(true));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum XmlValue<'a> {
    /// String value, written verbatim (no entity escaping)
    Str(&'a str),
    /// Signed integer value, written as decimal digits
    Int(i64),
    /// Unsigned integer value, written as decimal digits
    UInt(u64),
    /// Float value, written in `%g`-style shortest form
    Float(f64),
    /// Boolean value, written as the literal `True` or `False`
    Bool(bool),
}

impl XmlValue<'_> {
    /// Render the textual form of this value into the sink
    pub(crate) fn render_to<W: Write>(&self, sink: &mut W) -> Result<()> {
        match self {
            XmlValue::Str(s) => sink.write_all(s.as_bytes())?,
            XmlValue::Int(v) => {
                let mut buf = itoa::Buffer::new();
                sink.write_all(buf.format(*v).as_bytes())?;
            }
            XmlValue::UInt(v) => {
                let mut buf = itoa::Buffer::new();
                sink.write_all(buf.format(*v).as_bytes())?;
            }
            XmlValue::Float(v) => sink.write_all(format_float(*v).as_bytes())?,
            XmlValue::Bool(v) => sink.write_all(if *v { b"True" } else { b"False" })?,
        }
        Ok(())
    }
}

impl<'a> From<&'a str> for XmlValue<'a> {
    fn from(value: &'a str) -> Self {
        XmlValue::Str(value)
    }
}

impl<'a> From<&'a String> for XmlValue<'a> {
    fn from(value: &'a String) -> Self {
        XmlValue::Str(value)
    }
}

impl From<i32> for XmlValue<'_> {
    fn from(value: i32) -> Self {
        XmlValue::Int(value.into())
    }
}

impl From<i64> for XmlValue<'_> {
    fn from(value: i64) -> Self {
        XmlValue::Int(value)
    }
}

impl From<u32> for XmlValue<'_> {
    fn from(value: u32) -> Self {
        XmlValue::UInt(value.into())
    }
}

impl From<u64> for XmlValue<'_> {
    fn from(value: u64) -> Self {
        XmlValue::UInt(value)
    }
}

impl From<f32> for XmlValue<'_> {
    fn from(value: f32) -> Self {
        XmlValue::Float(value.into())
    }
}

impl From<f64> for XmlValue<'_> {
    fn from(value: f64) -> Self {
        XmlValue::Float(value)
    }
}

impl From<bool> for XmlValue<'_> {
    fn from(value: bool) -> Self {
        XmlValue::Bool(value)
    }
}

/// Number of significant digits for `%g`-style float rendering
const FLOAT_SIG_DIGITS: i32 = 6;

/// Format a float in a pinned `%g`-equivalent style
///
/// Six significant digits; exponential form when the decimal exponent is
/// below -4 or at least 6; trailing zeros and a trailing decimal point are
/// stripped. Zero of either sign renders as `0`; non-finite values use their
/// `Display` form.
pub(crate) fn format_float(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let exp = decimal_exponent(value);
    if exp < -4 || exp >= FLOAT_SIG_DIGITS {
        let rendered = format!("{:.*e}", (FLOAT_SIG_DIGITS - 1) as usize, value);
        trim_exponential(&rendered)
    } else {
        let decimals = (FLOAT_SIG_DIGITS - 1 - exp).max(0) as usize;
        let rendered = format!("{:.*}", decimals, value);
        trim_positional(rendered)
    }
}

/// Decimal exponent of a finite non-zero float
fn decimal_exponent(value: f64) -> i32 {
    let rendered = format!("{value:e}");
    match rendered.split_once('e') {
        Some((_, exp)) => exp.parse().unwrap_or(0),
        None => 0,
    }
}

/// Strip trailing fractional zeros from `1234.5000` style output
fn trim_positional(mut rendered: String) -> String {
    if rendered.contains('.') {
        let trimmed = rendered.trim_end_matches('0').trim_end_matches('.').len();
        rendered.truncate(trimmed);
    }
    rendered
}

/// Strip trailing mantissa zeros from `1.50000e7` style output
fn trim_exponential(rendered: &str) -> String {
    match rendered.split_once('e') {
        Some((mantissa, exp)) => {
            let mantissa = if mantissa.contains('.') {
                mantissa.trim_end_matches('0').trim_end_matches('.')
            } else {
                mantissa
            };
            format!("{mantissa}e{exp}")
        }
        None => rendered.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(value: XmlValue) -> String {
        let mut out = Vec::new();
        value.render_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_integer_rendering() {
        assert_eq!(render(XmlValue::Int(0)), "0");
        assert_eq!(render(XmlValue::Int(-42)), "-42");
        assert_eq!(render(XmlValue::Int(i64::MAX)), "9223372036854775807");
        assert_eq!(render(XmlValue::UInt(7)), "7");
        assert_eq!(render(XmlValue::UInt(u64::MAX)), "18446744073709551615");
    }

    #[test]
    fn test_bool_rendering() {
        assert_eq!(render(XmlValue::Bool(true)), "True");
        assert_eq!(render(XmlValue::Bool(false)), "False");
    }

    #[test]
    fn test_string_rendering_is_verbatim() {
        assert_eq!(render(XmlValue::Str("a<b&c")), "a<b&c");
    }

    #[test]
    fn test_float_positional() {
        assert_eq!(format_float(0.0), "0");
        assert_eq!(format_float(-0.0), "0");
        assert_eq!(format_float(1.5), "1.5");
        assert_eq!(format_float(-42.0), "-42");
        assert_eq!(format_float(0.25), "0.25");
        assert_eq!(format_float(1234.5), "1234.5");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(3.14159265), "3.14159");
    }

    #[test]
    fn test_float_exponential() {
        assert_eq!(format_float(0.00001), "1e-5");
        assert_eq!(format_float(10_000_000.0), "1e7");
        assert_eq!(format_float(123456789.0), "1.23457e8");
        assert_eq!(format_float(-2.5e-7), "-2.5e-7");
    }

    #[test]
    fn test_value_conversions() {
        assert_eq!(XmlValue::from(5i32), XmlValue::Int(5));
        assert_eq!(XmlValue::from(5u32), XmlValue::UInt(5));
        assert_eq!(XmlValue::from(2.5f32), XmlValue::Float(2.5));
        let owned = String::from("text");
        assert_eq!(XmlValue::from(&owned), XmlValue::Str("text"));
    }
}
