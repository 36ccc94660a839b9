//! Coercion of loosely-typed inputs into real numbers.
//!
//! Amounts arrive either as text (user input, files) or as native numbers.
//! Both go through [`ToAmount`], which yields a finite `f64` or a
//! [`DomainError::Conversion`].
//!
//! Accepted text, after trimming surrounding ASCII whitespace:
//!
//! ```text
//! [+-] digits [ "." digits ] [ (e|E) [+-] digits ]
//! [+-] 0x hexdigits
//! ```
//!
//! `digits` may contain single underscores between digits (`1_000`). A dot
//! must have digits on both sides, so `.5` and `1.` are rejected.

use crate::error::{DomainError, DomainResult};

/// Name of the coercion target, used in error messages.
const TARGET: &str = "Float";

/// Conversion of a value into a finite real number.
pub trait ToAmount {
    fn to_amount(&self) -> DomainResult<f64>;
}

fn invalid(shown: &dyn core::fmt::Debug) -> DomainError {
    DomainError::conversion(format!("invalid value for {TARGET}(): {shown:?}"))
}

fn ensure_finite(value: f64, shown: &dyn core::fmt::Debug) -> DomainResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid(shown))
    }
}

/// Digits of `text` with separating underscores removed.
///
/// `None` unless `text` is non-empty, uses only `is_digit` characters and
/// underscores, and every underscore sits between two digits.
fn digits_without_underscores(text: &str, is_digit: fn(char) -> bool) -> Option<String> {
    if text.is_empty() || text.starts_with('_') || text.ends_with('_') || text.contains("__") {
        return None;
    }
    if !text.chars().all(|c| c == '_' || is_digit(c)) {
        return None;
    }
    Some(text.chars().filter(|&c| c != '_').collect())
}

fn split_sign(text: &str) -> (&str, &str) {
    match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.strip_prefix('+').unwrap_or(text)),
    }
}

fn parse_hex(digits: &str) -> Option<f64> {
    let digits = digits_without_underscores(digits, |c| c.is_ascii_hexdigit())?;
    u128::from_str_radix(&digits, 16).ok().map(|v| v as f64)
}

fn parse_decimal(body: &str) -> Option<f64> {
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(at) => (&body[..at], Some(&body[at + 1..])),
        None => (body, None),
    };

    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (mantissa, None),
    };

    let mut literal = digits_without_underscores(int_part, |c| c.is_ascii_digit())?;
    if let Some(frac_part) = frac_part {
        literal.push('.');
        literal.push_str(&digits_without_underscores(frac_part, |c| c.is_ascii_digit())?);
    }
    if let Some(exponent) = exponent {
        let (sign, digits) = split_sign(exponent);
        literal.push('e');
        literal.push_str(sign);
        literal.push_str(&digits_without_underscores(digits, |c| c.is_ascii_digit())?);
    }

    literal.parse().ok()
}

fn parse_literal(text: &str) -> Option<f64> {
    let (sign, body) = split_sign(text);
    let magnitude = match body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        Some(hex) => parse_hex(hex)?,
        None => parse_decimal(body)?,
    };
    Some(if sign == "-" { -magnitude } else { magnitude })
}

impl ToAmount for str {
    fn to_amount(&self) -> DomainResult<f64> {
        let trimmed = self.trim_matches(|c: char| c.is_ascii_whitespace());
        let value = parse_literal(trimmed).ok_or_else(|| invalid(&self))?;
        ensure_finite(value, &self)
    }
}

impl ToAmount for String {
    fn to_amount(&self) -> DomainResult<f64> {
        self.as_str().to_amount()
    }
}

impl<T: ToAmount + ?Sized> ToAmount for &T {
    fn to_amount(&self) -> DomainResult<f64> {
        (**self).to_amount()
    }
}

impl ToAmount for f64 {
    fn to_amount(&self) -> DomainResult<f64> {
        ensure_finite(*self, self)
    }
}

impl ToAmount for f32 {
    fn to_amount(&self) -> DomainResult<f64> {
        ensure_finite(f64::from(*self), self)
    }
}

macro_rules! impl_integer_amount {
    ($($t:ty),* $(,)?) => {
        $(
            impl ToAmount for $t {
                fn to_amount(&self) -> DomainResult<f64> {
                    Ok(*self as f64)
                }
            }
        )*
    };
}

impl_integer_amount!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
