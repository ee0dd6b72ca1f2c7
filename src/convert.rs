//! Typed conversion between scalar text and Rust values.
//!
//! A [`Node`](crate::Node) stores every scalar as its canonical text and parses it on
//! demand. This module holds the two directions of that mapping:
//!
//! - [`FromScalar`]: text → value, used by [`Node::value_as`](crate::Node::value_as)
//! - [`ToScalar`]: value → text, used by the `From` impls on `Node`
//!
//! Numeric parsing is strict and locale independent: the whole text must be consumed,
//! leading or trailing whitespace is rejected, and so is a leading `+`. Boolean parsing
//! is lenient: `"true"` and `"1"` are `true`, everything else is `false`.
//!
//! Types that have no scalar form simply do not implement these traits, so asking for
//! one is a compile error rather than a runtime failure.
//!
//! The module keeps no state; every function is safe to call from any thread.
//!
//! ## Examples
//!
//! ```rust
//! use conftree::convert::{from, to};
//!
//! assert_eq!(to::<u16>("8080").unwrap(), 8080);
//! assert_eq!(from(&2.5f64), "2.5");
//! assert!(to::<bool>("1").unwrap());
//! assert!(!to::<bool>("yes").unwrap());
//! assert!(to::<i32>("12abc").is_err());
//! ```

use crate::{Error, Result};
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use std::any::type_name;
use std::str::FromStr;

/// A type that can be parsed from scalar text.
pub trait FromScalar: Sized {
    /// Parses `text` into `Self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conversion`] naming `text` and the target type when the text
    /// is not a valid representation.
    fn from_scalar(text: &str) -> Result<Self>;
}

/// A type that has a canonical scalar text form.
pub trait ToScalar {
    /// Renders `self` as scalar text.
    fn to_scalar(&self) -> String;
}

/// Parses scalar text into `T`.
///
/// # Errors
///
/// Returns [`Error::Conversion`] when `text` is not a valid `T`.
pub fn to<T: FromScalar>(text: &str) -> Result<T> {
    T::from_scalar(text)
}

/// Renders `value` as scalar text.
#[must_use]
pub fn from<T: ToScalar + ?Sized>(value: &T) -> String {
    value.to_scalar()
}

impl FromScalar for String {
    fn from_scalar(text: &str) -> Result<Self> {
        Ok(text.to_string())
    }
}

impl ToScalar for String {
    fn to_scalar(&self) -> String {
        self.clone()
    }
}

impl ToScalar for str {
    fn to_scalar(&self) -> String {
        self.to_string()
    }
}

impl<T: ToScalar + ?Sized> ToScalar for &T {
    fn to_scalar(&self) -> String {
        (**self).to_scalar()
    }
}

// Anything but "true" or "1" reads as false.
impl FromScalar for bool {
    fn from_scalar(text: &str) -> Result<Self> {
        Ok(text == "true" || text == "1")
    }
}

impl ToScalar for bool {
    fn to_scalar(&self) -> String {
        String::from(if *self { "true" } else { "false" })
    }
}

/// Parses `text` with `FromStr` after rejecting the inputs `FromStr` tolerates but a
/// strict scalar parse must not: an explicit `+` sign and surrounding whitespace.
fn parse_strict<T: FromStr>(text: &str) -> Result<T> {
    let trimmed = text.trim();
    if trimmed.len() != text.len() || text.starts_with('+') {
        return Err(Error::conversion(text, type_name::<T>()));
    }
    text.parse::<T>()
        .map_err(|_| Error::conversion(text, type_name::<T>()))
}

macro_rules! impl_numeric_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromScalar for $ty {
                fn from_scalar(text: &str) -> Result<Self> {
                    parse_strict::<$ty>(text)
                }
            }

            impl ToScalar for $ty {
                fn to_scalar(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_numeric_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl FromScalar for BigInt {
    fn from_scalar(text: &str) -> Result<Self> {
        parse_strict::<BigInt>(text)
    }
}

impl ToScalar for BigInt {
    fn to_scalar(&self) -> String {
        self.to_string()
    }
}

/// RFC 3339 timestamps, normalized to UTC.
impl FromScalar for DateTime<Utc> {
    fn from_scalar(text: &str) -> Result<Self> {
        DateTime::parse_from_rfc3339(text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| Error::conversion(text, type_name::<Self>()))
    }
}

impl ToScalar for DateTime<Utc> {
    fn to_scalar(&self) -> String {
        self.to_rfc3339()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_string_identity() {
        assert_eq!(to::<String>("  spaced  ").unwrap(), "  spaced  ");
        assert_eq!(from("text"), "text");
        assert_eq!(from(&String::from("owned")), "owned");
    }

    #[test]
    fn test_bool_is_lenient() {
        assert!(to::<bool>("true").unwrap());
        assert!(to::<bool>("1").unwrap());
        assert!(!to::<bool>("false").unwrap());
        assert!(!to::<bool>("0").unwrap());
        assert!(!to::<bool>("TRUE").unwrap());
        assert!(!to::<bool>("").unwrap());
        assert_eq!(from(&true), "true");
        assert_eq!(from(&false), "false");
    }

    #[test]
    fn test_integers_consume_whole_text() {
        assert_eq!(to::<i32>("-42").unwrap(), -42);
        assert_eq!(to::<u64>("18446744073709551615").unwrap(), u64::MAX);
        assert!(to::<i32>("42 ").is_err());
        assert!(to::<i32>(" 42").is_err());
        assert!(to::<i32>("+42").is_err());
        assert!(to::<i32>("4.2").is_err());
        assert!(to::<u8>("256").is_err());
        assert!(to::<u8>("-1").is_err());
        assert!(to::<i64>("").is_err());
    }

    #[test]
    fn test_conversion_error_names_target() {
        match to::<u8>("300") {
            Err(Error::Conversion { text, target }) => {
                assert_eq!(text, "300");
                assert_eq!(target, "u8");
            }
            other => panic!("expected conversion error, got {:?}", other),
        }
    }

    #[test]
    fn test_floats() {
        assert_eq!(to::<f64>("3.25").unwrap(), 3.25);
        assert_eq!(to::<f64>("-1e3").unwrap(), -1000.0);
        assert_eq!(to::<f32>("0.5").unwrap(), 0.5);
        assert!(to::<f64>("1.0.0").is_err());
        assert!(to::<f64>("1,5").is_err());
        assert_eq!(from(&0.1f64), "0.1");
        assert_eq!(from(&1.0f64), "1");
        assert_eq!(from(&-0.25f32), "-0.25");
    }

    #[test]
    fn test_bigint() {
        let text = "123456789012345678901234567890";
        let big = to::<BigInt>(text).unwrap();
        assert_eq!(from(&big), text);
        assert!(to::<BigInt>("12x").is_err());
    }

    #[test]
    fn test_datetime() {
        let dt = to::<DateTime<Utc>>("2024-03-01T12:30:00+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap());
        assert_eq!(from(&dt), "2024-03-01T10:30:00+00:00");
        assert!(to::<DateTime<Utc>>("yesterday").is_err());
    }
}
