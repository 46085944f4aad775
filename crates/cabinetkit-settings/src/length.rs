//! Lenient length values
//!
//! Project files are often written by hand or exported from a form, so a
//! length may arrive as `600`, `600.0`, `"600"` or `"600mm"`. Anything that
//! cannot be read is kept as [`Length::Invalid`] so that sanitizing can
//! report it and substitute the default instead of rejecting the file.

use cabinetkit_core::{parse_length, parse_length_list};
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A length in millimetres, or the raw text that failed to parse
#[derive(Debug, Clone, PartialEq)]
pub enum Length {
    Mm(f64),
    Invalid(String),
}

impl Length {
    pub const fn mm(value: f64) -> Self {
        Length::Mm(value)
    }

    /// Millimetre value; unparsed input reads as zero
    pub fn value(&self) -> f64 {
        match self {
            Length::Mm(v) if v.is_finite() => *v,
            _ => 0.0,
        }
    }

    /// True for finite, non-negative values
    pub fn is_usable(&self) -> bool {
        matches!(self, Length::Mm(v) if v.is_finite() && *v >= 0.0)
    }

    pub fn raw(&self) -> String {
        match self {
            Length::Mm(v) => v.to_string(),
            Length::Invalid(raw) => raw.clone(),
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Length::Mm(0.0)
    }
}

impl From<f64> for Length {
    fn from(value: f64) -> Self {
        Length::Mm(value)
    }
}

impl From<&str> for Length {
    fn from(value: &str) -> Self {
        match parse_length(value) {
            Ok(v) => Length::Mm(v),
            Err(_) => Length::Invalid(value.to_string()),
        }
    }
}

impl Serialize for Length {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Length::Mm(v) => serializer.serialize_f64(*v),
            Length::Invalid(raw) => serializer.serialize_str(raw),
        }
    }
}

struct LengthVisitor;

impl<'de> Visitor<'de> for LengthVisitor {
    type Value = Length;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number of millimetres or a string such as \"600mm\"")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Length, E> {
        Ok(Length::Mm(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Length, E> {
        Ok(Length::Mm(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Length, E> {
        Ok(Length::Mm(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Length, E> {
        Ok(Length::from(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Length, E> {
        Ok(Length::Invalid(String::new()))
    }
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LengthVisitor)
    }
}

/// An ordered list of requested widths
///
/// Accepts an array of lengths or a single comma separated string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LengthList(pub Vec<Length>);

impl LengthList {
    pub fn from_mm(values: &[f64]) -> Self {
        LengthList(values.iter().copied().map(Length::Mm).collect())
    }

    /// Millimetre values of the usable entries
    pub fn values(&self) -> Vec<f64> {
        self.0
            .iter()
            .filter(|l| l.is_usable())
            .map(Length::value)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for LengthList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

struct LengthListVisitor;

impl<'de> Visitor<'de> for LengthListVisitor {
    type Value = LengthList;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a list of lengths or a comma separated string")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<LengthList, A::Error> {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element::<Length>()? {
            items.push(item);
        }
        Ok(LengthList(items))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<LengthList, E> {
        match parse_length_list(v) {
            Ok(values) => Ok(LengthList::from_mm(&values)),
            // Keep the readable items and mark the rest, one entry per item
            Err(_) => Ok(LengthList(
                v.split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(Length::from)
                    .collect(),
            )),
        }
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<LengthList, E> {
        Ok(LengthList(vec![Length::Mm(v as f64)]))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<LengthList, E> {
        Ok(LengthList(vec![Length::Mm(v as f64)]))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<LengthList, E> {
        Ok(LengthList(vec![Length::Mm(v)]))
    }
}

impl<'de> Deserialize<'de> for LengthList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LengthListVisitor)
    }
}
