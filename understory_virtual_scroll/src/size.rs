// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative per-item size descriptors: pixels, percent of container, and fractions.
//!
//! The text form of a descriptor is a number followed by one of the unit suffixes
//! `px`, `%`, or `fr`, for example `"120px"`, `"25%"`, or `"1.5fr"`. Bounds accept
//! only `px` and `%`.

use core::fmt;
use core::str::FromStr;

use crate::Scalar;

/// Primary size of an item along the scroll axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemSize<S> {
    /// Absolute size in layout units.
    Pixels(S),
    /// Percentage of the container size.
    Percent(S),
    /// Shares of the container space left over after all pixel and percent items.
    Fraction(S),
}

impl<S: Scalar> ItemSize<S> {
    /// Converts a pixel or percent size to layout units.
    ///
    /// Returns `None` for fractions, which can only be resolved against the whole list.
    #[must_use]
    pub fn to_extent(self, container_size: S) -> Option<S> {
        match self {
            Self::Pixels(px) => Some(px),
            Self::Percent(percent) => Some(S::percent_of(percent, container_size)),
            Self::Fraction(_) => None,
        }
    }

    /// Parses the text form, mapping malformed input to `Pixels(0)`.
    ///
    /// A malformed item therefore contributes nothing to the list instead of
    /// failing the whole resolution.
    #[must_use]
    pub fn parse_lenient(text: &str) -> Self {
        match text.parse() {
            Ok(size) => size,
            Err(err) => {
                log::debug!("treating item size {text:?} as zero: {err}");
                Self::Pixels(S::zero())
            }
        }
    }
}

impl<S: Scalar> fmt::Display for ItemSize<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels(v) => write!(f, "{v}px"),
            Self::Percent(v) => write!(f, "{v}%"),
            Self::Fraction(v) => write!(f, "{v}fr"),
        }
    }
}

impl<S: Scalar> FromStr for ItemSize<S> {
    type Err = ParseSizeError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (magnitude, unit) = split_unit(text)?;
        let magnitude = parse_magnitude(magnitude)?;
        Ok(match unit {
            Unit::Pixels => Self::Pixels(magnitude),
            Unit::Percent => Self::Percent(magnitude),
            Unit::Fraction => Self::Fraction(magnitude),
        })
    }
}

/// A `min` or `max` clamp on a resolved item size.
///
/// Bounds cannot be expressed in fractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeBound<S> {
    /// Absolute bound in layout units.
    Pixels(S),
    /// Bound as a percentage of the container size.
    Percent(S),
}

impl<S: Scalar> SizeBound<S> {
    /// Converts the bound to layout units.
    #[must_use]
    pub fn to_extent(self, container_size: S) -> S {
        match self {
            Self::Pixels(px) => px,
            Self::Percent(percent) => S::percent_of(percent, container_size),
        }
    }

    /// Parses the text form, mapping malformed input (including `fr` bounds) to `None`.
    #[must_use]
    pub fn parse_lenient(text: &str) -> Option<Self> {
        match text.parse() {
            Ok(bound) => Some(bound),
            Err(err) => {
                log::debug!("ignoring size bound {text:?}: {err}");
                None
            }
        }
    }
}

impl<S: Scalar> fmt::Display for SizeBound<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels(v) => write!(f, "{v}px"),
            Self::Percent(v) => write!(f, "{v}%"),
        }
    }
}

impl<S: Scalar> FromStr for SizeBound<S> {
    type Err = ParseSizeError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (magnitude, unit) = split_unit(text)?;
        let magnitude = parse_magnitude(magnitude)?;
        match unit {
            Unit::Pixels => Ok(Self::Pixels(magnitude)),
            Unit::Percent => Ok(Self::Percent(magnitude)),
            Unit::Fraction => Err(ParseSizeError::FractionBound),
        }
    }
}

/// Full size descriptor for one item: a primary size plus optional clamps.
///
/// `min` and `max` are checked independently against the pre-clamp size, with
/// `min` taking precedence when both apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeSpec<S> {
    /// Primary size.
    pub value: ItemSize<S>,
    /// Lower clamp, if any.
    pub min: Option<SizeBound<S>>,
    /// Upper clamp, if any.
    pub max: Option<SizeBound<S>>,
}

impl<S: Scalar> SizeSpec<S> {
    /// Creates an unbounded descriptor.
    #[must_use]
    pub const fn new(value: ItemSize<S>) -> Self {
        Self {
            value,
            min: None,
            max: None,
        }
    }

    /// Returns this descriptor with a lower clamp.
    #[must_use]
    pub fn with_min(mut self, min: SizeBound<S>) -> Self {
        self.min = Some(min);
        self
    }

    /// Returns this descriptor with an upper clamp.
    #[must_use]
    pub fn with_max(mut self, max: SizeBound<S>) -> Self {
        self.max = Some(max);
        self
    }

    /// Builds a descriptor from text parts, never failing.
    ///
    /// See [`ItemSize::parse_lenient`] and [`SizeBound::parse_lenient`].
    #[must_use]
    pub fn parse_lenient(value: &str, min: Option<&str>, max: Option<&str>) -> Self {
        Self {
            value: ItemSize::parse_lenient(value),
            min: min.and_then(SizeBound::parse_lenient),
            max: max.and_then(SizeBound::parse_lenient),
        }
    }
}

impl<S: Scalar> From<ItemSize<S>> for SizeSpec<S> {
    fn from(value: ItemSize<S>) -> Self {
        Self::new(value)
    }
}

/// Error returned when strictly parsing a size descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseSizeError {
    /// The input was empty or whitespace.
    #[error("size descriptor is empty")]
    Empty,
    /// The input did not end in `px`, `%`, or `fr`.
    #[error("size descriptor has no `px`, `%`, or `fr` unit")]
    UnknownUnit,
    /// The part before the unit is not a finite number.
    #[error("size descriptor magnitude is not a finite number")]
    InvalidNumber,
    /// A bound was written in `fr`.
    #[error("size bounds cannot use the `fr` unit")]
    FractionBound,
}

#[derive(Clone, Copy)]
enum Unit {
    Pixels,
    Percent,
    Fraction,
}

fn split_unit(text: &str) -> Result<(&str, Unit), ParseSizeError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseSizeError::Empty);
    }
    if let Some(magnitude) = text.strip_suffix("px") {
        Ok((magnitude, Unit::Pixels))
    } else if let Some(magnitude) = text.strip_suffix('%') {
        Ok((magnitude, Unit::Percent))
    } else if let Some(magnitude) = text.strip_suffix("fr") {
        Ok((magnitude, Unit::Fraction))
    } else {
        Err(ParseSizeError::UnknownUnit)
    }
}

fn parse_magnitude<S: Scalar>(text: &str) -> Result<S, ParseSizeError> {
    let value: S = text
        .trim_end()
        .parse()
        .map_err(|_| ParseSizeError::InvalidNumber)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParseSizeError::InvalidNumber)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use alloc::string::String;
    use core::fmt;
    use core::marker::PhantomData;
    use core::str::FromStr;

    use serde::de::{self, IgnoredAny, MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{ItemSize, ParseSizeError, SizeBound, SizeSpec};
    use crate::Scalar;

    struct TextVisitor<T>(PhantomData<T>);

    impl<T: FromStr<Err = ParseSizeError>> Visitor<'_> for TextVisitor<T> {
        type Value = T;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a size such as \"10px\", \"50%\", or \"1fr\"")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
            v.parse().map_err(E::custom)
        }
    }

    impl<S: Scalar> Serialize for ItemSize<S> {
        fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de, S: Scalar> Deserialize<'de> for ItemSize<S> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_str(TextVisitor(PhantomData))
        }
    }

    impl<S: Scalar> Serialize for SizeBound<S> {
        fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de, S: Scalar> Deserialize<'de> for SizeBound<S> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_str(TextVisitor(PhantomData))
        }
    }

    // Unbounded specs use the bare text form; bounded ones use `{ value, min?, max? }`.
    impl<S: Scalar> Serialize for SizeSpec<S> {
        fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
            if self.min.is_none() && self.max.is_none() {
                return serializer.collect_str(&self.value);
            }
            let len = 1 + usize::from(self.min.is_some()) + usize::from(self.max.is_some());
            let mut map = serializer.serialize_map(Some(len))?;
            map.serialize_entry("value", &self.value)?;
            if let Some(min) = &self.min {
                map.serialize_entry("min", min)?;
            }
            if let Some(max) = &self.max {
                map.serialize_entry("max", max)?;
            }
            map.end()
        }
    }

    struct SpecVisitor<S>(PhantomData<S>);

    impl<'de, S: Scalar> Visitor<'de> for SpecVisitor<S> {
        type Value = SizeSpec<S>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a size string or a map with `value` and optional `min`/`max`")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(SizeSpec::new(ItemSize::parse_lenient(v)))
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut value = None;
            let mut min = None;
            let mut max = None;
            while let Some(key) = map.next_key::<String>()? {
                match key.as_str() {
                    "value" => {
                        let text: String = map.next_value()?;
                        value = Some(ItemSize::parse_lenient(&text));
                    }
                    "min" => {
                        let text: Option<String> = map.next_value()?;
                        min = text.as_deref().and_then(SizeBound::parse_lenient);
                    }
                    "max" => {
                        let text: Option<String> = map.next_value()?;
                        max = text.as_deref().and_then(SizeBound::parse_lenient);
                    }
                    _ => {
                        map.next_value::<IgnoredAny>()?;
                    }
                }
            }
            let value = value.ok_or_else(|| <A::Error as de::Error>::missing_field("value"))?;
            Ok(SizeSpec { value, min, max })
        }
    }

    impl<'de, S: Scalar> Deserialize<'de> for SizeSpec<S> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(SpecVisitor(PhantomData))
        }
    }
}
