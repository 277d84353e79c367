use crate::ser;
use atoms::JsWord;
use global_common::Span;
use num_bigint::BigUint;
use serde::{
    ser::{SerializeMap, Serializer},
    Serialize,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Lit {
    Str(Str),

    Bool(Bool),

    Null(Null),

    Num(Number),

    BigInt(BigInt),

    Regex(Regex),
}

spanned_enum!(Lit { Str, Bool, Null, Num, BigInt, Regex });

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Literal")]
pub struct Str {
    #[serde(flatten)]
    pub span: Span,

    pub value: JsWord,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<JsWord>,
}

impl Str {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Literal")]
pub struct Bool {
    #[serde(flatten)]
    pub span: Span,

    pub value: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<JsWord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Null {
    pub span: Span,

    pub raw: Option<JsWord>,
}

impl Serialize for Null {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        ser::head(&mut map, "Literal", self.span)?;
        map.serialize_entry("value", &())?;
        if let Some(raw) = &self.raw {
            map.serialize_entry("raw", raw)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Literal")]
pub struct Number {
    #[serde(flatten)]
    pub span: Span,

    /// **Note**: This should not be `NaN`. Use [crate::Ident] to represent
    /// NaN.
    #[serde(serialize_with = "serialize_num_value")]
    pub value: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<JsWord>,
}

/// Integral values print as JSON integers, matching what the reference
/// output looks like after a `JSON.stringify` round trip.
fn serialize_num_value<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    // 2^53; beyond this the integer distinction is meaningless anyway.
    if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// A `123n` literal. Serializes with `value: null` plus the decimal digits
/// in the `bigint` field.
#[derive(Debug, Clone, PartialEq)]
pub struct BigInt {
    pub span: Span,

    pub value: BigUint,

    pub raw: Option<JsWord>,
}

impl Serialize for BigInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        ser::head(&mut map, "Literal", self.span)?;
        map.serialize_entry("value", &())?;
        map.serialize_entry("bigint", &self.value.to_string())?;
        if let Some(raw) = &self.raw {
            map.serialize_entry("raw", raw)?;
        }
        map.end()
    }
}

/// A regex literal. The pattern is not validated beyond flag handling, so
/// `value` serializes as an empty object stand-in.
#[derive(Debug, Clone, PartialEq)]
pub struct Regex {
    pub span: Span,

    pub exp: JsWord,

    pub flags: JsWord,

    pub raw: Option<JsWord>,
}

impl Serialize for Regex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct RegexValue<'a> {
            pattern: &'a JsWord,
            flags: &'a JsWord,
        }

        #[derive(Serialize)]
        struct Empty {}

        let mut map = serializer.serialize_map(None)?;
        ser::head(&mut map, "Literal", self.span)?;
        map.serialize_entry("value", &Empty {})?;
        map.serialize_entry(
            "regex",
            &RegexValue {
                pattern: &self.exp,
                flags: &self.flags,
            },
        )?;
        if let Some(raw) = &self.raw {
            map.serialize_entry("raw", raw)?;
        }
        map.end()
    }
}

spanned!(Str, Bool, Null, Number, BigInt, Regex);
