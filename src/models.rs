use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigurationError, Result};

/// Named option overrides, as accepted by guide constructors.
pub type Options = serde_json::Map<String, Value>;

/// Side of the guide box where the title or labels are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Top,
    Bottom,
    Left,
    Right,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Top,
        Position::Bottom,
        Position::Left,
        Position::Right,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Position::Top => "top",
            Position::Bottom => "bottom",
            Position::Left => "left",
            Position::Right => "right",
        }
    }

    /// `true` for `left` and `right`.
    pub fn is_lateral(self) -> bool {
        matches!(self, Position::Left | Position::Right)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "top" => Ok(Position::Top),
            "bottom" => Ok(Position::Bottom),
            "left" => Ok(Position::Left),
            "right" => Ok(Position::Right),
            other => Err(format!("unknown position '{}'", other)),
        }
    }
}

/// Layout axis along which a guide arranges its keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
        }
    }

    /// Whether labels may sit at `position` for a guide laid out in this direction.
    ///
    /// Labels run orthogonal to the guide: a vertical guide takes labels on the
    /// left or right, a horizontal one on the top or bottom.
    pub fn accepts_label_at(self, position: Position) -> bool {
        match self {
            Direction::Vertical => position.is_lateral(),
            Direction::Horizontal => !position.is_lateral(),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Direction::Horizontal),
            "vertical" => Ok(Direction::Vertical),
            other => Err(format!("unknown direction '{}'", other)),
        }
    }
}

/// Horizontal alignment of a guide title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    #[serde(alias = "centre")]
    Center,
    Right,
}

impl Alignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Alignment {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "left" => Ok(Alignment::Left),
            "center" | "centre" => Ok(Alignment::Center),
            "right" => Ok(Alignment::Right),
            other => Err(format!("unknown alignment '{}'", other)),
        }
    }
}

/// Guide title setting.
///
/// Serializes in the shape the `title` option is read: text as a string, a hidden
/// title as `null`. `Derive` has no option form; fields holding it are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Title {
    /// Use the name of the aesthetic (or its label) once it is known.
    #[default]
    Derive,
    /// Draw no title.
    Hidden,
    /// Explicit title text.
    Text(String),
}

impl Title {
    pub fn is_derive(&self) -> bool {
        matches!(self, Title::Derive)
    }

    /// Text to draw, given the aesthetic/label name used when the title is derived.
    pub fn text<'a>(&'a self, fallback: &'a str) -> Option<&'a str> {
        match self {
            Title::Derive => Some(fallback),
            Title::Hidden => None,
            Title::Text(s) => Some(s),
        }
    }
}

impl Serialize for Title {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Title::Text(text) => serializer.serialize_str(text),
            Title::Hidden | Title::Derive => serializer.serialize_none(),
        }
    }
}

/// Text style descriptor for guide titles and labels.
///
/// Every field is optional; unset fields inherit from a parent element
/// (see [`ElementText::inherit`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ElementText {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", alias = "color")]
    pub colour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hjust: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vjust: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lineheight: Option<f64>,
}

impl ElementText {
    /// Fill unset fields from `parent`. Fields set on `self` win.
    pub fn inherit(&self, parent: &ElementText) -> ElementText {
        ElementText {
            family: self.family.clone().or_else(|| parent.family.clone()),
            face: self.face.clone().or_else(|| parent.face.clone()),
            colour: self.colour.clone().or_else(|| parent.colour.clone()),
            size: self.size.or(parent.size),
            hjust: self.hjust.or(parent.hjust),
            vjust: self.vjust.or(parent.vjust),
            angle: self.angle.or(parent.angle),
            lineheight: self.lineheight.or(parent.lineheight),
        }
    }
}

// Option value coercion shared by the guide config and the guide kinds.

pub(crate) fn expect_bool(name: &str, value: &Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| ConfigurationError::invalid_value(name, "a boolean", value))
}

pub(crate) fn expect_int(name: &str, value: &Value) -> Result<i64> {
    value
        .as_i64()
        .ok_or_else(|| ConfigurationError::invalid_value(name, "an integer", value))
}

pub(crate) fn expect_opt_f64(name: &str, value: &Value) -> Result<Option<f64>> {
    if value.is_null() {
        return Ok(None);
    }
    value
        .as_f64()
        .map(Some)
        .ok_or_else(|| ConfigurationError::invalid_value(name, "a number or null", value))
}

pub(crate) fn expect_opt_positive_f64(name: &str, value: &Value) -> Result<Option<f64>> {
    match expect_opt_f64(name, value)? {
        Some(v) if !(v > 0.0 && v.is_finite()) => Err(ConfigurationError::invalid_value(
            name,
            "a positive number or null",
            value,
        )),
        other => Ok(other),
    }
}

pub(crate) fn expect_opt_count(name: &str, value: &Value) -> Result<Option<u32>> {
    if value.is_null() {
        return Ok(None);
    }
    value
        .as_u64()
        .and_then(|v| u32::try_from(v).ok())
        .map(Some)
        .ok_or_else(|| {
            ConfigurationError::invalid_value(name, "a non-negative integer or null", value)
        })
}

pub(crate) fn expect_string(name: &str, value: &Value) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ConfigurationError::invalid_value(name, "a string", value))
}

/// Parse an optional enum-valued option; `null` means unset.
pub(crate) fn expect_opt_parsed<T: FromStr>(
    name: &str,
    value: &Value,
    expected: &str,
) -> Result<Option<T>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => s
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigurationError::invalid_value(name, expected, value)),
        other => Err(ConfigurationError::invalid_value(name, expected, other)),
    }
}

/// Deserialize an optional structured option; `null` means unset.
pub(crate) fn expect_opt_struct<T: DeserializeOwned>(
    name: &str,
    value: &Value,
    expected: &str,
) -> Result<Option<T>> {
    if value.is_null() {
        return Ok(None);
    }
    serde_json::from_value(value.clone())
        .map(Some)
        .map_err(|_| ConfigurationError::invalid_value(name, expected, value))
}
