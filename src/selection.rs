//! The picked-icon result returned to callers.
//!
//! A [`Selection`] travels as a single `<Style>.<Name>` string, split on the
//! first `.` when decoded. [`PickerResult`] wraps it in the JSON payload a
//! picker hands back:
//!
//! ```json
//! { "icon": "TwoTone.Search" }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::style::IconStyle;

/// A `(style, name)` pair identifying one catalog icon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Selection {
    pub style: IconStyle,
    pub name: String,
}

impl Selection {
    pub fn new(style: IconStyle, name: impl Into<String>) -> Self {
        Self {
            style,
            name: name.into(),
        }
    }

    /// Encodes the selection as `<Style>.<Name>`.
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Decodes `<Style>.<Name>`; the style must be a known one.
    pub fn decode(encoded: &str) -> Result<Self> {
        encoded.parse()
    }

    /// Decodes `<Style>.<Name>`, falling back to [`IconStyle::Filled`] when the
    /// style segment is not recognised.
    ///
    /// A missing separator or an empty name is still an error.
    pub fn decode_lenient(encoded: &str) -> Result<Self> {
        let (tag, name) = split(encoded)?;
        let style = tag.parse::<IconStyle>().unwrap_or_else(|_| {
            tracing::warn!(tag, "unknown style in selection, using Filled");
            IconStyle::Filled
        });
        Ok(Self::new(style, name))
    }
}

fn split(encoded: &str) -> Result<(&str, &str)> {
    match encoded.split_once('.') {
        Some((tag, name)) if !tag.is_empty() && !name.is_empty() => Ok((tag, name)),
        _ => Err(Error::MalformedSelection(encoded.to_string())),
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.style, self.name)
    }
}

impl FromStr for Selection {
    type Err = Error;

    /// Strict decoding: the style segment must name a known style.
    fn from_str(encoded: &str) -> Result<Self> {
        let (tag, name) = split(encoded)?;
        Ok(Self::new(tag.parse()?, name))
    }
}

impl TryFrom<String> for Selection {
    type Error = Error;

    fn try_from(encoded: String) -> Result<Self> {
        encoded.parse()
    }
}

impl From<Selection> for String {
    fn from(selection: Selection) -> Self {
        selection.encode()
    }
}

#[cfg(feature = "jsonschema")]
impl schemars::JsonSchema for Selection {
    fn schema_name() -> String {
        "Selection".to_string()
    }

    fn json_schema(generator: &mut schemars::r#gen::SchemaGenerator) -> schemars::schema::Schema {
        String::json_schema(generator)
    }
}

/// The payload a picker session returns when an icon is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct PickerResult {
    pub icon: Selection,
}

impl PickerResult {
    pub fn new(icon: Selection) -> Self {
        Self { icon }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
