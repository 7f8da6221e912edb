//! Icon style namespaces.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Root namespace shared by every bundled catalog entry.
pub const NAMESPACE: &str = "icons";

/// One of the fixed visual variants under which icon names are grouped.
///
/// Serializes as the display name (`"TwoTone"`); parsing also accepts the
/// lower-cased namespace (`"twotone"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum IconStyle {
    #[default]
    Filled,
    Outlined,
    Rounded,
    Sharp,
    TwoTone,
}

impl IconStyle {
    /// Every style, in filter-menu order.
    pub const ALL: [IconStyle; 5] = [
        IconStyle::Filled,
        IconStyle::Outlined,
        IconStyle::Rounded,
        IconStyle::Sharp,
        IconStyle::TwoTone,
    ];

    /// The display name used in selections (`"TwoTone"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Filled => "Filled",
            Self::Outlined => "Outlined",
            Self::Rounded => "Rounded",
            Self::Sharp => "Sharp",
            Self::TwoTone => "TwoTone",
        }
    }

    /// The lower-cased namespace segment (`"twotone"`).
    pub const fn namespace(self) -> &'static str {
        match self {
            Self::Filled => "filled",
            Self::Outlined => "outlined",
            Self::Rounded => "rounded",
            Self::Sharp => "sharp",
            Self::TwoTone => "twotone",
        }
    }

    /// The catalog path prefix for this style, e.g. `"icons.twotone."`.
    pub fn namespace_prefix(self) -> String {
        format!("{NAMESPACE}.{}.", self.namespace())
    }

    /// Position of this style in [`IconStyle::ALL`].
    pub(crate) const fn ordinal(self) -> usize {
        self as usize
    }
}

impl fmt::Display for IconStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconStyle {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| {
                tag.eq_ignore_ascii_case(style.as_str())
                    || tag.eq_ignore_ascii_case(style.namespace())
            })
            .ok_or_else(|| Error::UnknownStyle(tag.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_first_variant() {
        assert_eq!(IconStyle::default(), IconStyle::ALL[0]);
        assert_eq!(IconStyle::default(), IconStyle::Filled);
    }

    #[test]
    fn parses_display_and_namespace_forms() {
        assert_eq!("TwoTone".parse::<IconStyle>().unwrap(), IconStyle::TwoTone);
        assert_eq!("twotone".parse::<IconStyle>().unwrap(), IconStyle::TwoTone);
        assert_eq!("SHARP".parse::<IconStyle>().unwrap(), IconStyle::Sharp);
    }

    #[test]
    fn unknown_tag_is_an_error() {
        let err = "Glossy".parse::<IconStyle>().unwrap_err();
        assert!(matches!(err, Error::UnknownStyle(tag) if tag == "Glossy"));
    }

    #[test]
    fn namespace_prefix_ends_with_separator() {
        assert_eq!(IconStyle::Outlined.namespace_prefix(), "icons.outlined.");
    }

    #[test]
    fn ordinals_match_all_order() {
        for (i, style) in IconStyle::ALL.into_iter().enumerate() {
            assert_eq!(style.ordinal(), i);
        }
    }

    #[test]
    fn serializes_as_display_name() {
        let json = serde_json::to_string(&IconStyle::TwoTone).unwrap();
        assert_eq!(json, "\"TwoTone\"");
    }
}
