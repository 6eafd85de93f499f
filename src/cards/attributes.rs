//! Element attributes.
//!
//! Every monster carries exactly one attribute. Fusion falls back to
//! "same attribute" matching when no exact recipe exists, so the type is a
//! closed enum rather than free text.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Element attribute of a monster card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Attribute {
    #[default]
    Dark,
    Light,
    Water,
    Fire,
    Earth,
    Wind,
    Divine,
}

impl Attribute {
    /// All attributes, in catalog order.
    pub const ALL: [Attribute; 7] = [
        Attribute::Dark,
        Attribute::Light,
        Attribute::Water,
        Attribute::Fire,
        Attribute::Earth,
        Attribute::Wind,
        Attribute::Divine,
    ];

    /// Catalog spelling (upper case).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Attribute::Dark => "DARK",
            Attribute::Light => "LIGHT",
            Attribute::Water => "WATER",
            Attribute::Fire => "FIRE",
            Attribute::Earth => "EARTH",
            Attribute::Wind => "WIND",
            Attribute::Divine => "DIVINE",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an attribute name the catalog does not know.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown attribute: {0}")]
pub struct UnknownAttribute(pub String);

impl FromStr for Attribute {
    type Err = UnknownAttribute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownAttribute(s.to_string()))
    }
}
