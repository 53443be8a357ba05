/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use crate::error::ParseTagError;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A citation grammar. Carries no data; it only selects formatting behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum CitationStyle {
    /// APA 7th edition.
    Apa7,
    /// MLA 9th edition.
    Mla9,
    /// Chicago Manual of Style, 17th edition (bibliography entries).
    Chicago17,
}

impl CitationStyle {
    pub const ALL: [CitationStyle; 3] = [
        CitationStyle::Apa7,
        CitationStyle::Mla9,
        CitationStyle::Chicago17,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CitationStyle::Apa7 => "apa7",
            CitationStyle::Mla9 => "mla9",
            CitationStyle::Chicago17 => "chicago17",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CitationStyle::Apa7 => "APA 7th",
            CitationStyle::Mla9 => "MLA 9th",
            CitationStyle::Chicago17 => "Chicago 17th",
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for CitationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CitationStyle {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "apa" | "apa7" => Ok(CitationStyle::Apa7),
            "mla" | "mla9" => Ok(CitationStyle::Mla9),
            "chicago" | "chicago17" => Ok(CitationStyle::Chicago17),
            _ => Err(ParseTagError::UnknownStyle(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_aliases() {
        assert_eq!("APA".parse::<CitationStyle>(), Ok(CitationStyle::Apa7));
        assert_eq!("mla9".parse::<CitationStyle>(), Ok(CitationStyle::Mla9));
        assert_eq!("Chicago".parse::<CitationStyle>(), Ok(CitationStyle::Chicago17));
        assert!(matches!(
            "harvard".parse::<CitationStyle>(),
            Err(ParseTagError::UnknownStyle(tag)) if tag == "harvard"
        ));
    }

    #[test]
    fn test_style_serialization() {
        let json = serde_json::to_string(&CitationStyle::Chicago17).unwrap();
        assert_eq!(json, "\"chicago17\"");
        let style: CitationStyle = serde_json::from_str("\"apa7\"").unwrap();
        assert_eq!(style, CitationStyle::Apa7);
    }
}
