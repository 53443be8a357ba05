/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Author name normalization.
//!
//! Authors arrive as a single free-text string in "Last, First Middle" order.
//! APA reduces the given names to initials; MLA and Chicago trust the input
//! and print it as supplied.

use citegen_core::CitationStyle;

/// Shapes an author string for a style.
pub fn format_author(style: CitationStyle, raw: &str) -> String {
    match style {
        CitationStyle::Apa7 => format_author_apa(raw),
        CitationStyle::Mla9 => format_author_mla(raw),
        CitationStyle::Chicago17 => format_author_chicago(raw),
    }
}

/// `"Last, First Middle"` becomes `"Last, F. M."`.
///
/// Splits on the first comma only. Without a given-name segment the family
/// segment is returned as is.
pub fn format_author_apa(raw: &str) -> String {
    let (family, given) = match raw.split_once(',') {
        Some((family, given)) => (family.trim(), given.trim()),
        None => (raw.trim(), ""),
    };

    if given.is_empty() {
        return family.to_string();
    }

    let initials = given
        .split_whitespace()
        .filter_map(|token| token.chars().next())
        .map(|c| format!("{}.", c.to_uppercase()))
        .collect::<Vec<_>>()
        .join(" ");

    format!("{}, {}", family, initials)
}

pub fn format_author_mla(raw: &str) -> String {
    raw.trim().to_string()
}

pub fn format_author_chicago(raw: &str) -> String {
    raw.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apa_initials() {
        assert_eq!(format_author_apa("Smith, John"), "Smith, J.");
        assert_eq!(format_author_apa("Smith, John Michael"), "Smith, J. M.");
        assert_eq!(format_author_apa("van Gogh,  vincent  willem "), "van Gogh, V. W.");
    }

    #[test]
    fn test_apa_splits_on_first_comma_only() {
        assert_eq!(format_author_apa("King, Martin Luther, Jr."), "King, M. L. J.");
    }

    #[test]
    fn test_apa_without_given_names() {
        assert_eq!(format_author_apa("World Health Organization"), "World Health Organization");
        assert_eq!(format_author_apa("Plato, "), "Plato");
    }

    #[test]
    fn test_mla_and_chicago_pass_through() {
        for style in [CitationStyle::Mla9, CitationStyle::Chicago17] {
            assert_eq!(format_author(style, " Doe, Jane "), "Doe, Jane");
        }
    }
}
