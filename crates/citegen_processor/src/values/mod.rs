/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Value normalization for template fields.
//!
//! Turns raw field text into the token shape a style requires before the
//! renderer applies punctuation.

pub mod contributor;
pub mod date;

use citegen_core::template::FieldForm;
use citegen_core::{CitationStyle, Field, FieldValues};

pub use contributor::{format_author, format_author_apa, format_author_chicago, format_author_mla};
pub use date::{format_date, format_date_apa, format_date_chicago, format_date_mla};

const DOI_RESOLVER: &str = "https://doi.org/";

/// A DOI rendered as a URL. Values that are already URLs are kept.
pub fn format_doi(raw: &str) -> String {
    let doi = raw.trim();
    if doi.starts_with("https://") || doi.starts_with("http://") {
        return doi.to_string();
    }
    let bare = doi
        .strip_prefix("doi:")
        .or_else(|| doi.strip_prefix("DOI:"))
        .unwrap_or(doi)
        .trim_start();
    format!("{}{}", DOI_RESOLVER, bare)
}

/// The normalized text of a field, or `None` when it is absent.
pub fn field_value(
    fields: &FieldValues,
    field: Field,
    form: FieldForm,
    style: CitationStyle,
) -> Option<String> {
    let raw = fields.text(field)?;
    Some(match form {
        FieldForm::Plain => raw,
        FieldForm::Author => format_author(style, &raw),
        FieldForm::Date => format_date(style, &raw),
        FieldForm::Doi => format_doi(&raw),
    })
}
