/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Style-specific date rendering.

use citegen_core::date::IsoDate;
use citegen_core::CitationStyle;

/// MLA month abbreviations; short months are spelled out.
const MONTHS_MLA: [&str; 12] = [
    "Jan.", "Feb.", "Mar.", "Apr.", "May", "June", "July", "Aug.", "Sept.", "Oct.", "Nov.",
    "Dec.",
];

/// Renders an ISO date for a style. Text that is not an ISO date is passed through.
pub fn format_date(style: CitationStyle, raw: &str) -> String {
    match style {
        CitationStyle::Apa7 => format_date_apa(raw),
        CitationStyle::Mla9 => format_date_mla(raw),
        CitationStyle::Chicago17 => format_date_chicago(raw),
    }
}

/// `Month D, YYYY`.
pub fn format_date_apa(raw: &str) -> String {
    long_form(raw)
}

/// `D Mon. YYYY`, no comma.
pub fn format_date_mla(raw: &str) -> String {
    let Some(date) = IsoDate::parse(raw) else {
        return raw.trim().to_string();
    };
    let month = date
        .month
        .and_then(|m| MONTHS_MLA.get(m.checked_sub(1)? as usize));

    match (month, date.day) {
        (None, _) => date.year.to_string(),
        (Some(month), None) => format!("{} {}", month, date.year),
        (Some(month), Some(day)) => format!("{} {} {}", day, month, date.year),
    }
}

/// `Month D, YYYY`, the same shape as APA in this engine.
pub fn format_date_chicago(raw: &str) -> String {
    long_form(raw)
}

fn long_form(raw: &str) -> String {
    let Some(date) = IsoDate::parse(raw) else {
        return raw.trim().to_string();
    };

    match (date.month_name(), date.day) {
        (None, _) => date.year.to_string(),
        (Some(month), None) => format!("{} {}", month, date.year),
        (Some(month), Some(day)) => format!("{} {}, {}", month, day, date.year),
    }
}
