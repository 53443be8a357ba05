/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use citegen_core::{field_values, CitationStyle, SourceType};
use citegen_processor::Engine;
use proptest::prelude::*;

#[test]
fn test_same_input_same_output() {
    let engine = Engine::default();
    for (style, source_type) in all_pairs() {
        let fields = full(source_type);
        let first = engine.format(style, source_type, &fields);
        let second = engine.format(style, source_type, &fields);
        assert_eq!(first, second, "{style}/{source_type}");
    }
}

#[test]
fn test_generate_output_matches_format() {
    let mut engine = engine();
    for (style, source_type) in all_pairs() {
        let fields = full(source_type);
        let record = engine.generate(style, source_type, &fields).unwrap();
        assert_eq!(record.output(), engine.format(style, source_type, &fields));
        assert_eq!(record.style(), style);
        assert_eq!(record.source_type(), source_type);
    }
}

#[test]
fn test_field_order_does_not_matter() {
    let forward = field_values! {
        "author" => "Smith, John",
        "title" => "Learning Rust",
        "year" => 2023,
        "publisher" => "O'Reilly",
    };
    let backward = field_values! {
        "publisher" => "O'Reilly",
        "year" => 2023,
        "title" => "Learning Rust",
        "author" => "Smith, John",
    };
    for style in CitationStyle::ALL {
        assert_eq!(
            format(style, SourceType::Book, &forward),
            format(style, SourceType::Book, &backward)
        );
    }
}

#[test]
fn test_year_as_text_or_number() {
    let numeric = book();
    let textual = book().with("year", "2023");
    for style in CitationStyle::ALL {
        assert_eq!(
            format(style, SourceType::Book, &numeric),
            format(style, SourceType::Book, &textual)
        );
    }
}

#[test]
fn test_surrounding_whitespace_is_ignored() {
    let padded = book().with("publisher", "  O'Reilly  ").with("title", " Learning Rust");
    assert_eq!(
        format(CitationStyle::Apa7, SourceType::Book, &padded),
        format(CitationStyle::Apa7, SourceType::Book, &book())
    );
}

proptest! {
    #[test]
    fn prop_format_is_pure(title in "[A-Za-z][A-Za-z ]{0,30}", year in 1900i64..2100) {
        let engine = Engine::default();
        let fields = book().with("title", title.as_str()).with("year", year);
        for style in CitationStyle::ALL {
            let first = engine.format(style, SourceType::Book, &fields);
            let second = engine.format(style, SourceType::Book, &fields);
            prop_assert_eq!(&first, &second);
            prop_assert!(first.contains(&year.to_string()));
        }
    }
}
