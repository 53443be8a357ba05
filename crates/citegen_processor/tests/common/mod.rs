/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use citegen_core::schema::required_fields;
use citegen_core::{field_values, CitationStyle, FieldValues, SourceType};
use citegen_processor::{Engine, FixedClock, GenerationConfig, SequentialIds};

// --- Fixture data: every schema field filled in ---

pub fn book() -> FieldValues {
    field_values! {
        "author" => "Smith, John",
        "title" => "Learning Rust",
        "year" => 2023,
        "publisher" => "O'Reilly",
        "city" => "New York",
        "edition" => "2nd ed.",
    }
}

pub fn journal_article() -> FieldValues {
    field_values! {
        "author" => "Doe, Jane",
        "title" => "Systems Design",
        "journal" => "ACM Queue",
        "year" => 2022,
        "volume" => 21,
        "issue" => 3,
        "pages" => "45-60",
        "doi" => "10.1145/3434",
    }
}

pub fn website() -> FieldValues {
    field_values! {
        "author" => "Klabnik, Steve",
        "title" => "Rust Book",
        "website" => "rust-lang.org",
        "url" => "https://doc.rust-lang.org/book/",
        "publishDate" => "2023-11",
        "accessDate" => "2024-01-15",
    }
}

pub fn video() -> FieldValues {
    field_values! {
        "author" => "Jon Gjengset",
        "title" => "Crust of Rust: Iterators",
        "platform" => "YouTube",
        "url" => "https://www.youtube.com/watch?v=yozQ9C69pNs",
        "publishDate" => "2021-03-05",
    }
}

pub fn thesis() -> FieldValues {
    field_values! {
        "author" => "Lee, Kim",
        "title" => "Ownership Types for Safe Concurrency",
        "year" => 2019,
        "thesisType" => "Doctoral dissertation",
        "institution" => "MIT",
        "database" => "ProQuest Dissertations",
        "url" => "https://dspace.mit.edu/handle/1721.1/1",
    }
}

pub fn newspaper_article() -> FieldValues {
    field_values! {
        "author" => "Brown, Tom",
        "title" => "Rust Adoption Grows",
        "newspaper" => "The Guardian",
        "publishDate" => "2020-06-02",
        "pages" => "A4",
        "url" => "https://www.theguardian.com/rust",
    }
}

pub fn conference_paper() -> FieldValues {
    field_values! {
        "author" => "Kim, Soo",
        "title" => "Fearless Concurrency",
        "conference" => "Proceedings of PLDI 2021",
        "year" => 2021,
        "location" => "New York",
        "publisher" => "ACM",
        "pages" => "1-10",
        "doi" => "10.1145/1234",
    }
}

/// The full fixture for a source type.
pub fn full(source_type: SourceType) -> FieldValues {
    match source_type {
        SourceType::Book => book(),
        SourceType::JournalArticle => journal_article(),
        SourceType::Website => website(),
        SourceType::Video => video(),
        SourceType::Thesis => thesis(),
        SourceType::NewspaperArticle => newspaper_article(),
        SourceType::ConferencePaper => conference_paper(),
    }
}

/// The full fixture reduced to its required fields.
pub fn required_only(source_type: SourceType) -> FieldValues {
    let all = full(source_type);
    required_fields(source_type)
        .filter_map(|field| {
            all.get(field)
                .map(|value| (field.as_str().to_string(), value.clone()))
        })
        .collect()
}

/// Every (style, source type) pair.
pub fn all_pairs() -> impl Iterator<Item = (CitationStyle, SourceType)> {
    CitationStyle::ALL
        .into_iter()
        .flat_map(|style| SourceType::ALL.into_iter().map(move |st| (style, st)))
}

// --- Engine helpers ---

pub const FIXED_TIME: (i32, u32, u32) = (2024, 1, 15);

pub fn clock() -> FixedClock {
    let (y, m, d) = FIXED_TIME;
    FixedClock(Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap())
}

pub fn engine() -> Engine<SequentialIds, FixedClock> {
    Engine::with_sources(GenerationConfig::default(), SequentialIds::new("c"), clock())
}

pub fn strict_engine() -> Engine<SequentialIds, FixedClock> {
    Engine::with_sources(
        GenerationConfig {
            require_fields: true,
        },
        SequentialIds::new("c"),
        clock(),
    )
}

/// Plain-text citation for a pair.
pub fn format(style: CitationStyle, source_type: SourceType, fields: &FieldValues) -> String {
    engine().format(style, source_type, fields)
}
