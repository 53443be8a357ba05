/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The schema registry: the ordered field catalog for each source type.
//!
//! Pure data. Field order is display order for field-collection front ends.

use crate::source::{Field, FieldDescriptor, FieldKind, SourceType};

const AUTHOR: FieldDescriptor =
    FieldDescriptor::required(Field::Author, "Author", FieldKind::Text).with_placeholder("Last, First");
const TITLE: FieldDescriptor = FieldDescriptor::required(Field::Title, "Title", FieldKind::Text);
const YEAR: FieldDescriptor =
    FieldDescriptor::required(Field::Year, "Year", FieldKind::Number).with_placeholder("2023");

const BOOK: &[FieldDescriptor] = &[
    AUTHOR,
    TITLE,
    YEAR,
    FieldDescriptor::required(Field::Publisher, "Publisher", FieldKind::Text),
    FieldDescriptor::optional(Field::City, "City", FieldKind::Text).with_placeholder("New York"),
    FieldDescriptor::optional(Field::Edition, "Edition", FieldKind::Text)
        .with_placeholder("2nd ed."),
];

const JOURNAL_ARTICLE: &[FieldDescriptor] = &[
    AUTHOR,
    TITLE,
    FieldDescriptor::required(Field::Journal, "Journal", FieldKind::Text),
    YEAR,
    FieldDescriptor::optional(Field::Volume, "Volume", FieldKind::Number),
    FieldDescriptor::optional(Field::Issue, "Issue", FieldKind::Number),
    FieldDescriptor::optional(Field::Pages, "Pages", FieldKind::Text).with_placeholder("45-60"),
    FieldDescriptor::optional(Field::Doi, "DOI", FieldKind::Url)
        .with_placeholder("10.1000/xyz123"),
];

const WEBSITE: &[FieldDescriptor] = &[
    FieldDescriptor::optional(Field::Author, "Author", FieldKind::Text)
        .with_placeholder("Last, First"),
    TITLE,
    FieldDescriptor::required(Field::Website, "Website Name", FieldKind::Text),
    FieldDescriptor::required(Field::Url, "URL", FieldKind::Url)
        .with_placeholder("https://example.com"),
    FieldDescriptor::optional(Field::PublishDate, "Publish Date", FieldKind::Date),
    FieldDescriptor::required(Field::AccessDate, "Access Date", FieldKind::Date),
];

const VIDEO: &[FieldDescriptor] = &[
    FieldDescriptor::optional(Field::Author, "Creator", FieldKind::Text)
        .with_placeholder("Channel or creator"),
    TITLE,
    FieldDescriptor::required(Field::Platform, "Platform", FieldKind::Text)
        .with_placeholder("YouTube"),
    FieldDescriptor::required(Field::Url, "URL", FieldKind::Url),
    FieldDescriptor::required(Field::PublishDate, "Publish Date", FieldKind::Date),
];

const THESIS: &[FieldDescriptor] = &[
    AUTHOR,
    TITLE,
    YEAR,
    FieldDescriptor::required(Field::ThesisType, "Thesis Type", FieldKind::Text)
        .with_placeholder("Doctoral dissertation"),
    FieldDescriptor::required(Field::Institution, "Institution", FieldKind::Text),
    FieldDescriptor::optional(Field::Database, "Database", FieldKind::Text)
        .with_placeholder("ProQuest Dissertations and Theses"),
    FieldDescriptor::optional(Field::Url, "URL", FieldKind::Url),
];

const NEWSPAPER_ARTICLE: &[FieldDescriptor] = &[
    AUTHOR,
    TITLE,
    FieldDescriptor::required(Field::Newspaper, "Newspaper", FieldKind::Text),
    FieldDescriptor::required(Field::PublishDate, "Publish Date", FieldKind::Date),
    FieldDescriptor::optional(Field::Pages, "Pages", FieldKind::Text),
    FieldDescriptor::optional(Field::Url, "URL", FieldKind::Url),
];

const CONFERENCE_PAPER: &[FieldDescriptor] = &[
    AUTHOR,
    TITLE,
    FieldDescriptor::required(Field::Conference, "Conference", FieldKind::Text)
        .with_placeholder("Proceedings of the ..."),
    YEAR,
    FieldDescriptor::optional(Field::Location, "Location", FieldKind::Text),
    FieldDescriptor::optional(Field::Publisher, "Publisher", FieldKind::Text),
    FieldDescriptor::optional(Field::Pages, "Pages", FieldKind::Text),
    FieldDescriptor::optional(Field::Doi, "DOI", FieldKind::Url),
];

/// The ordered field descriptors for a source type.
pub fn fields_for(source_type: SourceType) -> &'static [FieldDescriptor] {
    match source_type {
        SourceType::Book => BOOK,
        SourceType::JournalArticle => JOURNAL_ARTICLE,
        SourceType::Website => WEBSITE,
        SourceType::Video => VIDEO,
        SourceType::Thesis => THESIS,
        SourceType::NewspaperArticle => NEWSPAPER_ARTICLE,
        SourceType::ConferencePaper => CONFERENCE_PAPER,
    }
}

/// Looks up one descriptor by field.
pub fn descriptor(source_type: SourceType, field: Field) -> Option<&'static FieldDescriptor> {
    fields_for(source_type).iter().find(|d| d.name == field)
}

/// The required fields of a source type, in schema order.
pub fn required_fields(source_type: SourceType) -> impl Iterator<Item = Field> {
    fields_for(source_type)
        .iter()
        .filter(|d| d.required)
        .map(|d| d.name)
}

/// The optional fields of a source type, in schema order.
pub fn optional_fields(source_type: SourceType) -> impl Iterator<Item = Field> {
    fields_for(source_type)
        .iter()
        .filter(|d| !d.required)
        .map(|d| d.name)
}
