/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use citegen_core::{field_values, CitationStyle, FieldValues, SourceType};
use citegen_processor::Html;

fn mla(source_type: SourceType, fields: &FieldValues) -> String {
    format(CitationStyle::Mla9, source_type, fields)
}

#[test]
fn test_book() {
    assert_eq!(
        mla(SourceType::Book, &book()),
        "Smith, John. *Learning Rust*. 2nd ed., O'Reilly, 2023."
    );
    assert_eq!(
        mla(SourceType::Book, &required_only(SourceType::Book)),
        "Smith, John. *Learning Rust*. O'Reilly, 2023."
    );
}

#[test]
fn test_journal_article() {
    let fields = field_values! {
        "author" => "Doe, Jane",
        "title" => "Systems Design",
        "journal" => "ACM Queue",
        "volume" => 21,
        "issue" => 3,
        "pages" => "45-60",
        "year" => 2022,
    };
    assert_eq!(
        mla(SourceType::JournalArticle, &fields),
        "Doe, Jane. \"Systems Design.\" *ACM Queue*, vol. 21, no. 3, 2022, pp. 45-60."
    );
}

#[test]
fn test_journal_article_with_doi() {
    assert_eq!(
        mla(SourceType::JournalArticle, &journal_article()),
        "Doe, Jane. \"Systems Design.\" *ACM Queue*, vol. 21, no. 3, 2022, pp. 45-60. https://doi.org/10.1145/3434."
    );
    assert_eq!(
        mla(SourceType::JournalArticle, &required_only(SourceType::JournalArticle)),
        "Doe, Jane. \"Systems Design.\" *ACM Queue*, 2022."
    );
}

#[test]
fn test_website() {
    assert_eq!(
        mla(SourceType::Website, &website()),
        "Klabnik, Steve. \"Rust Book.\" *rust-lang.org*, Nov. 2023, https://doc.rust-lang.org/book/. Accessed 15 Jan. 2024."
    );
    assert_eq!(
        mla(SourceType::Website, &required_only(SourceType::Website)),
        "\"Rust Book.\" *rust-lang.org*, https://doc.rust-lang.org/book/. Accessed 15 Jan. 2024."
    );
}

#[test]
fn test_video() {
    assert_eq!(
        mla(SourceType::Video, &video()),
        "Jon Gjengset. \"Crust of Rust: Iterators.\" *YouTube*, 5 Mar. 2021, https://www.youtube.com/watch?v=yozQ9C69pNs."
    );
    assert_eq!(
        mla(SourceType::Video, &required_only(SourceType::Video)),
        "\"Crust of Rust: Iterators.\" *YouTube*, 5 Mar. 2021, https://www.youtube.com/watch?v=yozQ9C69pNs."
    );
}

#[test]
fn test_thesis() {
    assert_eq!(
        mla(SourceType::Thesis, &thesis()),
        "Lee, Kim. *Ownership Types for Safe Concurrency*. 2019. MIT, Doctoral dissertation. https://dspace.mit.edu/handle/1721.1/1."
    );
}

#[test]
fn test_newspaper_article() {
    assert_eq!(
        mla(SourceType::NewspaperArticle, &newspaper_article()),
        "Brown, Tom. \"Rust Adoption Grows.\" *The Guardian*, 2 June 2020, p. A4, https://www.theguardian.com/rust."
    );
    assert_eq!(
        mla(SourceType::NewspaperArticle, &required_only(SourceType::NewspaperArticle)),
        "Brown, Tom. \"Rust Adoption Grows.\" *The Guardian*, 2 June 2020."
    );
}

#[test]
fn test_conference_paper() {
    assert_eq!(
        mla(SourceType::ConferencePaper, &conference_paper()),
        "Kim, Soo. \"Fearless Concurrency.\" *Proceedings of PLDI 2021*, ACM, 2021, pp. 1-10. https://doi.org/10.1145/1234."
    );
    assert_eq!(
        mla(SourceType::ConferencePaper, &required_only(SourceType::ConferencePaper)),
        "Kim, Soo. \"Fearless Concurrency.\" *Proceedings of PLDI 2021*, 2021."
    );
}

#[test]
fn test_question_mark_title_drops_inner_period() {
    let fields = field_values! {
        "title" => "Why Rust?",
        "platform" => "YouTube",
        "url" => "https://youtu.be/x",
        "publishDate" => "2019-09-30",
    };
    assert_eq!(
        mla(SourceType::Video, &fields),
        "\"Why Rust?\" *YouTube*, 30 Sept. 2019, https://youtu.be/x."
    );
}

#[test]
fn test_unparseable_date_passes_through() {
    let fields = newspaper_article().with("publishDate", "Spring 2020");
    assert_eq!(
        mla(SourceType::NewspaperArticle, &fields),
        "Brown, Tom. \"Rust Adoption Grows.\" *The Guardian*, Spring 2020, p. A4, https://www.theguardian.com/rust."
    );
}

#[test]
fn test_html_quotes() {
    let output = engine().format_with::<Html>(
        CitationStyle::Mla9,
        SourceType::JournalArticle,
        &required_only(SourceType::JournalArticle),
    );
    assert_eq!(
        output,
        "Doe, Jane. &ldquo;Systems Design.&rdquo; <i>ACM Queue</i>, 2022."
    );
}
