/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Embedded templates for the supported citation styles.

pub mod apa;
pub mod chicago;
pub mod mla;

use crate::source::SourceType;
use crate::style::CitationStyle;
use crate::template::Template;

/// The template for one (style, source type) pair.
pub fn template(style: CitationStyle, source_type: SourceType) -> Template {
    match (style, source_type) {
        (CitationStyle::Apa7, SourceType::Book) => apa::book(),
        (CitationStyle::Apa7, SourceType::JournalArticle) => apa::journal_article(),
        (CitationStyle::Apa7, SourceType::Website) => apa::website(),
        (CitationStyle::Apa7, SourceType::Video) => apa::video(),
        (CitationStyle::Apa7, SourceType::Thesis) => apa::thesis(),
        (CitationStyle::Apa7, SourceType::NewspaperArticle) => apa::newspaper_article(),
        (CitationStyle::Apa7, SourceType::ConferencePaper) => apa::conference_paper(),
        (CitationStyle::Mla9, SourceType::Book) => mla::book(),
        (CitationStyle::Mla9, SourceType::JournalArticle) => mla::journal_article(),
        (CitationStyle::Mla9, SourceType::Website) => mla::website(),
        (CitationStyle::Mla9, SourceType::Video) => mla::video(),
        (CitationStyle::Mla9, SourceType::Thesis) => mla::thesis(),
        (CitationStyle::Mla9, SourceType::NewspaperArticle) => mla::newspaper_article(),
        (CitationStyle::Mla9, SourceType::ConferencePaper) => mla::conference_paper(),
        (CitationStyle::Chicago17, SourceType::Book) => chicago::book(),
        (CitationStyle::Chicago17, SourceType::JournalArticle) => chicago::journal_article(),
        (CitationStyle::Chicago17, SourceType::Website) => chicago::website(),
        (CitationStyle::Chicago17, SourceType::Video) => chicago::video(),
        (CitationStyle::Chicago17, SourceType::Thesis) => chicago::thesis(),
        (CitationStyle::Chicago17, SourceType::NewspaperArticle) => chicago::newspaper_article(),
        (CitationStyle::Chicago17, SourceType::ConferencePaper) => chicago::conference_paper(),
    }
}

/// All 21 templates, built once and looked up by enum position.
#[derive(Debug, Clone)]
pub struct StyleTemplates {
    table: [[Template; 7]; 3],
}

impl StyleTemplates {
    pub fn embedded() -> Self {
        Self {
            table: CitationStyle::ALL.map(|style| SourceType::ALL.map(|t| template(style, t))),
        }
    }

    pub fn get(&self, style: CitationStyle, source_type: SourceType) -> &Template {
        &self.table[style.index()][source_type.index()]
    }
}

impl Default for StyleTemplates {
    fn default() -> Self {
        Self::embedded()
    }
}
