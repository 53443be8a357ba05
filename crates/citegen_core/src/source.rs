/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Source types and the field catalog they draw from.

use crate::error::ParseTagError;
use crate::str_enum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A bibliographic category with its own field schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum SourceType {
    Book,
    JournalArticle,
    Website,
    Video,
    Thesis,
    NewspaperArticle,
    ConferencePaper,
}

impl SourceType {
    /// Every source type, in declaration order.
    pub const ALL: [SourceType; 7] = [
        SourceType::Book,
        SourceType::JournalArticle,
        SourceType::Website,
        SourceType::Video,
        SourceType::Thesis,
        SourceType::NewspaperArticle,
        SourceType::ConferencePaper,
    ];

    /// The serialized tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Book => "book",
            SourceType::JournalArticle => "journal-article",
            SourceType::Website => "website",
            SourceType::Video => "video",
            SourceType::Thesis => "thesis",
            SourceType::NewspaperArticle => "newspaper-article",
            SourceType::ConferencePaper => "conference-paper",
        }
    }

    /// A human-readable label for pickers.
    pub fn label(&self) -> &'static str {
        match self {
            SourceType::Book => "Book",
            SourceType::JournalArticle => "Journal Article",
            SourceType::Website => "Website",
            SourceType::Video => "Video",
            SourceType::Thesis => "Thesis/Dissertation",
            SourceType::NewspaperArticle => "Newspaper Article",
            SourceType::ConferencePaper => "Conference Paper",
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceType {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SourceType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseTagError::UnknownSourceType(s.to_string()))
    }
}

str_enum! {
    /// Every field name used by any source-type schema.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    #[cfg_attr(feature = "schema", derive(JsonSchema))]
    #[serde(rename_all = "camelCase")]
    pub enum Field {
        Author = "author",
        Title = "title",
        Year = "year",
        Publisher = "publisher",
        City = "city",
        Edition = "edition",
        Journal = "journal",
        Volume = "volume",
        Issue = "issue",
        Pages = "pages",
        Doi = "doi",
        Website = "website",
        Url = "url",
        PublishDate = "publishDate",
        AccessDate = "accessDate",
        Platform = "platform",
        Institution = "institution",
        ThesisType = "thesisType",
        Database = "database",
        Newspaper = "newspaper",
        Conference = "conference",
        Location = "location",
    }
}

/// The primitive type a field is collected as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Url,
    Date,
}

/// One typed entry of a source-type schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: Field,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

impl FieldDescriptor {
    pub const fn required(name: Field, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: true,
            placeholder: None,
        }
    }

    pub const fn optional(name: Field, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            placeholder: None,
        }
    }

    pub const fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// The field name as it appears in a [`FieldValues`](crate::FieldValues) map.
    pub fn name(&self) -> &'static str {
        self.name.as_str()
    }
}
