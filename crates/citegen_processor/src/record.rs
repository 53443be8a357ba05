/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Citation records: immutable snapshots of one generation.

use chrono::{DateTime, Utc};
use citegen_core::{CitationStyle, FieldValues, SourceType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque, unique record identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CitationId(String);

impl CitationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CitationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One successful formatting operation.
///
/// Fields are read-only: a record is created by the engine and afterwards
/// only ever kept or dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationRecord {
    id: CitationId,
    source_type: SourceType,
    style: CitationStyle,
    input: FieldValues,
    output: String,
    created_at: DateTime<Utc>,
}

impl CitationRecord {
    pub(crate) fn new(
        id: CitationId,
        source_type: SourceType,
        style: CitationStyle,
        input: FieldValues,
        output: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            source_type,
            style,
            input,
            output,
            created_at,
        }
    }

    pub fn id(&self) -> &CitationId {
        &self.id
    }

    pub fn source_type(&self) -> SourceType {
        self.source_type
    }

    pub fn style(&self) -> CitationStyle {
        self.style
    }

    /// The schema fields supplied at generation time.
    pub fn input(&self) -> &FieldValues {
        &self.input
    }

    /// The rendered citation.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use citegen_core::field_values;

    #[test]
    fn test_json_shape() {
        let record = CitationRecord::new(
            CitationId::new("c-1"),
            SourceType::JournalArticle,
            CitationStyle::Mla9,
            field_values! { "title" => "Systems Design", "volume" => 21 },
            "out".to_string(),
            Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap(),
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "c-1",
                "sourceType": "journal-article",
                "style": "mla9",
                "input": { "title": "Systems Design", "volume": 21 },
                "output": "out",
                "createdAt": "2024-01-15T09:30:00Z"
            })
        );
        let back: CitationRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
