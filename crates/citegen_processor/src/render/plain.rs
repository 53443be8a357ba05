/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Plain text output format.
//!
//! Emphasis is marked with asterisks and quotes are straight double quotes,
//! so the output can be pasted anywhere and read as lightweight markup.

use super::format::OutputFormat;
use citegen_core::template::WrapPunctuation;

#[derive(Debug, Default, Clone)]
pub struct PlainText;

impl OutputFormat for PlainText {
    fn text(&self, s: &str) -> String {
        s.to_string()
    }

    fn emph(&self, content: String) -> String {
        if content.is_empty() {
            return content;
        }
        format!("*{}*", content)
    }

    fn wrap_punctuation(&self, wrap: &WrapPunctuation, content: String) -> String {
        match wrap {
            WrapPunctuation::Parentheses => format!("({})", content),
            WrapPunctuation::Brackets => format!("[{}]", content),
            WrapPunctuation::Quotes => format!("\"{}\"", content),
            WrapPunctuation::None => content,
        }
    }
}
