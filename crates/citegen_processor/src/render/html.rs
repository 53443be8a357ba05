/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! HTML output format.

use super::format::OutputFormat;
use citegen_core::template::WrapPunctuation;

#[derive(Debug, Default, Clone)]
pub struct Html;

impl OutputFormat for Html {
    fn text(&self, s: &str) -> String {
        escape(s)
    }

    fn emph(&self, content: String) -> String {
        if content.is_empty() {
            return content;
        }
        format!("<i>{}</i>", content)
    }

    fn wrap_punctuation(&self, wrap: &WrapPunctuation, content: String) -> String {
        match wrap {
            WrapPunctuation::Parentheses => format!("({})", content),
            WrapPunctuation::Brackets => format!("[{}]", content),
            WrapPunctuation::Quotes => format!("&ldquo;{}&rdquo;", content),
            WrapPunctuation::None => content,
        }
    }
}

/// Escapes for element content, where double quotes need no escaping.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_text() {
        let fmt = Html;
        let out = fmt.emph(fmt.text("<Rust> & \"You\""));
        assert_eq!(out, "<i>&lt;Rust&gt; &amp; \"You\"</i>");
    }

    #[test]
    fn test_quotes_use_entities() {
        let fmt = Html;
        let out = fmt.wrap_punctuation(&WrapPunctuation::Quotes, fmt.text("Title."));
        assert_eq!(out, "&ldquo;Title.&rdquo;");
    }
}
