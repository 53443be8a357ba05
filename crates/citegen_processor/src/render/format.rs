/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Output format trait for pluggable renderers.

use citegen_core::template::WrapPunctuation;

/// Trait for defining how to render template components into a specific format.
///
/// Implementations of this trait define how formatting instructions
/// (emphasis, wrapping punctuation) are translated into markup or text.
/// Rendered content is a `String` so the renderer can tidy the joints
/// between template punctuation and field text.
pub trait OutputFormat: Default + Clone {
    /// Convert a raw string into the format's output.
    ///
    /// The implementation should handle any character escaping required by
    /// the target format.
    fn text(&self, s: &str) -> String;

    /// Render content with emphasis (typically italics).
    fn emph(&self, content: String) -> String;

    /// Wrap the content in specific punctuation (parentheses, brackets, or quotes).
    fn wrap_punctuation(&self, wrap: &WrapPunctuation, content: String) -> String;
}
