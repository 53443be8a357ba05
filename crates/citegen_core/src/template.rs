/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Template components for citegen styles.
//!
//! Each (style, source type) grammar is an ordered list of components: literal
//! text, field references, and optional clauses. A clause disappears together
//! with its punctuation when any field inside it is absent, so templates never
//! need bespoke conditional concatenation.

use crate::source::Field;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Rendering instructions applied to template components.
///
/// These fields are flattened into parent structs, so in YAML you write:
/// ```yaml
/// - field: title
///   emph: true
///   suffix: ". "
/// ```
/// Rather than nesting under a `rendering:` key.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case", default)]
pub struct Rendering {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emph: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    /// Applied inside any wrapping punctuation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_prefix: Option<String>,
    /// Applied inside any wrapping punctuation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<WrapPunctuation>,
}

/// Punctuation to wrap a component in.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum WrapPunctuation {
    Parentheses,
    Brackets,
    Quotes,
    #[default]
    None,
}

/// Which normalizer a field value passes through before rendering.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum FieldForm {
    /// The trimmed value as supplied.
    #[default]
    Plain,
    /// A "Last, First" author string, shaped by the style.
    Author,
    /// An ISO date, rendered in the style's date form.
    Date,
    /// A DOI, rendered as a resolvable URL.
    Doi,
}

/// A template component - the building blocks of citation templates.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(untagged)]
pub enum TemplateComponent {
    Text(TemplateText),
    Field(TemplateField),
    Clause(TemplateClause),
}

impl TemplateComponent {
    /// Get the rendering options for this component.
    pub fn rendering(&self) -> &Rendering {
        match self {
            TemplateComponent::Text(t) => &t.rendering,
            TemplateComponent::Field(f) => &f.rendering,
            TemplateComponent::Clause(c) => &c.rendering,
        }
    }

    /// Every field this component can read, including fallbacks and clause requirements.
    pub fn fields(&self) -> Vec<Field> {
        let mut out = Vec::new();
        self.collect_fields(&mut out);
        out
    }

    fn collect_fields(&self, out: &mut Vec<Field>) {
        match self {
            TemplateComponent::Text(_) => {}
            TemplateComponent::Field(f) => {
                out.push(f.field);
                if let Some(fallback) = &f.fallback {
                    fallback.collect_fields(out);
                }
            }
            TemplateComponent::Clause(c) => {
                out.extend(c.requires.iter().copied());
                for item in &c.clause {
                    item.collect_fields(out);
                }
            }
        }
    }
}

/// Literal text.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct TemplateText {
    pub text: String,
    #[serde(flatten, default)]
    pub rendering: Rendering,
}

/// A reference to one field.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct TemplateField {
    pub field: Field,
    #[serde(default)]
    pub form: FieldForm,
    /// Rendered in place of the field when it is absent.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fallback: Option<Box<TemplateComponent>>,
    #[serde(flatten, default)]
    pub rendering: Rendering,
}

/// An optional sub-clause.
///
/// Renders only when every field it references, and every field listed in
/// `requires`, is present.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct TemplateClause {
    pub clause: Vec<TemplateComponent>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub requires: Vec<Field>,
    #[serde(flatten, default)]
    pub rendering: Rendering,
}

/// A complete (style, source type) grammar.
pub type Template = Vec<TemplateComponent>;
