/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Rendering of citegen templates.
//!
//! One renderer serves every (style, source type) pair. A field that is
//! absent makes its enclosing clause vanish; an absent field outside any
//! clause leaves an empty slot in the skeleton (the degraded output of a
//! missing required field).

pub mod format;
pub mod html;
pub mod plain;

pub use format::OutputFormat;
pub use html::Html;
pub use plain::PlainText;

use crate::values::field_value;
use citegen_core::template::{Rendering, TemplateComponent, WrapPunctuation};
use citegen_core::{CitationStyle, FieldValues};

/// What a template is rendered against.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub style: CitationStyle,
    pub fields: &'a FieldValues,
}

/// Render a template to a finished citation string.
pub fn render_template<F: OutputFormat>(
    template: &[TemplateComponent],
    ctx: &RenderContext<'_>,
) -> String {
    let fmt = F::default();
    template
        .iter()
        .fold(Piece::default(), |output, component| {
            let part = render_component(&fmt, component, ctx)
                .unwrap_or_else(|| empty_slot(&fmt, component));
            output.then(part)
        })
        .finish()
}

/// Rendered text, with the byte lengths of template text at either end.
///
/// Only those ends are ever trimmed; field text in between is kept as
/// supplied.
#[derive(Debug, Default, Clone, PartialEq)]
struct Piece {
    text: String,
    head: usize,
    tail: usize,
}

impl Piece {
    fn literal(text: String) -> Self {
        let len = text.len();
        Self {
            text,
            head: len,
            tail: len,
        }
    }

    /// Field text, or markup wrapped around it.
    fn content(text: String) -> Self {
        Self {
            text,
            head: 0,
            tail: 0,
        }
    }

    fn is_literal(&self) -> bool {
        self.head == self.text.len()
    }

    fn then(mut self, mut next: Piece) -> Self {
        tidy_joint(&mut self, &mut next);
        let head = if self.is_literal() {
            self.text.len() + next.head
        } else {
            self.head
        };
        let tail = if next.is_literal() {
            next.text.len() + self.tail
        } else {
            next.tail
        };
        self.text.push_str(&next.text);
        self.head = head;
        self.tail = tail;
        self
    }

    fn trim_tail(&mut self, len: usize) {
        self.text.truncate(self.text.len() - len);
        self.tail -= len;
        self.head = self.head.min(self.text.len());
    }

    fn trim_head(&mut self, len: usize) {
        self.text.drain(..len);
        self.head -= len;
        self.tail = self.tail.min(self.text.len());
    }

    /// Drop separators left at the start by a missing leading field, and
    /// trailing whitespace.
    fn finish(mut self) -> String {
        let head = &self.text[..self.head];
        let orphaned = head.len() - head.trim_start_matches(is_leading_junk).len();
        self.trim_head(orphaned);

        let tail = &self.text[self.text.len() - self.tail..];
        let trailing = tail.len() - tail.trim_end().len();
        self.trim_tail(trailing);
        self.text
    }
}

fn is_leading_junk(c: char) -> bool {
    c.is_whitespace() || matches!(c, '.' | ',' | ';' | ':')
}

enum Joint {
    TrimLeft(usize),
    TrimRight,
    Done,
}

/// Resolve punctuation collisions where two pieces meet, such as an empty
/// slot's ", " before a terminal period or an edition ending in "ed."
/// followed by one.
fn tidy_joint(left: &mut Piece, right: &mut Piece) {
    loop {
        let joint = {
            let tail = &left.text[left.text.len() - left.tail..];
            let head = &right.text[..right.head];
            let trimmed = tail.trim_end_matches(' ');
            match (trimmed.chars().last(), head.chars().next()) {
                // ", ." and ". ." keep the later mark, ", ," keeps one comma.
                (Some(sep), Some(next @ ('.' | ',')))
                    if matches!(sep, ',' | ':' | ';' | '.') && (next == '.' || sep == ',') =>
                {
                    Joint::TrimLeft(tail.len() - trimmed.len() + 1)
                }
                (None, Some('.'))
                    if left
                        .text
                        .trim_end_matches(' ')
                        .ends_with(['.', '?', '!']) =>
                {
                    Joint::TrimRight
                }
                _ if tail.ends_with(' ') && head.starts_with(' ') => Joint::TrimRight,
                _ => Joint::Done,
            }
        };
        match joint {
            Joint::TrimLeft(len) => left.trim_tail(len),
            Joint::TrimRight => right.trim_head(1),
            Joint::Done => return,
        }
    }
}

/// Render one component, or `None` when a field it depends on is absent.
fn render_component<F: OutputFormat>(
    fmt: &F,
    component: &TemplateComponent,
    ctx: &RenderContext<'_>,
) -> Option<Piece> {
    match component {
        TemplateComponent::Text(t) => Some(apply_rendering(
            fmt,
            &t.rendering,
            Piece::literal(fmt.text(&t.text)),
        )),
        TemplateComponent::Field(f) => {
            let content = match field_value(ctx.fields, f.field, f.form, ctx.style) {
                Some(value) => Piece::content(fmt.text(&value)),
                None => render_component(fmt, f.fallback.as_deref()?, ctx)?,
            };
            Some(apply_rendering(fmt, &f.rendering, content))
        }
        TemplateComponent::Clause(c) => {
            if !c.requires.iter().all(|field| ctx.fields.contains(*field)) {
                return None;
            }
            let items = c
                .clause
                .iter()
                .map(|item| render_component(fmt, item, ctx))
                .collect::<Option<Vec<_>>>()?;
            let content = items.into_iter().fold(Piece::default(), Piece::then);
            Some(apply_rendering(fmt, &c.rendering, content))
        }
    }
}

/// A missing top-level component keeps its punctuation around an empty value.
fn empty_slot<F: OutputFormat>(fmt: &F, component: &TemplateComponent) -> Piece {
    match component {
        TemplateComponent::Field(f) => apply_rendering(fmt, &f.rendering, Piece::default()),
        _ => Piece::default(),
    }
}

fn apply_rendering<F: OutputFormat>(fmt: &F, rendering: &Rendering, content: Piece) -> Piece {
    let prefix = rendering.prefix.as_deref().unwrap_or_default();
    let suffix = rendering.suffix.as_deref().unwrap_or_default();
    let inner_prefix = rendering.inner_prefix.as_deref().unwrap_or_default();
    let inner_suffix = rendering.inner_suffix.as_deref().unwrap_or_default();
    let wrap = rendering.wrap.unwrap_or_default();

    let mut output = content;

    // Order of application:
    // 1. Emphasis
    // 2. Inner affixes
    // 3. Wrap
    // 4. Outer affixes
    if rendering.emph == Some(true) {
        output = Piece::content(fmt.emph(output.text));
    }

    if !inner_prefix.is_empty() || !inner_suffix.is_empty() {
        output = affix(fmt, inner_prefix, output, inner_suffix);
    }

    if wrap != WrapPunctuation::None {
        output = Piece::content(fmt.wrap_punctuation(&wrap, output.text));
    }

    if !prefix.is_empty() || !suffix.is_empty() {
        output = affix(fmt, prefix, output, suffix);
    }

    output
}

fn affix<F: OutputFormat>(fmt: &F, prefix: &str, content: Piece, suffix: &str) -> Piece {
    Piece::literal(fmt.text(prefix))
        .then(content)
        .then(Piece::literal(fmt.text(suffix)))
}
