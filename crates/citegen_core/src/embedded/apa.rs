/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! APA 7th edition reference-list templates.

use crate::{
    tc_clause, tc_field, tc_text,
    template::{Template, WrapPunctuation},
};

/// Renders as: Smith, J. (2023). *Learning Rust* (2nd ed.). O'Reilly.
pub fn book() -> Template {
    vec![
        tc_field!(Author, Author, suffix = " "),
        tc_field!(Year, Plain, wrap = WrapPunctuation::Parentheses, suffix = ". "),
        tc_field!(Title, Plain, emph = true),
        tc_clause!(
            [tc_field!(Edition, Plain, wrap = WrapPunctuation::Parentheses)],
            prefix = " "
        ),
        tc_text!(". "),
        tc_field!(Publisher, Plain, suffix = "."),
    ]
}

/// Renders as: Doe, J. (2022). Systems design. *ACM Queue*, *21*(3), 45-60. https://doi.org/xxx
pub fn journal_article() -> Template {
    vec![
        tc_field!(Author, Author, suffix = " "),
        tc_field!(Year, Plain, wrap = WrapPunctuation::Parentheses, suffix = ". "),
        tc_field!(Title, Plain, suffix = ". "),
        tc_field!(Journal, Plain, emph = true),
        tc_clause!([tc_field!(Volume, Plain, emph = true)], prefix = ", "),
        tc_clause!([tc_field!(Issue, Plain, wrap = WrapPunctuation::Parentheses)]),
        tc_clause!([tc_field!(Pages, Plain)], prefix = ", "),
        tc_text!("."),
        tc_clause!([tc_field!(Doi, Doi)], prefix = " "),
    ]
}

/// Falls back to the site name for the author and to "n.d." for the date;
/// the site name is repeated after the title only when an author was given.
///
/// Renders as: rust-lang.org (n.d.). *Rust Book*. Retrieved January 15, 2024, from https://...
pub fn website() -> Template {
    vec![
        tc_field!(Author, Author, fallback = tc_field!(Website, Plain), suffix = " "),
        tc_field!(
            PublishDate,
            Date,
            fallback = tc_text!("n.d."),
            wrap = WrapPunctuation::Parentheses,
            suffix = ". "
        ),
        tc_field!(Title, Plain, emph = true, suffix = "."),
        tc_clause!(
            [tc_field!(Website, Plain)],
            requires = [Author],
            prefix = " ",
            suffix = "."
        ),
        tc_text!(" Retrieved "),
        tc_field!(AccessDate, Date),
        tc_text!(", from "),
        tc_field!(Url, Plain),
    ]
}

/// Renders as: Creator, A. (March 5, 2021). *Title* [Video]. YouTube. https://...
pub fn video() -> Template {
    vec![
        tc_field!(Author, Author, fallback = tc_field!(Platform, Plain), suffix = " "),
        tc_field!(PublishDate, Date, wrap = WrapPunctuation::Parentheses, suffix = ". "),
        tc_field!(Title, Plain, emph = true),
        tc_text!(
            "Video",
            prefix = " ",
            wrap = WrapPunctuation::Brackets,
            suffix = "."
        ),
        tc_clause!(
            [tc_field!(Platform, Plain)],
            requires = [Author],
            prefix = " ",
            suffix = "."
        ),
        tc_field!(Url, Plain, prefix = " "),
    ]
}

/// Renders as: Lee, K. (2019). *Title* [Doctoral dissertation, MIT]. ProQuest. https://...
pub fn thesis() -> Template {
    vec![
        tc_field!(Author, Author, suffix = " "),
        tc_field!(Year, Plain, wrap = WrapPunctuation::Parentheses, suffix = ". "),
        tc_field!(Title, Plain, emph = true),
        tc_clause!(
            [
                tc_field!(ThesisType, Plain, suffix = ", "),
                tc_field!(Institution, Plain)
            ],
            prefix = " ",
            wrap = WrapPunctuation::Brackets
        ),
        tc_text!("."),
        tc_clause!([tc_field!(Database, Plain)], prefix = " ", suffix = "."),
        tc_clause!([tc_field!(Url, Plain)], prefix = " "),
    ]
}

/// Renders as: Brown, T. (June 2, 2020). Title. *The Guardian*, A4. https://...
pub fn newspaper_article() -> Template {
    vec![
        tc_field!(Author, Author, suffix = " "),
        tc_field!(PublishDate, Date, wrap = WrapPunctuation::Parentheses, suffix = ". "),
        tc_field!(Title, Plain, suffix = ". "),
        tc_field!(Newspaper, Plain, emph = true),
        tc_clause!([tc_field!(Pages, Plain)], prefix = ", "),
        tc_text!("."),
        tc_clause!([tc_field!(Url, Plain)], prefix = " "),
    ]
}

/// Renders as: Kim, S. (2021). Title. In *Proceedings of X* (pp. 1-10). ACM. https://doi.org/xxx
pub fn conference_paper() -> Template {
    vec![
        tc_field!(Author, Author, suffix = " "),
        tc_field!(Year, Plain, wrap = WrapPunctuation::Parentheses, suffix = ". "),
        tc_field!(Title, Plain, suffix = ". "),
        tc_field!(Conference, Plain, emph = true, prefix = "In "),
        tc_clause!([tc_field!(Pages, Plain)], prefix = " (pp. ", suffix = ")"),
        tc_text!("."),
        tc_clause!([tc_field!(Publisher, Plain)], prefix = " ", suffix = "."),
        tc_clause!([tc_field!(Doi, Doi)], prefix = " "),
    ]
}
