/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! MLA 9th edition works-cited templates.

use crate::{
    tc_clause, tc_field, tc_text,
    template::{Template, TemplateComponent, WrapPunctuation},
};

/// A quoted title with its period inside the quotes: `"Title."`
fn quoted_title() -> TemplateComponent {
    tc_field!(
        Title,
        Plain,
        inner_suffix = ".",
        wrap = WrapPunctuation::Quotes
    )
}

/// Renders as: Smith, John. *Learning Rust*. 2nd ed., O'Reilly, 2023.
pub fn book() -> Template {
    vec![
        tc_field!(Author, Author, suffix = ". "),
        tc_field!(Title, Plain, emph = true, suffix = "."),
        tc_clause!([tc_field!(Edition, Plain)], prefix = " ", suffix = ","),
        tc_field!(Publisher, Plain, prefix = " ", suffix = ", "),
        tc_field!(Year, Plain, suffix = "."),
    ]
}

/// Renders as: Doe, Jane. "Systems Design." *ACM Queue*, vol. 21, no. 3, 2022, pp. 45-60.
pub fn journal_article() -> Template {
    vec![
        tc_field!(Author, Author, suffix = ". "),
        quoted_title(),
        tc_field!(Journal, Plain, emph = true, prefix = " "),
        tc_clause!([tc_field!(Volume, Plain)], prefix = ", vol. "),
        tc_clause!([tc_field!(Issue, Plain)], prefix = ", no. "),
        tc_field!(Year, Plain, prefix = ", "),
        tc_clause!([tc_field!(Pages, Plain)], prefix = ", pp. "),
        tc_text!("."),
        tc_clause!([tc_field!(Doi, Doi)], prefix = " ", suffix = "."),
    ]
}

/// Renders as: "Rust Book." *rust-lang.org*, https://... Accessed 15 Jan. 2024.
pub fn website() -> Template {
    vec![
        tc_clause!([tc_field!(Author, Author)], suffix = ". "),
        quoted_title(),
        tc_field!(Website, Plain, emph = true, prefix = " "),
        tc_clause!([tc_field!(PublishDate, Date)], prefix = ", "),
        tc_field!(Url, Plain, prefix = ", ", suffix = "."),
        tc_field!(AccessDate, Date, prefix = " Accessed ", suffix = "."),
    ]
}

/// Renders as: Creator. "Title." *YouTube*, 5 Mar. 2021, https://...
pub fn video() -> Template {
    vec![
        tc_clause!([tc_field!(Author, Author)], suffix = ". "),
        quoted_title(),
        tc_field!(Platform, Plain, emph = true, prefix = " "),
        tc_field!(PublishDate, Date, prefix = ", "),
        tc_field!(Url, Plain, prefix = ", ", suffix = "."),
    ]
}

/// Renders as: Lee, Kim. *Title*. 2019. MIT, Doctoral dissertation.
pub fn thesis() -> Template {
    vec![
        tc_field!(Author, Author, suffix = ". "),
        tc_field!(Title, Plain, emph = true, suffix = ". "),
        tc_field!(Year, Plain, suffix = ". "),
        tc_field!(Institution, Plain, suffix = ", "),
        tc_field!(ThesisType, Plain, suffix = "."),
        tc_clause!([tc_field!(Url, Plain)], prefix = " ", suffix = "."),
    ]
}

/// Renders as: Brown, Tom. "Title." *The Guardian*, 2 June 2020, p. A4, https://...
pub fn newspaper_article() -> Template {
    vec![
        tc_field!(Author, Author, suffix = ". "),
        quoted_title(),
        tc_field!(Newspaper, Plain, emph = true, prefix = " "),
        tc_field!(PublishDate, Date, prefix = ", "),
        tc_clause!([tc_field!(Pages, Plain)], prefix = ", p. "),
        tc_clause!([tc_field!(Url, Plain)], prefix = ", "),
        tc_text!("."),
    ]
}

/// Renders as: Kim, Soo. "Title." *Proceedings of X*, ACM, 2021, pp. 1-10.
pub fn conference_paper() -> Template {
    vec![
        tc_field!(Author, Author, suffix = ". "),
        quoted_title(),
        tc_field!(Conference, Plain, emph = true, prefix = " "),
        tc_clause!([tc_field!(Publisher, Plain)], prefix = ", "),
        tc_field!(Year, Plain, prefix = ", "),
        tc_clause!([tc_field!(Pages, Plain)], prefix = ", pp. "),
        tc_text!("."),
        tc_clause!([tc_field!(Doi, Doi)], prefix = " ", suffix = "."),
    ]
}
