/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use crate::{
    tc_clause, tc_field, tc_text,
    template::{Template, TemplateComponent, WrapPunctuation},
};

fn quoted_title() -> TemplateComponent {
    tc_field!(
        Title,
        Plain,
        inner_suffix = ".",
        wrap = WrapPunctuation::Quotes
    )
}

/// Embedded bibliography template for Chicago books.
///
/// Renders as: Smith, John. *Learning Rust*. New York: O'Reilly, 2023.
pub fn book() -> Template {
    vec![
        tc_field!(Author, Author, suffix = ". "),
        tc_field!(Title, Plain, emph = true, suffix = "."),
        tc_clause!([tc_field!(Edition, Plain)], prefix = " ", suffix = "."),
        tc_text!(" "),
        tc_clause!([tc_field!(City, Plain)], suffix = ": "),
        tc_field!(Publisher, Plain, suffix = ", "),
        tc_field!(Year, Plain, suffix = "."),
    ]
}

/// Renders as: Doe, Jane. "Systems Design." *ACM Queue* 21, no. 3 (2022): 45-60.
pub fn journal_article() -> Template {
    vec![
        tc_field!(Author, Author, suffix = ". "),
        quoted_title(),
        tc_field!(Journal, Plain, emph = true, prefix = " "),
        tc_clause!([tc_field!(Volume, Plain)], prefix = " "),
        tc_clause!([tc_field!(Issue, Plain)], prefix = ", no. "),
        tc_field!(Year, Plain, prefix = " (", suffix = ")"),
        tc_clause!([tc_field!(Pages, Plain)], prefix = ": "),
        tc_text!("."),
        tc_clause!([tc_field!(Doi, Doi)], prefix = " ", suffix = "."),
    ]
}

/// Renders as: "Rust Book." rust-lang.org. Accessed January 15, 2024. https://...
pub fn website() -> Template {
    vec![
        tc_clause!([tc_field!(Author, Author)], suffix = ". "),
        quoted_title(),
        tc_field!(Website, Plain, prefix = " ", suffix = "."),
        tc_clause!(
            [tc_field!(PublishDate, Date)],
            prefix = " Published ",
            suffix = "."
        ),
        tc_field!(AccessDate, Date, prefix = " Accessed ", suffix = ". "),
        tc_field!(Url, Plain, suffix = "."),
    ]
}

/// Renders as: Creator. "Title." Video. YouTube, March 5, 2021. https://...
pub fn video() -> Template {
    vec![
        tc_clause!([tc_field!(Author, Author)], suffix = ". "),
        quoted_title(),
        tc_field!(Platform, Plain, prefix = " Video. ", suffix = ", "),
        tc_field!(PublishDate, Date, suffix = ". "),
        tc_field!(Url, Plain, suffix = "."),
    ]
}

/// Renders as: Lee, Kim. "Title." Doctoral dissertation, MIT, 2019.
pub fn thesis() -> Template {
    vec![
        tc_field!(Author, Author, suffix = ". "),
        quoted_title(),
        tc_field!(ThesisType, Plain, prefix = " ", suffix = ", "),
        tc_field!(Institution, Plain, suffix = ", "),
        tc_field!(Year, Plain, suffix = "."),
        tc_clause!([tc_field!(Database, Plain)], prefix = " ", suffix = "."),
        tc_clause!([tc_field!(Url, Plain)], prefix = " ", suffix = "."),
    ]
}

/// Renders as: Brown, Tom. "Title." *The Guardian*, June 2, 2020, A4.
pub fn newspaper_article() -> Template {
    vec![
        tc_field!(Author, Author, suffix = ". "),
        quoted_title(),
        tc_field!(Newspaper, Plain, emph = true, prefix = " "),
        tc_field!(PublishDate, Date, prefix = ", "),
        tc_clause!([tc_field!(Pages, Plain)], prefix = ", "),
        tc_text!("."),
        tc_clause!([tc_field!(Url, Plain)], prefix = " ", suffix = "."),
    ]
}

/// The location is printed only alongside a publisher.
///
/// Renders as: Kim, Soo. "Title." In *Proceedings of X*, 1-10. New York: ACM, 2021.
pub fn conference_paper() -> Template {
    vec![
        tc_field!(Author, Author, suffix = ". "),
        quoted_title(),
        tc_field!(Conference, Plain, emph = true, prefix = " In "),
        tc_clause!([tc_field!(Pages, Plain)], prefix = ", "),
        tc_text!(". "),
        tc_clause!(
            [tc_field!(Location, Plain)],
            requires = [Publisher],
            suffix = ": "
        ),
        tc_clause!([tc_field!(Publisher, Plain)], suffix = ", "),
        tc_field!(Year, Plain, suffix = "."),
        tc_clause!([tc_field!(Doi, Doi)], prefix = " ", suffix = "."),
    ]
}
