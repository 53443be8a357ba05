/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! citegen core data model.
//!
//! Source types and their field schemas, user field values, ISO dates, and
//! the declarative template language with the embedded APA, MLA and Chicago
//! templates. Nothing here has side effects; formatting lives in
//! `citegen_processor`.

pub mod date;
pub mod embedded;
pub mod error;
pub mod fields;
pub mod macros;
pub mod schema;
pub mod source;
pub mod style;
pub mod template;

pub use embedded::StyleTemplates;
pub use error::ParseTagError;
pub use fields::{FieldValue, FieldValues};
pub use schema::fields_for;
pub use source::{Field, FieldDescriptor, FieldKind, SourceType};
pub use style::CitationStyle;
pub use template::{Template, TemplateComponent};
