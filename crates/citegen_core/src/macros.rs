/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Declarative macros for the citegen crates.

/// Generates a string-backed enum with `as_str`, an `ALL` table and `FromStr`.
/// Preserves any doc comments and derive macros on the enum and its variants.
#[macro_export]
macro_rules! str_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $val:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            #[doc = "Every variant, in declaration order."]
            pub const ALL: &'static [$name] = &[$( Self::$variant, )+];

            #[doc = "Returns the string value associated with this variant."]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $val, )+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $val => Ok(Self::$variant), )+
                    _ => Err(()),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    }
}

// AST builder macros for the embedded templates and tests.
// These use a quasi-DSL to quickly stamp out TemplateComponents.

/// A literal piece of punctuation or text.
#[macro_export]
macro_rules! tc_text {
    ($text:expr $(, $key:ident = $val:expr)*) => {
        $crate::template::TemplateComponent::Text(
            $crate::template::TemplateText {
                text: $text.to_string(),
                rendering: $crate::template::Rendering {
                    $( $key: Some($val.into()), )*
                    ..Default::default()
                },
            }
        )
    };
}

/// A field reference: `tc_field!(Title, Plain, emph = true)`.
///
/// `fallback = <component>` must come first among the keyed options.
#[macro_export]
macro_rules! tc_field {
    ($field:ident, $form:ident, fallback = $fallback:expr $(, $key:ident = $val:expr)*) => {
        $crate::template::TemplateComponent::Field(
            $crate::template::TemplateField {
                field: $crate::source::Field::$field,
                form: $crate::template::FieldForm::$form,
                fallback: Some(Box::new($fallback)),
                rendering: $crate::template::Rendering {
                    $( $key: Some($val.into()), )*
                    ..Default::default()
                },
            }
        )
    };
    ($field:ident, $form:ident $(, $key:ident = $val:expr)*) => {
        $crate::template::TemplateComponent::Field(
            $crate::template::TemplateField {
                field: $crate::source::Field::$field,
                form: $crate::template::FieldForm::$form,
                fallback: None,
                rendering: $crate::template::Rendering {
                    $( $key: Some($val.into()), )*
                    ..Default::default()
                },
            }
        )
    };
}

/// An optional clause: `tc_clause!([items..], requires = [Author], prefix = " ")`.
///
/// `requires = [..]` must come first among the keyed options.
#[macro_export]
macro_rules! tc_clause {
    ([$($item:expr),* $(,)?], requires = [$($req:ident),* $(,)?] $(, $key:ident = $val:expr)*) => {
        $crate::template::TemplateComponent::Clause(
            $crate::template::TemplateClause {
                clause: vec![$($item),*],
                requires: vec![$($crate::source::Field::$req),*],
                rendering: $crate::template::Rendering {
                    $( $key: Some($val.into()), )*
                    ..Default::default()
                },
            }
        )
    };
    ([$($item:expr),* $(,)?] $(, $key:ident = $val:expr)*) => {
        $crate::template::TemplateComponent::Clause(
            $crate::template::TemplateClause {
                clause: vec![$($item),*],
                requires: Vec::new(),
                rendering: $crate::template::Rendering {
                    $( $key: Some($val.into()), )*
                    ..Default::default()
                },
            }
        )
    };
}

/// Builds a [`FieldValues`](crate::FieldValues) map from `name => value` pairs.
///
/// # Examples
/// ```
/// let fields = citegen_core::field_values! {
///     "author" => "Smith, John",
///     "year" => 2023,
/// };
/// assert_eq!(fields.len(), 2);
/// ```
#[macro_export]
macro_rules! field_values {
    ($($name:expr => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut fields = $crate::FieldValues::new();
        $( fields.insert($name, $value); )*
        fields
    }};
}
