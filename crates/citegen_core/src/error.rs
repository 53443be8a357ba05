/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use thiserror::Error;

/// A source-type or style tag outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTagError {
    #[error("unknown source type: {0}")]
    UnknownSourceType(String),

    #[error("citation style not supported: {0}")]
    UnknownStyle(String),
}
