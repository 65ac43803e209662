// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Failures reported by a [`ReferenceSource`](crate::ReferenceSource).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The backing store could not be reached or queried.
    #[error("reference data store unavailable: {0}")]
    Unavailable(String),
    /// The store returned a row that does not describe valid reference data.
    #[error("malformed reference data: {0}")]
    Malformed(String),
}

/// Errors that can occur during matching.
///
/// Missing regions, charts or routes are not errors. They exclude a program
/// from the result list. Only failures of the underlying data store surface
/// here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The reference data could not be loaded.
    Infrastructure(SourceError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Infrastructure(err) => write!(f, "Infrastructure failure: {err}"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Infrastructure(err) => Some(err),
        }
    }
}

impl From<SourceError> for CoreError {
    fn from(err: SourceError) -> Self {
        Self::Infrastructure(err)
    }
}
