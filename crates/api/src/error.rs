// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use award_finder::CoreError;
use award_finder_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
/// Searches that match nothing are not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        translate_core_error(err)
    }
}

/// Translates a domain error into an API error.
///
/// Request fields are the only domain values an API caller supplies, so
/// every domain error is an input error.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let field: &str = match &err {
        DomainError::InvalidAirportCode(_) => "code",
        DomainError::InvalidCabinClass(_) => "cabin",
        DomainError::InvalidPartnerType(_) => "partner_type",
        DomainError::InvalidPricingModel(_) => "pricing_model",
        DomainError::InvalidTransferRatio { .. } => "transfer_ratio",
        DomainError::InvalidCount { field, .. } => *field,
    };
    ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::Infrastructure(source) => ApiError::Internal {
            message: format!("Reference data unavailable: {source}"),
        },
    }
}
