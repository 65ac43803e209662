// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the award finder.
//!
//! Handlers translate transport-neutral request DTOs into engine calls and
//! engine results into serializable response DTOs. HTTP concerns live in
//! the server crate.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    get_program, list_credit_card_programs, list_programs, load_catalog, resolve_airport,
    search_airports, search_awards,
};
pub use request_response::{
    AirlineProgramInfo, AirportSearchRequest, AirportSearchResultInfo, AlliancePartnerInfo,
    AwardChartInfo, AwardCostInfo, AwardResultInfo, CreditCardProgramInfo, ProgramDetailResponse,
    ProgramInfo, ProgramSummaryInfo, RegionInfo, ResolveRequest, ResolveResponse, SearchRequest,
    TransferOptionInfo, TransferPartnerInfo,
};
