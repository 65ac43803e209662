// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reference data types for award chart matching.
//!
//! Everything in this crate is immutable reference data plus the pure
//! pricing rules that apply to it. Nothing here performs I/O.

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

mod airport;
mod chart;
mod error;
mod program;
mod ratio;
mod search_url;
mod transfer;
mod types;

#[cfg(test)]
mod tests;

pub use airport::{Airport, metro_display_name};
pub use chart::AwardChart;
pub use error::DomainError;
pub use program::{AirlineProgram, AirlineRoute, AirportRegionMapping, Alliance, Region};
pub use ratio::TransferRatio;
pub use search_url::{SEARCH_DATE_OFFSET_DAYS, default_departure_date, render_search_url};
pub use transfer::{CreditCardProgram, TransferPartnership, format_transfer_time};
pub use types::{
    AirportCode, AllianceId, CabinClass, CardProgramId, ChartId, PartnerType, PartnershipId,
    PricingModel, ProgramId, RegionId,
};
