// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Award chart matching engine.
//!
//! A [`Catalog`] indexes a snapshot of reference data read from a
//! [`ReferenceSource`]. Searches run against the catalog without further
//! I/O, so one catalog can serve any number of concurrent searches.

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

mod catalog;
mod charts;
mod directory;
mod error;
mod programs;
mod regions;
mod routes;
mod search;
mod source;
mod transfers;

#[cfg(test)]
mod tests;

pub use catalog::Catalog;
pub use directory::{
    AIRPORT_SEARCH_LIMIT, AirportSearchResult, MIN_AIRPORT_QUERY_CHARS, MetroGroup, ResolvedCode,
};
pub use error::{CoreError, SourceError};
pub use programs::{ChartDetail, ProgramDetail, ProgramSummary, TransferPartner};
pub use search::{AwardResult, SearchQuery, find_awards, find_awards_in};
pub use source::{ReferenceSnapshot, ReferenceSource};
pub use transfers::TransferOption;
