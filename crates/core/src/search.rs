// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::Catalog;
use crate::error::CoreError;
use crate::source::ReferenceSource;
use crate::transfers::TransferOption;
use award_finder_domain::{
    AirlineProgram, AirportCode, AwardChart, CabinClass, Region, default_departure_date,
    render_search_url,
};
use rayon::prelude::*;
use time::Date;
use tracing::{debug, info};

/// An award search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Origin airport or metro code.
    pub origin: String,
    /// Destination airport or metro code.
    pub destination: String,
    pub cabin_class: CabinClass,
    /// Codes of the credit card programs the traveler holds points in.
    pub enabled_card_codes: Vec<String>,
}

/// A program that can ticket the requested itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardResult {
    pub program: AirlineProgram,
    pub alliance_name: Option<String>,
    /// The chart row that prices the itinerary.
    pub chart: AwardChart,
    pub origin_region: String,
    pub destination_region: String,
    pub transfer_options: Vec<TransferOption>,
    /// Booking link, present when the program publishes a template.
    pub search_url: Option<String>,
}

/// Why a program produced no result.
#[derive(Debug, Clone, Copy)]
enum Skip {
    NoOriginRegion,
    NoDestinationRegion,
    NoChart,
    NoRoute,
}

impl std::fmt::Display for Skip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoOriginRegion => write!(f, "origin not in any region"),
            Self::NoDestinationRegion => write!(f, "destination not in any region"),
            Self::NoChart => write!(f, "no chart for region pair and cabin"),
            Self::NoRoute => write!(f, "no eligible operator flies the route"),
        }
    }
}

/// Resolved airport sets shared by every program evaluation.
struct Itinerary<'a> {
    origin_codes: &'a [AirportCode],
    destination_codes: &'a [AirportCode],
    cabin_class: CabinClass,
    enabled_card_codes: &'a [String],
    departure: Date,
}

/// Finds every program that can ticket `query`, cheapest first.
///
/// Programs are evaluated independently and in parallel. Results are
/// ordered by `min_miles`. Programs with equal prices keep the catalog's
/// program order. An unknown origin or destination yields no results.
///
/// # Arguments
///
/// * `catalog` - The reference data to search
/// * `query` - The itinerary and enabled card programs
/// * `today` - The search date. Booking links depart 30 days later
#[must_use]
pub fn find_awards(catalog: &Catalog, query: &SearchQuery, today: Date) -> Vec<AwardResult> {
    let origin_codes: Vec<AirportCode> = catalog.resolve_codes(&query.origin);
    let destination_codes: Vec<AirportCode> = catalog.resolve_codes(&query.destination);

    if origin_codes.is_empty() || destination_codes.is_empty() {
        debug!(
            origin = %query.origin,
            destination = %query.destination,
            "Unresolved search endpoints"
        );
        return Vec::new();
    }

    let itinerary: Itinerary<'_> = Itinerary {
        origin_codes: &origin_codes,
        destination_codes: &destination_codes,
        cabin_class: query.cabin_class,
        enabled_card_codes: &query.enabled_card_codes,
        departure: default_departure_date(today),
    };

    // An indexed parallel collect keeps program order, which the stable
    // sort below relies on for ties.
    let evaluated: Vec<Option<AwardResult>> = catalog
        .programs()
        .par_iter()
        .map(|program| match evaluate(catalog, program, &itinerary) {
            Ok(result) => Some(result),
            Err(reason) => {
                debug!(program = %program.code, %reason, "Skipping program");
                None
            }
        })
        .collect();

    let mut results: Vec<AwardResult> = evaluated.into_iter().flatten().collect();
    results.sort_by_key(|r| r.chart.min_miles);

    info!(
        origin = %query.origin,
        destination = %query.destination,
        cabin = %query.cabin_class,
        results = results.len(),
        "Award search completed"
    );

    results
}

/// Loads a fresh catalog from `source` and runs [`find_awards`] on it.
///
/// # Errors
///
/// Returns `CoreError::Infrastructure` if the reference data cannot be
/// loaded.
pub fn find_awards_in<S: ReferenceSource + ?Sized>(
    source: &mut S,
    query: &SearchQuery,
    today: Date,
) -> Result<Vec<AwardResult>, CoreError> {
    let catalog: Catalog = Catalog::load(source)?;
    Ok(find_awards(&catalog, query, today))
}

fn evaluate(
    catalog: &Catalog,
    program: &AirlineProgram,
    itinerary: &Itinerary<'_>,
) -> Result<AwardResult, Skip> {
    let origin_region: &Region = catalog
        .region_for(program.id, itinerary.origin_codes)
        .ok_or(Skip::NoOriginRegion)?;
    let destination_region: &Region = catalog
        .region_for(program.id, itinerary.destination_codes)
        .ok_or(Skip::NoDestinationRegion)?;

    let chart: &AwardChart = catalog
        .chart_for(
            program.id,
            origin_region.id,
            destination_region.id,
            itinerary.cabin_class,
        )
        .ok_or(Skip::NoChart)?;

    if !catalog.is_route_available(
        program.id,
        program.alliance_id,
        chart.partner_type,
        itinerary.origin_codes,
        itinerary.destination_codes,
    ) {
        return Err(Skip::NoRoute);
    }

    let transfer_options: Vec<TransferOption> =
        catalog.transfer_options(program.id, chart.min_miles, itinerary.enabled_card_codes);

    // Metro searches link to the first member airport.
    let search_url: Option<String> = program.search_url_template.as_deref().and_then(|template| {
        let origin: &AirportCode = itinerary.origin_codes.first()?;
        let destination: &AirportCode = itinerary.destination_codes.first()?;
        Some(render_search_url(
            template,
            origin,
            destination,
            itinerary.departure,
        ))
    });

    Ok(AwardResult {
        program: program.clone(),
        alliance_name: program
            .alliance_id
            .and_then(|id| catalog.alliance(id))
            .map(|a| a.name.clone()),
        chart: chart.clone(),
        origin_region: origin_region.name.clone(),
        destination_region: destination_region.name.clone(),
        transfer_options,
        search_url,
    })
}
