// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions.
//!
//! Every handler reads a [`Catalog`] and never touches the data store.
//! [`load_catalog`] is the only operation that performs I/O.

use award_finder::{
    AirportSearchResult, AwardResult, Catalog, ChartDetail, ProgramDetail, ProgramSummary,
    ReferenceSource, ResolvedCode, SearchQuery, TransferOption, TransferPartner, find_awards,
};
use award_finder_domain::{
    AirlineProgram, CabinClass, CreditCardProgram, Region, format_transfer_time,
};
use std::str::FromStr;
use time::Date;
use tracing::{debug, info};

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{
    AirlineProgramInfo, AirportSearchRequest, AirportSearchResultInfo, AlliancePartnerInfo,
    AwardChartInfo, AwardCostInfo, AwardResultInfo, CreditCardProgramInfo, ProgramDetailResponse,
    ProgramInfo, ProgramSummaryInfo, RegionInfo, ResolveRequest, ResolveResponse, SearchRequest,
    TransferOptionInfo, TransferPartnerInfo,
};

/// Returns the trimmed value of a required request field.
fn required<'a>(value: Option<&'a str>, field: &str, message: &str) -> Result<&'a str, ApiError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::InvalidInput {
            field: field.to_string(),
            message: message.to_string(),
        })
}

/// Builds a catalog from the current contents of `source`.
///
/// # Arguments
///
/// * `source` - The reference data store
///
/// # Errors
///
/// Returns `ApiError::Internal` if the reference data cannot be read.
pub fn load_catalog<S: ReferenceSource + ?Sized>(source: &mut S) -> Result<Catalog, ApiError> {
    let catalog: Catalog = Catalog::load(source)?;
    info!(
        programs = catalog.programs().len(),
        airports = catalog.airports().len(),
        "Catalog loaded"
    );
    Ok(catalog)
}

/// Expands an airport or metro code into its member airports.
///
/// An unknown code is not an error. It resolves to no airports.
///
/// # Errors
///
/// Returns an error if the code is missing or blank.
pub fn resolve_airport(
    catalog: &Catalog,
    request: &ResolveRequest,
) -> Result<ResolveResponse, ApiError> {
    let code: &str = required(request.code.as_deref(), "code", "Missing code parameter")?;
    let resolved: ResolvedCode = catalog.resolve(code);

    Ok(ResolveResponse {
        code: resolved.code,
        airport_codes: resolved
            .airport_codes
            .iter()
            .map(ToString::to_string)
            .collect(),
        is_metro: resolved.is_metro,
        metro_name: resolved.metro_name,
    })
}

/// Runs an award search.
///
/// # Arguments
///
/// * `catalog` - The reference data to search
/// * `request` - The search parameters
/// * `today` - The current date, used for booking links
///
/// # Returns
///
/// * `Ok(Vec<AwardResultInfo>)` ordered by minimum miles, possibly empty
/// * `Err(ApiError)` if the request is incomplete
///
/// # Errors
///
/// Returns an error if:
/// - The origin or destination is missing
/// - The cabin class is not recognized
pub fn search_awards(
    catalog: &Catalog,
    request: &SearchRequest,
    today: Date,
) -> Result<Vec<AwardResultInfo>, ApiError> {
    const ENDPOINTS_REQUIRED: &str = "Origin and destination are required";

    let origin: &str = required(request.origin.as_deref(), "origin", ENDPOINTS_REQUIRED)?;
    let destination: &str = required(
        request.destination.as_deref(),
        "destination",
        ENDPOINTS_REQUIRED,
    )?;

    let cabin_class: CabinClass = match request.cabin.as_deref().map(str::trim) {
        None | Some("") => CabinClass::Economy,
        Some(cabin) => CabinClass::from_str(cabin).map_err(translate_domain_error)?,
    };

    let enabled_card_codes: Vec<String> = request
        .programs
        .as_deref()
        .map(|programs| {
            programs
                .split(',')
                .map(str::trim)
                .filter(|code| !code.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let query: SearchQuery = SearchQuery {
        origin: origin.to_string(),
        destination: destination.to_string(),
        cabin_class,
        enabled_card_codes,
    };
    debug!(?query, "Searching awards");

    Ok(find_awards(catalog, &query, today)
        .into_iter()
        .map(award_result_info)
        .collect())
}

/// Airport autocomplete.
///
/// A missing or short query yields no entries.
#[must_use]
pub fn search_airports(
    catalog: &Catalog,
    request: &AirportSearchRequest,
) -> Vec<AirportSearchResultInfo> {
    let query: &str = request.q.as_deref().unwrap_or_default();
    catalog
        .search_airports(query)
        .into_iter()
        .map(|entry| match entry {
            AirportSearchResult::Metro {
                code,
                name,
                city,
                country,
                airport_codes,
            } => AirportSearchResultInfo {
                code: code.to_string(),
                name,
                city,
                country,
                is_metro: true,
                airport_codes: Some(airport_codes.iter().map(ToString::to_string).collect()),
            },
            AirportSearchResult::Airport {
                code,
                name,
                city,
                country,
            } => AirportSearchResultInfo {
                code: code.to_string(),
                name,
                city,
                country,
                is_metro: false,
                airport_codes: None,
            },
        })
        .collect()
}

/// Lists every program with its alliance and reference data counts,
/// ordered by name.
#[must_use]
pub fn list_programs(catalog: &Catalog) -> Vec<ProgramSummaryInfo> {
    catalog
        .list_programs()
        .into_iter()
        .map(|summary: ProgramSummary| ProgramSummaryInfo {
            id: summary.program.id.value(),
            name: summary.program.name,
            code: summary.program.code,
            has_dynamic_pricing: summary.program.has_dynamic_pricing,
            alliance_id: summary.alliance.as_ref().map(|a| a.id.value()),
            alliance_name: summary.alliance.as_ref().map(|a| a.name.clone()),
            alliance_code: summary.alliance.map(|a| a.code),
            transfer_partner_count: summary.transfer_partner_count,
            award_chart_count: summary.award_chart_count,
        })
        .collect()
}

/// Describes one program in full.
///
/// # Arguments
///
/// * `catalog` - The reference data
/// * `code` - The program code, in any case
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if no program has this code.
pub fn get_program(catalog: &Catalog, code: &str) -> Result<ProgramDetailResponse, ApiError> {
    let detail: ProgramDetail = catalog
        .program_detail(code)
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Program"),
            message: format!("No program with code '{code}'"),
        })?;

    Ok(ProgramDetailResponse {
        program: ProgramInfo {
            id: detail.program.id.value(),
            name: detail.program.name,
            code: detail.program.code,
            has_dynamic_pricing: detail.program.has_dynamic_pricing,
            pricing_model: detail.program.pricing_model.to_string(),
            search_url_template: detail.program.search_url_template,
            alliance_id: detail.alliance.as_ref().map(|a| a.id.value()),
            alliance_name: detail.alliance.as_ref().map(|a| a.name.clone()),
            alliance_code: detail.alliance.map(|a| a.code),
        },
        transfer_partners: detail
            .transfer_partners
            .into_iter()
            .map(transfer_partner_info)
            .collect(),
        award_charts: detail.award_charts.into_iter().map(award_chart_info).collect(),
        regions: detail.regions.iter().map(region_info).collect(),
        alliance_partners: detail
            .alliance_partners
            .into_iter()
            .map(|p: AirlineProgram| AlliancePartnerInfo {
                id: p.id.value(),
                name: p.name,
                code: p.code,
            })
            .collect(),
    })
}

/// Lists every credit card program, ordered by name.
#[must_use]
pub fn list_credit_card_programs(catalog: &Catalog) -> Vec<CreditCardProgramInfo> {
    catalog
        .list_card_programs()
        .into_iter()
        .map(credit_card_program_info)
        .collect()
}

fn credit_card_program_info(card: CreditCardProgram) -> CreditCardProgramInfo {
    CreditCardProgramInfo {
        id: card.id.value(),
        name: card.name,
        code: card.code,
    }
}

fn region_info(region: &Region) -> RegionInfo {
    RegionInfo {
        id: region.id.value(),
        name: region.name.clone(),
        code: region.code.clone(),
    }
}

fn transfer_option_info(option: TransferOption) -> TransferOptionInfo {
    TransferOptionInfo {
        credit_card_program: credit_card_program_info(option.card_program),
        transfer_ratio: option.transfer_ratio.as_f64(),
        transfer_time_hours: option.transfer_time_hours,
        transfer_time_label: format_transfer_time(option.transfer_time_hours),
        points_needed: option.points_needed,
        is_bonus_active: option.is_bonus_active,
        bonus_ratio: option.bonus_ratio.map(|r| r.as_f64()),
        bonus_expires_at: option.bonus_expires_at,
    }
}

fn award_result_info(result: AwardResult) -> AwardResultInfo {
    AwardResultInfo {
        airline_program: AirlineProgramInfo {
            id: result.program.id.value(),
            name: result.program.name,
            code: result.program.code,
            has_dynamic_pricing: result.program.has_dynamic_pricing,
            pricing_model: result.program.pricing_model.to_string(),
            search_url: result.search_url,
            alliance: result.alliance_name,
        },
        award_cost: AwardCostInfo {
            min_miles: result.chart.min_miles,
            max_miles: result.chart.max_miles,
            typical_miles: result.chart.typical_miles,
            is_one_way: result.chart.is_one_way,
            notes: result.chart.notes,
        },
        transfer_options: result
            .transfer_options
            .into_iter()
            .map(transfer_option_info)
            .collect(),
        origin_region: result.origin_region,
        destination_region: result.destination_region,
    }
}

fn transfer_partner_info(partner: TransferPartner) -> TransferPartnerInfo {
    TransferPartnerInfo {
        credit_card_program_id: partner.card_program.id.value(),
        credit_card_program_name: partner.card_program.name,
        credit_card_program_code: partner.card_program.code,
        transfer_ratio: partner.partnership.transfer_ratio.as_f64(),
        transfer_time_hours: partner.partnership.transfer_time_hours,
        is_bonus_active: partner.partnership.is_bonus_active,
        bonus_ratio: partner.partnership.bonus_ratio.map(|r| r.as_f64()),
    }
}

fn award_chart_info(detail: ChartDetail) -> AwardChartInfo {
    AwardChartInfo {
        id: detail.chart.id.value(),
        cabin_class: detail.chart.cabin_class.to_string(),
        partner_type: detail.chart.partner_type.to_string(),
        min_miles: detail.chart.min_miles,
        max_miles: detail.chart.max_miles,
        typical_miles: detail.chart.typical_miles,
        is_one_way: detail.chart.is_one_way,
        notes: detail.chart.notes,
        origin_region_id: detail.chart.origin_region_id.value(),
        destination_region_id: detail.chart.destination_region_id.value(),
        origin_region: detail.origin_region.as_ref().map(region_info),
        destination_region: detail.destination_region.as_ref().map(region_info),
    }
}
