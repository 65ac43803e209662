// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests mirror query string parameters, so every field is optional and
//! validated by the handler. Responses serialize in camelCase.

/// API request to expand an airport or metro code.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct ResolveRequest {
    /// The code to resolve.
    pub code: Option<String>,
}

/// API response describing the airports a code stands for.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveResponse {
    /// The code as supplied.
    pub code: String,
    /// The member airports. Empty when the code is unknown.
    pub airport_codes: Vec<String>,
    /// Whether the code is a metro code.
    pub is_metro: bool,
    /// The metro display name, for metro codes only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metro_name: Option<String>,
}

/// API request for an award search.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct SearchRequest {
    /// Origin airport or metro code.
    pub origin: Option<String>,
    /// Destination airport or metro code.
    pub destination: Option<String>,
    /// Cabin class. Defaults to `economy`.
    pub cabin: Option<String>,
    /// Comma-separated credit card program codes.
    pub programs: Option<String>,
}

/// The program half of an award result.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirlineProgramInfo {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub has_dynamic_pricing: bool,
    pub pricing_model: String,
    /// Booking link for the searched itinerary.
    pub search_url: Option<String>,
    /// Alliance display name.
    pub alliance: Option<String>,
}

/// The chart price of an award result.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardCostInfo {
    pub min_miles: u32,
    pub max_miles: u32,
    pub typical_miles: Option<u32>,
    pub is_one_way: bool,
    pub notes: Option<String>,
}

/// A credit card program reference.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardProgramInfo {
    pub id: i64,
    pub name: String,
    pub code: String,
}

/// One way to fund an award with card points.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferOptionInfo {
    pub credit_card_program: CreditCardProgramInfo,
    /// The base ratio, even while a bonus is active.
    pub transfer_ratio: f64,
    pub transfer_time_hours: u32,
    /// `"Instant"`, hours or whole days.
    pub transfer_time_label: String,
    pub points_needed: u64,
    pub is_bonus_active: bool,
    pub bonus_ratio: Option<f64>,
    pub bonus_expires_at: Option<String>,
}

/// API response entry for one bookable program.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardResultInfo {
    pub airline_program: AirlineProgramInfo,
    pub award_cost: AwardCostInfo,
    pub transfer_options: Vec<TransferOptionInfo>,
    pub origin_region: String,
    pub destination_region: String,
}

/// API request for the airport autocomplete.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct AirportSearchRequest {
    /// Free-text query.
    pub q: Option<String>,
}

/// One airport autocomplete entry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirportSearchResultInfo {
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub is_metro: bool,
    /// Member airports, for metro entries only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airport_codes: Option<Vec<String>>,
}

/// Program listing entry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramSummaryInfo {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub has_dynamic_pricing: bool,
    pub alliance_id: Option<i64>,
    pub alliance_name: Option<String>,
    pub alliance_code: Option<String>,
    pub transfer_partner_count: usize,
    pub award_chart_count: usize,
}

/// The program section of a program detail response.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramInfo {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub has_dynamic_pricing: bool,
    pub pricing_model: String,
    pub search_url_template: Option<String>,
    pub alliance_id: Option<i64>,
    pub alliance_name: Option<String>,
    pub alliance_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferPartnerInfo {
    pub credit_card_program_id: i64,
    pub credit_card_program_name: String,
    pub credit_card_program_code: String,
    pub transfer_ratio: f64,
    pub transfer_time_hours: u32,
    pub is_bonus_active: bool,
    pub bonus_ratio: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionInfo {
    pub id: i64,
    pub name: String,
    pub code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardChartInfo {
    pub id: i64,
    pub cabin_class: String,
    pub partner_type: String,
    pub min_miles: u32,
    pub max_miles: u32,
    pub typical_miles: Option<u32>,
    pub is_one_way: bool,
    pub notes: Option<String>,
    pub origin_region_id: i64,
    pub destination_region_id: i64,
    /// `None` when the chart references a region of another program.
    pub origin_region: Option<RegionInfo>,
    pub destination_region: Option<RegionInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlliancePartnerInfo {
    pub id: i64,
    pub name: String,
    pub code: String,
}

/// API response describing one program in full.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramDetailResponse {
    pub program: ProgramInfo,
    /// Ordered by card program name.
    pub transfer_partners: Vec<TransferPartnerInfo>,
    /// Ordered by cabin class, then minimum miles.
    pub award_charts: Vec<AwardChartInfo>,
    pub regions: Vec<RegionInfo>,
    /// Other programs of the same alliance, ordered by name.
    pub alliance_partners: Vec<AlliancePartnerInfo>,
}
