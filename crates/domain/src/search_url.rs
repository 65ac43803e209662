// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::AirportCode;
use time::{Date, Duration};

/// Days between the search date and the departure date placed in
/// generated booking links.
pub const SEARCH_DATE_OFFSET_DAYS: i64 = 30;

const BOOKING_DATE_FORMAT: &[time::format_description::FormatItem<'_>] =
    time::macros::format_description!("[year]-[month]-[day]");

/// Departure date used in booking links for a search made on `today`.
///
/// Falls back to `today` at the end of the supported calendar.
#[must_use]
pub fn default_departure_date(today: Date) -> Date {
    today
        .checked_add(Duration::days(SEARCH_DATE_OFFSET_DAYS))
        .unwrap_or(today)
}

/// Fills a program's booking link template.
///
/// The first `{origin}`, `{destination}` and `{date}` placeholders are
/// replaced. The date is written as `YYYY-MM-DD`.
#[must_use]
pub fn render_search_url(
    template: &str,
    origin: &AirportCode,
    destination: &AirportCode,
    date: Date,
) -> String {
    let date_str: String = date
        .format(BOOKING_DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string());
    template
        .replacen("{origin}", origin.as_str(), 1)
        .replacen("{destination}", destination.as_str(), 1)
        .replacen("{date}", &date_str, 1)
}
