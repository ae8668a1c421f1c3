//! Query building and court-specific date formatting.
//!
//! Each jurisdiction's scraper expects a different textual date format, so
//! the builders here are the single place where raw form input is validated
//! and turned into a backend payload. Every operation is a pure, single-shot
//! validate-and-format pass: identical inputs always yield identical
//! payloads, and nothing is sent to the backend on a validation failure.

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::models::{
    CercSearchRequest, Court, DelhiStatusRequest, MonitorRequest, RangeSearchRequest, SearchMode,
    SingleDateSearchRequest,
};

/// Rejected user input. Surfaced inline on the form that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing party/case identifier")]
    MissingParty,
    #[error("missing date range")]
    MissingDateRange,
    #[error("start date after end date")]
    StartAfterEnd,
    #[error("missing date")]
    MissingDate,
    #[error("missing month or party")]
    MissingMonthOrParty,
    #[error("missing keyword")]
    MissingKeyword,
    #[error("missing case year")]
    MissingYear,
}

/// Date pattern used by the Supreme Court scraper and by any jurisdiction
/// without a dedicated format.
const DEFAULT_DATE_PATTERN: &str = "%Y-%m-%d";

impl Court {
    /// The textual date format this jurisdiction's scraper expects.
    pub fn date_pattern(&self) -> &'static str {
        match self {
            Court::Delhi => "%d.%m.%Y",
            Court::Bombay => "%d-%m-%Y",
            Court::Nclat => "%d/%m/%Y",
            Court::Supreme | Court::All => DEFAULT_DATE_PATTERN,
        }
    }
}

/// Render `date` the way the selected jurisdiction's scraper expects it.
pub fn format_court_date(date: NaiveDate, court: Court) -> String {
    date.format(court.date_pattern()).to_string()
}

/// Tag-based variant for values arriving from the query string. The mapping
/// is total: an unknown-but-syntactically-valid tag formats with the default
/// pattern instead of being rejected.
pub fn format_court_date_tag(date: NaiveDate, court_tag: &str) -> String {
    let pattern = Court::parse(court_tag)
        .map(|court| court.date_pattern())
        .unwrap_or(DEFAULT_DATE_PATTERN);
    date.format(pattern).to_string()
}

/// Build the `/api/search-range` payload.
///
/// Validation short-circuits in order: party, date presence, date ordering.
pub fn build_date_range_query(
    party: &str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    court: Court,
) -> Result<RangeSearchRequest, ValidationError> {
    let party = party.trim();
    if party.is_empty() {
        return Err(ValidationError::MissingParty);
    }
    let (start, end) = match (start, end) {
        (Some(start), Some(end)) => (start, end),
        _ => return Err(ValidationError::MissingDateRange),
    };
    if start > end {
        return Err(ValidationError::StartAfterEnd);
    }
    Ok(RangeSearchRequest {
        party_name: party.to_string(),
        start_date: format_court_date(start, court),
        end_date: format_court_date(end, court),
        court: court.as_str().to_string(),
    })
}

/// Build the `/api/search` payload for the single-date deep-link mode. The
/// date arrives already formatted in the query string and is forwarded as-is,
/// like the court tag.
pub fn build_single_date_query(
    party: &str,
    date: &str,
    court_tag: &str,
) -> Result<SingleDateSearchRequest, ValidationError> {
    let party = party.trim();
    if party.is_empty() {
        return Err(ValidationError::MissingParty);
    }
    let date = date.trim();
    if date.is_empty() {
        return Err(ValidationError::MissingDate);
    }
    Ok(SingleDateSearchRequest {
        party_name: party.to_string(),
        date: date.to_string(),
        court: court_tag.to_string(),
    })
}

/// Build the `/api/supreme/monitor` payload. `mode` is never left unset in
/// the outgoing payload: an unchosen mode becomes the default (`allwords`).
pub fn build_monitor_query(
    keyword: &str,
    mode: Option<SearchMode>,
) -> Result<MonitorRequest, ValidationError> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Err(ValidationError::MissingKeyword);
    }
    Ok(MonitorRequest {
        keyword: keyword.to_string(),
        mode: mode.unwrap_or_default(),
    })
}

/// Build the `/api/delhi/monitor` payload. The mode tag is always `"party"`;
/// the backend's other lookup kinds are not exposed here.
pub fn build_status_query(
    keyword: &str,
    year: &str,
) -> Result<DelhiStatusRequest, ValidationError> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Err(ValidationError::MissingParty);
    }
    let year = year.trim();
    if year.is_empty() {
        return Err(ValidationError::MissingYear);
    }
    Ok(DelhiStatusRequest {
        keyword: keyword.to_string(),
        year: year.to_string(),
        mode: "party".to_string(),
    })
}

/// Build the `/api/cerc/search` payload. The backend takes natural-language
/// month names, so both fields pass through trimmed but unformatted.
pub fn build_month_party_query(
    month: &str,
    party: &str,
) -> Result<CercSearchRequest, ValidationError> {
    let month = month.trim();
    let party = party.trim();
    if month.is_empty() || party.is_empty() {
        return Err(ValidationError::MissingMonthOrParty);
    }
    Ok(CercSearchRequest {
        month: month.to_string(),
        party: party.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_pattern_per_jurisdiction() {
        let sample = date(2024, 3, 5);
        assert_eq!(format_court_date(sample, Court::Delhi), "05.03.2024");
        assert_eq!(format_court_date(sample, Court::Bombay), "05-03-2024");
        assert_eq!(format_court_date(sample, Court::Nclat), "05/03/2024");
        assert_eq!(format_court_date(sample, Court::Supreme), "2024-03-05");
        assert_eq!(format_court_date(sample, Court::All), "2024-03-05");
    }

    #[test]
    fn test_unknown_tag_falls_back_to_default_pattern() {
        let sample = date(2024, 3, 5);
        assert_eq!(format_court_date_tag(sample, "madras"), "2024-03-05");
        assert_eq!(format_court_date_tag(sample, ""), "2024-03-05");
        // Known tags still dispatch
        assert_eq!(format_court_date_tag(sample, "nclat"), "05/03/2024");
    }

    #[test]
    fn test_range_query_formats_both_dates() {
        // party="Union of India", 2024-01-10..2024-01-15, delhi
        let request = build_date_range_query(
            "Union of India",
            Some(date(2024, 1, 10)),
            Some(date(2024, 1, 15)),
            Court::Delhi,
        )
        .unwrap();
        assert_eq!(request.party_name, "Union of India");
        assert_eq!(request.start_date, "10.01.2024");
        assert_eq!(request.end_date, "15.01.2024");
        assert_eq!(request.court, "delhi");
    }

    #[test]
    fn test_range_query_rejects_blank_party_first() {
        // Party check wins even when the dates are also broken
        assert_eq!(
            build_date_range_query("   ", None, None, Court::Supreme),
            Err(ValidationError::MissingParty)
        );
        assert_eq!(
            build_date_range_query("", Some(date(2024, 1, 1)), Some(date(2024, 1, 2)), Court::All),
            Err(ValidationError::MissingParty)
        );
    }

    #[test]
    fn test_range_query_rejects_missing_dates() {
        assert_eq!(
            build_date_range_query("ABC Ltd", Some(date(2024, 1, 1)), None, Court::Supreme),
            Err(ValidationError::MissingDateRange)
        );
        assert_eq!(
            build_date_range_query("ABC Ltd", None, Some(date(2024, 1, 1)), Court::Supreme),
            Err(ValidationError::MissingDateRange)
        );
    }

    #[test]
    fn test_range_query_rejects_inverted_range() {
        // end before start, bombay: no payload is built
        assert_eq!(
            build_date_range_query(
                "ABC Ltd",
                Some(date(2024, 3, 1)),
                Some(date(2024, 2, 1)),
                Court::Bombay,
            ),
            Err(ValidationError::StartAfterEnd)
        );
    }

    #[test]
    fn test_range_query_accepts_single_day_range() {
        let day = date(2024, 6, 7);
        let request =
            build_date_range_query("ABC Ltd", Some(day), Some(day), Court::Supreme).unwrap();
        assert_eq!(request.start_date, request.end_date);
    }

    #[test]
    fn test_range_query_trims_party() {
        let request = build_date_range_query(
            "  State of NCT  ",
            Some(date(2024, 1, 1)),
            Some(date(2024, 1, 2)),
            Court::Delhi,
        )
        .unwrap();
        assert_eq!(request.party_name, "State of NCT");
    }

    #[test]
    fn test_builders_are_idempotent() {
        let build = || {
            build_date_range_query(
                "Union of India",
                Some(date(2024, 1, 10)),
                Some(date(2024, 1, 15)),
                Court::Nclat,
            )
            .unwrap()
        };
        let first = serde_json::to_string(&build()).unwrap();
        let second = serde_json::to_string(&build()).unwrap();
        assert_eq!(first, second);

        let monitor = || build_monitor_query("tariff", Some(SearchMode::Phrase)).unwrap();
        assert_eq!(
            serde_json::to_string(&monitor()).unwrap(),
            serde_json::to_string(&monitor()).unwrap()
        );
    }

    #[test]
    fn test_monitor_query_defaults_to_allwords() {
        let request = build_monitor_query("foo", None).unwrap();
        assert_eq!(request.mode, SearchMode::AllWords);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["mode"], "allwords");
    }

    #[test]
    fn test_monitor_query_keeps_chosen_mode() {
        let request = build_monitor_query("foo", Some(SearchMode::AnyWords)).unwrap();
        assert_eq!(request.mode, SearchMode::AnyWords);
    }

    #[test]
    fn test_monitor_query_rejects_blank_keyword() {
        assert_eq!(
            build_monitor_query(" \t ", None),
            Err(ValidationError::MissingKeyword)
        );
    }

    #[test]
    fn test_month_party_query_requires_both() {
        assert_eq!(
            build_month_party_query("", "Grid Co"),
            Err(ValidationError::MissingMonthOrParty)
        );
        assert_eq!(
            build_month_party_query("February", "  "),
            Err(ValidationError::MissingMonthOrParty)
        );
        let request = build_month_party_query(" February ", " Grid Co ").unwrap();
        assert_eq!(request.month, "February");
        assert_eq!(request.party, "Grid Co");
    }

    #[test]
    fn test_status_query_validates_party_then_year() {
        assert_eq!(
            build_status_query("", "2023"),
            Err(ValidationError::MissingParty)
        );
        assert_eq!(
            build_status_query("XYZ Ltd", ""),
            Err(ValidationError::MissingYear)
        );
        let request = build_status_query("XYZ Ltd", "2023").unwrap();
        assert_eq!(request.mode, "party");
    }

    #[test]
    fn test_single_date_query_forwards_tag_and_date() {
        let request = build_single_date_query("ABC Ltd", "2024-03-05", "madras").unwrap();
        assert_eq!(request.court, "madras");
        assert_eq!(request.date, "2024-03-05");
        assert_eq!(
            build_single_date_query("ABC Ltd", "  ", "supreme"),
            Err(ValidationError::MissingDate)
        );
    }
}
