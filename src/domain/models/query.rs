use serde::{Deserialize, Serialize};

/// Court/tribunal selector. Determines which backend scraper answers the
/// query and which textual date format that scraper expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Court {
    Supreme,
    Delhi,
    Bombay,
    Nclat,
    All,
}

impl Court {
    pub fn as_str(&self) -> &'static str {
        match self {
            Court::Supreme => "supreme",
            Court::Delhi => "delhi",
            Court::Bombay => "bombay",
            Court::Nclat => "nclat",
            Court::All => "all",
        }
    }

    /// Parse a jurisdiction tag. Unknown tags are not an error for the
    /// formatter (they fall back to the default date pattern); callers that
    /// need to know keep the `None`.
    pub fn parse(tag: &str) -> Option<Court> {
        match tag {
            "supreme" => Some(Court::Supreme),
            "delhi" => Some(Court::Delhi),
            "bombay" => Some(Court::Bombay),
            "nclat" => Some(Court::Nclat),
            "all" => Some(Court::All),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Court::Supreme => "Supreme Court",
            Court::Delhi => "Delhi High Court",
            Court::Bombay => "Bombay High Court",
            Court::Nclat => "NCLAT",
            Court::All => "All Courts",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Court::Supreme => "⚖️",
            Court::Delhi => "🏛️",
            Court::Bombay => "🔨",
            Court::Nclat => "🏢",
            Court::All => "🌐",
        }
    }

    pub fn selectable() -> [Court; 5] {
        [
            Court::Supreme,
            Court::Delhi,
            Court::Bombay,
            Court::Nclat,
            Court::All,
        ]
    }
}

/// Keyword matching mode for the Supreme Court judgment monitor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    Phrase,
    /// All entered words must be present in the judgment (default mode).
    #[default]
    AllWords,
    AnyWords,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Phrase => "phrase",
            SearchMode::AllWords => "allwords",
            SearchMode::AnyWords => "anywords",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SearchMode::Phrase => "Phrase",
            SearchMode::AllWords => "All Words",
            SearchMode::AnyWords => "Any Words",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            SearchMode::Phrase => "Search for the exact phrase in the same order",
            SearchMode::AllWords => {
                "All entered words must be present in the judgment (Default mode)"
            }
            SearchMode::AnyWords => "At least one of the entered words must appear in the judgment",
        }
    }
}

/// Payload for `POST /api/search-range`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeSearchRequest {
    #[serde(rename = "partyName")]
    pub party_name: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    pub court: String,
}

/// Payload for `POST /api/search` (single-date mode, kept for deep links from
/// the older client).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleDateSearchRequest {
    #[serde(rename = "partyName")]
    pub party_name: String,
    pub date: String,
    pub court: String,
}

/// Payload for `POST /api/supreme/monitor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorRequest {
    pub keyword: String,
    pub mode: SearchMode,
}

/// Payload for `POST /api/delhi/monitor`. The backend multiplexes lookup
/// kinds on `mode`; this client only issues party-name lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelhiStatusRequest {
    pub keyword: String,
    pub year: String,
    pub mode: String,
}

/// Payload for `POST /api/cerc/search`. The backend accepts natural-language
/// month names directly, so there is no date-pattern dispatch here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CercSearchRequest {
    pub month: String,
    pub party: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_court_tags_round_trip() {
        for court in Court::selectable() {
            assert_eq!(Court::parse(court.as_str()), Some(court));
        }
        assert_eq!(Court::parse("madras"), None);
        assert_eq!(Court::parse(""), None);
    }

    #[test]
    fn test_court_serializes_lowercase() {
        let json = serde_json::to_string(&Court::Nclat).unwrap();
        assert_eq!(json, "\"nclat\"");
    }

    #[test]
    fn test_search_mode_default_is_allwords() {
        assert_eq!(SearchMode::default(), SearchMode::AllWords);
        let json = serde_json::to_string(&SearchMode::default()).unwrap();
        assert_eq!(json, "\"allwords\"");
    }

    #[test]
    fn test_range_request_uses_backend_field_names() {
        let request = RangeSearchRequest {
            party_name: "Union of India".to_string(),
            start_date: "10.01.2024".to_string(),
            end_date: "15.01.2024".to_string(),
            court: "delhi".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["partyName"], "Union of India");
        assert_eq!(value["startDate"], "10.01.2024");
        assert_eq!(value["endDate"], "15.01.2024");
        assert_eq!(value["court"], "delhi");
    }
}
