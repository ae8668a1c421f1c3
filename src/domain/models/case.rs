use serde::{Deserialize, Serialize};

/// A case linked to the main matter on the same board entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithCase {
    #[serde(default)]
    pub case_number: String,
    #[serde(default)]
    pub details: String,
}

/// One matched case as returned by the search endpoints.
///
/// Read-only from the client's perspective. The scraper backend's schema has
/// drifted between versions, so everything beyond the core parties is
/// optional and defaults are tolerated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseResult {
    #[serde(default)]
    pub case_number: String,
    #[serde(default)]
    pub petitioner: String,
    #[serde(default)]
    pub respondent: String,
    #[serde(default)]
    pub advocates: String,
    #[serde(default)]
    pub court: String,
    #[serde(default)]
    pub judge: Option<String>,
    #[serde(default)]
    pub court_no: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub court_time: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub with_cases: Vec<WithCase>,
}
