use serde::{Deserialize, Serialize};

/// One cause-list entry matched by the CERC checker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CercRow {
    #[serde(default)]
    pub sno: String,
    #[serde(default)]
    pub petition_no: String,
    #[serde(default)]
    pub petitioner: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub hearing_date_if_present: Option<String>,
    /// Cause-list PDF the entry was extracted from.
    #[serde(default)]
    pub source_pdf: String,
    #[serde(default)]
    pub page: u32,
}

/// Response of `POST /api/cerc/search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CercReport {
    #[serde(default)]
    pub results: Vec<CercRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_deserializes() {
        let json = r#"{
            "results": [{
                "sno": "12",
                "petition_no": "APL/928/2022",
                "petitioner": "Grid Co",
                "subject": "Tariff revision",
                "source_pdf": "causelist_feb.pdf",
                "page": 3
            }]
        }"#;
        let report: CercReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results[0].hearing_date_if_present, None);
        assert_eq!(report.results[0].page, 3);
    }

    #[test]
    fn test_missing_results_field_is_empty() {
        let report: CercReport = serde_json::from_str("{}").unwrap();
        assert!(report.results.is_empty());
    }
}
