use serde::{Deserialize, Serialize};

/// One row of the Delhi High Court case-status table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelhiStatusRow {
    #[serde(default)]
    pub s_no: Option<String>,
    #[serde(default)]
    pub case_number: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub petitioner: String,
    #[serde(default)]
    pub respondent: String,
    #[serde(default)]
    pub advocates: String,
    #[serde(default)]
    pub listing_info: String,
    #[serde(default)]
    pub court: String,
    #[serde(default)]
    pub court_no: Option<String>,
    #[serde(default)]
    pub order_link: Option<String>,
    #[serde(default)]
    pub judgment_link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_with_links_deserializes() {
        let json = r#"{
            "s_no": "1",
            "case_number": "W.P.(C) 4321/2023",
            "status": "DISPOSED",
            "petitioner": "XYZ Ltd",
            "respondent": "GNCTD",
            "advocates": "Ms. Y",
            "listing_info": "Listed on 12.02.2024",
            "court": "delhi",
            "order_link": "https://dhc.example/orders/1",
            "judgment_link": null
        }"#;
        let row: DelhiStatusRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.status.as_deref(), Some("DISPOSED"));
        assert!(row.order_link.is_some());
        assert!(row.judgment_link.is_none());
    }

    #[test]
    fn test_sparse_row_deserializes() {
        let row: DelhiStatusRow =
            serde_json::from_str(r#"{"case_number": "CRL.A. 9/2023"}"#).unwrap();
        assert_eq!(row.case_number, "CRL.A. 9/2023");
        assert_eq!(row.s_no, None);
        assert_eq!(row.petitioner, "");
    }
}
