use serde::{Deserialize, Serialize};

/// Result of a Supreme Court judgment monitor run.
///
/// The backend has answered "nothing new" in three different shapes across
/// versions: a `message` containing "no new", an explicit `status` flag, or
/// simply an empty `new_items` array. [`MonitorReport::has_no_new_judgments`]
/// accepts all three until the contract settles; do not assume one canonical
/// shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonitorReport {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Unstructured judgment text blocks, newest first.
    #[serde(default)]
    pub new_items: Vec<String>,
    /// Server-assigned file identifier for this run, referenced by the
    /// download and delete endpoints.
    #[serde(default)]
    pub file: Option<String>,
}

impl MonitorReport {
    /// Backward-compatibility shim over the three "nothing new" shapes.
    pub fn has_no_new_judgments(&self) -> bool {
        self.message
            .as_deref()
            .is_some_and(|m| m.to_lowercase().contains("no new"))
            || self.status.as_deref() == Some("no_new")
            || self.new_items.is_empty()
    }

    /// Banner text for the "up to date" state.
    pub fn no_new_banner(&self) -> String {
        self.message.clone().unwrap_or_else(|| {
            "No new judgments found. You are already up to date.".to_string()
        })
    }
}

/// Response of `GET /api/supreme/monitors`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedMonitorList {
    #[serde(default)]
    pub files: Vec<String>,
}

/// Response of `GET /api/supreme/monitors/{filename}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedMonitor {
    pub file: String,
    #[serde(default)]
    pub results: Vec<String>,
}

/// Payload for `POST /api/supreme/download`. `case_index` is 1-based, the
/// numbering shown next to each live result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadRequest {
    pub filename: String,
    pub case_index: usize,
}

/// Response of `POST /api/supreme/download`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DownloadReceipt {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub url: String,
}

impl DownloadReceipt {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// A fetched judgment PDF, ready to open in a new tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdfLink {
    pub file: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with_items(items: &[&str]) -> MonitorReport {
        MonitorReport {
            new_items: items.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_new_via_message_text() {
        let report = MonitorReport {
            message: Some("No NEW judgments since last run".to_string()),
            new_items: vec!["item".to_string()],
            ..Default::default()
        };
        assert!(report.has_no_new_judgments());
    }

    #[test]
    fn test_no_new_via_status_flag() {
        let report = MonitorReport {
            status: Some("no_new".to_string()),
            new_items: vec!["item".to_string()],
            ..Default::default()
        };
        assert!(report.has_no_new_judgments());
    }

    #[test]
    fn test_no_new_via_empty_items() {
        // Distinct observable state from an empty search-result list: the
        // monitor page shows the "up to date" banner for this.
        assert!(report_with_items(&[]).has_no_new_judgments());
    }

    #[test]
    fn test_new_items_present_is_not_no_new() {
        let report = report_with_items(&["Judgment v. State\nCourt 4\n2024"]);
        assert!(!report.has_no_new_judgments());
    }

    #[test]
    fn test_banner_prefers_backend_message() {
        let report = MonitorReport {
            message: Some("no new items today".to_string()),
            ..Default::default()
        };
        assert_eq!(report.no_new_banner(), "no new items today");
        assert!(
            report_with_items(&[])
                .no_new_banner()
                .contains("up to date")
        );
    }

    #[test]
    fn test_report_without_new_items_field_deserializes() {
        let report: MonitorReport =
            serde_json::from_str(r#"{"message": "scan queued"}"#).unwrap();
        assert!(report.new_items.is_empty());
        assert_eq!(report.file, None);
    }

    #[test]
    fn test_download_receipt_ok() {
        let receipt: DownloadReceipt = serde_json::from_str(
            r#"{"status": "ok", "file": "judgment_3.pdf", "url": "http://127.0.0.1:8000/pdfs/judgment_3.pdf"}"#,
        )
        .unwrap();
        assert!(receipt.is_ok());
        let failed: DownloadReceipt =
            serde_json::from_str(r#"{"status": "error"}"#).unwrap();
        assert!(!failed.is_ok());
    }
}
