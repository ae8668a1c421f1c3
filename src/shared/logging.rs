//! Structured logging module for CasePulse
//!
//! Provides consistent, contextual logging across the application.
//! Uses structured fields keyed by operation.

/// Log operation tags for the different backend round-trips
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    RangeSearch,
    SingleDateSearch,
    MonitorRun,
    SavedMonitors,
    PdfDownload,
    StatusLookup,
    CauseListCheck,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::RangeSearch => "range_search",
            LogOperation::SingleDateSearch => "single_date_search",
            LogOperation::MonitorRun => "monitor_run",
            LogOperation::SavedMonitors => "saved_monitors",
            LogOperation::PdfDownload => "pdf_download",
            LogOperation::StatusLookup => "status_lookup",
            LogOperation::CauseListCheck => "cause_list_check",
        }
    }
}

/// Log an outgoing search request
pub fn log_search_start(operation: LogOperation, party: &str, court: &str) {
    tracing::info!(
        operation = operation.as_str(),
        party = party,
        court = court,
        "Submitting search"
    );
}

/// Log a search result count
pub fn log_search_result(operation: LogOperation, court: &str, count: usize) {
    tracing::info!(
        operation = operation.as_str(),
        court = court,
        result_count = count,
        "Search completed"
    );
}

/// Log a monitor run result
pub fn log_monitor_result(keyword: &str, new_items: usize, file: Option<&str>) {
    tracing::info!(
        operation = LogOperation::MonitorRun.as_str(),
        keyword = keyword,
        new_items = new_items,
        file = file.unwrap_or(""),
        "Monitor run completed"
    );
}

/// Log a per-item download drop. The batch keeps going; the item is simply
/// omitted from the accumulated links.
pub fn log_download_skipped(filename: &str, case_index: usize, reason: &str) {
    tracing::warn!(
        operation = LogOperation::PdfDownload.as_str(),
        filename = filename,
        case_index = case_index,
        reason = reason,
        "Skipped failed download item"
    );
}

/// Log a terminal backend failure for the current request
pub fn log_backend_error(operation: LogOperation, error: &str) {
    tracing::error!(
        operation = operation.as_str(),
        error = error,
        "Backend request failed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::RangeSearch.as_str(), "range_search");
        assert_eq!(LogOperation::SingleDateSearch.as_str(), "single_date_search");
        assert_eq!(LogOperation::MonitorRun.as_str(), "monitor_run");
        assert_eq!(LogOperation::SavedMonitors.as_str(), "saved_monitors");
        assert_eq!(LogOperation::PdfDownload.as_str(), "pdf_download");
        assert_eq!(LogOperation::StatusLookup.as_str(), "status_lookup");
        assert_eq!(LogOperation::CauseListCheck.as_str(), "cause_list_check");
    }
}
