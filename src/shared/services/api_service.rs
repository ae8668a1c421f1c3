use reqwasm::http::Request;
use serde::de::DeserializeOwned;

use crate::config;
use crate::domain::models::{
    CaseResult, CercReport, CercSearchRequest, DelhiStatusRequest, DelhiStatusRow,
    DownloadReceipt, DownloadRequest, MonitorReport, MonitorRequest, PdfLink, RangeSearchRequest,
    SavedMonitor, SavedMonitorList, SingleDateSearchRequest,
};
use crate::shared::errors::{AppError, Result};
use crate::shared::logging;

// API Service for centralized HTTP requests against the scraper backend
pub struct ApiService {
    base_url: String,
}

impl ApiService {
    pub fn new() -> Self {
        Self {
            base_url: config::backend_base_url(),
        }
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    // Generic GET request
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let response = Request::get(&self.url(endpoint))
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(AppError::Transport(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))
    }

    // Generic POST request with a JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        let response = Request::post(&self.url(endpoint))
            .header("Content-Type", "application/json")
            .body(serde_json::to_string(body)?)
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(AppError::Transport(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))
    }

    // Generic DELETE request
    pub async fn delete(&self, endpoint: &str) -> Result<()> {
        let response = Request::delete(&self.url(endpoint))
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(AppError::Transport(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        Ok(())
    }

    // Specific API methods

    /// Single-date case search (deep links from the older client).
    pub async fn search(&self, request: &SingleDateSearchRequest) -> Result<Vec<CaseResult>> {
        self.post("/api/search", request).await
    }

    /// Date-range case search across the selected jurisdiction.
    pub async fn search_range(&self, request: &RangeSearchRequest) -> Result<Vec<CaseResult>> {
        self.post("/api/search-range", request).await
    }

    /// Run a Supreme Court judgment keyword scan.
    pub async fn run_monitor(&self, request: &MonitorRequest) -> Result<MonitorReport> {
        self.post("/api/supreme/monitor", request).await
    }

    /// List saved monitor files on the backend.
    pub async fn saved_monitors(&self) -> Result<SavedMonitorList> {
        self.get("/api/supreme/monitors").await
    }

    /// Load one saved monitor file by name.
    pub async fn open_saved_monitor(&self, filename: &str) -> Result<SavedMonitor> {
        self.get(&format!(
            "/api/supreme/monitors/{}",
            urlencoding::encode(filename)
        ))
        .await
    }

    /// Delete a saved monitor file. The record lives on the backend; this is
    /// the only mutation the client ever requests.
    pub async fn delete_saved_monitor(&self, filename: &str) -> Result<()> {
        self.delete(&format!(
            "/api/supreme/delete/{}",
            urlencoding::encode(filename)
        ))
        .await
    }

    /// Fetch the judgment PDF for one case of a monitor run.
    pub async fn download_case(&self, request: &DownloadRequest) -> Result<DownloadReceipt> {
        self.post("/api/supreme/download", request).await
    }

    /// Fetch PDFs for the selected case indices, one request at a time to
    /// bound load on the backend. A failed item is logged and omitted from
    /// the returned links; it never blocks or fails the rest of the batch.
    pub async fn download_selected(&self, filename: &str, case_indices: &[usize]) -> Vec<PdfLink> {
        let mut receipts = Vec::with_capacity(case_indices.len());
        for &case_index in case_indices {
            let request = DownloadRequest {
                filename: filename.to_string(),
                case_index,
            };
            match self.download_case(&request).await {
                Ok(receipt) => {
                    if !receipt.is_ok() {
                        logging::log_download_skipped(filename, case_index, &receipt.status);
                    }
                    receipts.push(Some(receipt));
                }
                Err(e) => {
                    logging::log_download_skipped(filename, case_index, &e.to_string());
                    receipts.push(None);
                }
            }
        }
        collect_pdf_links(receipts)
    }

    /// Delhi High Court case-status lookup by party name and year.
    pub async fn delhi_status(&self, request: &DelhiStatusRequest) -> Result<Vec<DelhiStatusRow>> {
        self.post("/api/delhi/monitor", request).await
    }

    /// CERC cause-list check by month and petitioner.
    pub async fn cerc_search(&self, request: &CercSearchRequest) -> Result<CercReport> {
        self.post("/api/cerc/search", request).await
    }
}

impl Default for ApiService {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep the links of the receipts that came back `ok`, in batch order.
/// `None` marks an item whose request failed outright.
fn collect_pdf_links(receipts: Vec<Option<DownloadReceipt>>) -> Vec<PdfLink> {
    receipts
        .into_iter()
        .flatten()
        .filter(|receipt| receipt.is_ok())
        .map(|receipt| PdfLink {
            file: receipt.file,
            url: receipt.url,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_receipt(file: &str) -> Option<DownloadReceipt> {
        Some(DownloadReceipt {
            status: "ok".to_string(),
            file: file.to_string(),
            url: format!("http://127.0.0.1:8000/pdfs/{}", file),
        })
    }

    #[test]
    fn test_failed_item_is_dropped_not_fatal() {
        // 3 selected, item 2 comes back non-ok: exactly the 2 successes
        // survive, in order.
        let receipts = vec![
            ok_receipt("a.pdf"),
            Some(DownloadReceipt {
                status: "error".to_string(),
                ..Default::default()
            }),
            ok_receipt("c.pdf"),
        ];
        let links = collect_pdf_links(receipts);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].file, "a.pdf");
        assert_eq!(links[1].file, "c.pdf");
    }

    #[test]
    fn test_transport_failure_is_dropped_too() {
        let receipts = vec![None, ok_receipt("only.pdf"), None];
        let links = collect_pdf_links(receipts);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].file, "only.pdf");
    }

    #[test]
    fn test_all_failures_yield_empty_batch() {
        let links = collect_pdf_links(vec![None, None]);
        assert!(links.is_empty());
    }

    #[test]
    fn test_service_joins_urls_without_double_slash() {
        let service = ApiService::with_base_url("http://backend:8000".to_string());
        assert_eq!(service.url("/api/search"), "http://backend:8000/api/search");
        assert_eq!(service.url("api/search"), "http://backend:8000/api/search");
    }
}
