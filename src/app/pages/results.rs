use dioxus::prelude::*;

use crate::app::components::{Button, ButtonVariant, LoadingText};
#[cfg(target_arch = "wasm32")]
use crate::app::components::{EmptyState, ErrorMessage};
use crate::app::routes::Route;
use crate::domain::models::CaseResult;
#[cfg(target_arch = "wasm32")]
use crate::domain::models::RangeSearchRequest;
#[cfg(target_arch = "wasm32")]
use crate::domain::services::build_single_date_query;
#[cfg(target_arch = "wasm32")]
use crate::shared::logging::{self, LogOperation};
#[cfg(target_arch = "wasm32")]
use crate::shared::services::ApiService;

/// Search results page. The query string carries the already-formatted dates
/// produced on the Home page (or by an external deep link).
#[allow(non_snake_case)]
#[component]
pub fn Results(
    partyName: Option<String>,
    date: Option<String>,
    startDate: Option<String>,
    endDate: Option<String>,
    court: Option<String>,
) -> Element {
    let nav = use_navigator();

    rsx! {
        div { class: "p-results",
            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| { nav.push(Route::Home {}); },
                "← Back"
            }

            ResultsView {
                party_name: partyName,
                date: date,
                start_date: startDate,
                end_date: endDate,
                court: court,
            }
        }
    }
}

/// Pick the endpoint from the available parameters and fetch. Range mode
/// wins; a lone `date` falls back to the older single-date endpoint.
#[cfg(target_arch = "wasm32")]
async fn fetch_results(
    party_name: Option<String>,
    date: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    court: Option<String>,
) -> Result<Vec<CaseResult>, String> {
    let (Some(party_name), Some(court)) = (party_name, court) else {
        return Err("Missing search parameters".to_string());
    };

    let api = ApiService::new();
    let (outcome, operation) = match (start_date, end_date, date) {
        (Some(start_date), Some(end_date), _) => {
            let operation = LogOperation::RangeSearch;
            logging::log_search_start(operation, &party_name, &court);
            let outcome = api
                .search_range(&RangeSearchRequest {
                    party_name,
                    start_date,
                    end_date,
                    court: court.clone(),
                })
                .await;
            (outcome, operation)
        }
        (_, _, Some(date)) => {
            let request =
                build_single_date_query(&party_name, &date, &court).map_err(|e| e.to_string())?;
            let operation = LogOperation::SingleDateSearch;
            logging::log_search_start(operation, &party_name, &court);
            let outcome = api.search(&request).await;
            (outcome, operation)
        }
        _ => return Err("Missing date or date range".to_string()),
    };

    match outcome {
        Ok(results) => {
            logging::log_search_result(operation, &court, results.len());
            Ok(results)
        }
        Err(e) => {
            logging::log_backend_error(operation, &e.to_string());
            Err("Backend error".to_string())
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[component]
fn ResultsView(
    party_name: Option<String>,
    date: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    court: Option<String>,
) -> Element {
    let results_resource = use_resource(move || {
        let party_name = party_name.clone();
        let date = date.clone();
        let start_date = start_date.clone();
        let end_date = end_date.clone();
        let court = court.clone();
        async move { fetch_results(party_name, date, start_date, end_date, court).await }
    });

    match &*results_resource.read() {
        Some(Ok(results)) => {
            let results = results.clone();
            rsx! {
                h1 { class: "p-results__heading", "Search Results ({results.len()})" }

                if results.is_empty() {
                    EmptyState {
                        icon: "📁",
                        title: "No cases found",
                        description: "No cases found for the selected criteria.",
                    }
                } else {
                    div { class: "p-results__list",
                        for (idx, item) in results.into_iter().enumerate() {
                            CaseCard { key: "{idx}", item: item }
                        }
                    }
                }
            }
        }
        Some(Err(message)) => rsx! {
            h1 { class: "p-results__heading", "Search Results" }
            ErrorMessage { message: "{message}" }
        },
        None => rsx! {
            LoadingText { message: "Loading…" }
        },
    }
}

// Server-side stub: the fetch happens in the browser after hydration
#[cfg(not(target_arch = "wasm32"))]
#[component]
fn ResultsView(
    party_name: Option<String>,
    date: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    court: Option<String>,
) -> Element {
    let _ = (party_name, date, start_date, end_date, court);
    rsx! {
        LoadingText { message: "Loading…" }
    }
}

#[component]
fn CaseCard(item: CaseResult) -> Element {
    rsx! {
        div { class: "c-case-card",
            // Header
            div { class: "c-case-card__header",
                h2 { class: "c-case-card__number", "{item.case_number}" }
                span { class: "c-badge", "{item.court}" }
            }

            // Parties
            div { class: "c-case-card__parties",
                p {
                    span { class: "c-case-card__field", "Petitioner:" }
                    " {item.petitioner}"
                }
                p {
                    span { class: "c-case-card__field", "Respondent:" }
                    " {item.respondent}"
                }
            }

            // Meta
            div { class: "c-case-card__meta",
                p { strong { "Advocates: " } {fallback(&item.advocates)} }
                p { strong { "Judge: " } {fallback_opt(&item.judge)} }
                p { strong { "Court No: " } {fallback_opt(&item.court_no)} }
                p { strong { "Date: " } {fallback_opt(&item.date)} }
                p { strong { "Court Time: " } {fallback_opt(&item.court_time)} }
            }

            // Remarks
            if let Some(remarks) = item.remarks.as_ref().filter(|r| !r.is_empty()) {
                div { class: "c-case-card__remarks",
                    p { class: "c-case-card__remarks-title", "Remarks" }
                    p { class: "c-case-card__remarks-body", "{remarks}" }
                }
            }

            // Connected cases
            if !item.with_cases.is_empty() {
                div { class: "c-case-card__with-cases",
                    p { class: "c-case-card__with-cases-title", "Connected / With Cases" }
                    ul {
                        for (idx, with_case) in item.with_cases.iter().enumerate() {
                            li { key: "{idx}",
                                strong { "{with_case.case_number}" }
                                " – {with_case.details}"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn fallback(value: &str) -> String {
    if value.is_empty() {
        "N/A".to_string()
    } else {
        value.to_string()
    }
}

fn fallback_opt(value: &Option<String>) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_replaces_empty() {
        assert_eq!(fallback(""), "N/A");
        assert_eq!(fallback("Mr. X"), "Mr. X");
    }

    #[test]
    fn test_fallback_opt_covers_none_and_empty() {
        assert_eq!(fallback_opt(&None), "N/A");
        assert_eq!(fallback_opt(&Some(String::new())), "N/A");
        assert_eq!(fallback_opt(&Some("Court 4".to_string())), "Court 4");
    }
}
