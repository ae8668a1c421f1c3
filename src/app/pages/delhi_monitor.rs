use dioxus::prelude::*;

use crate::app::components::{Button, ButtonVariant, Card, ErrorMessage};
use crate::domain::models::DelhiStatusRow;
use crate::domain::services::build_status_query;
use crate::shared::logging::{self, LogOperation};
use crate::shared::services::ApiService;
use crate::shared::state::FetchState;

#[component]
pub fn DelhiMonitor() -> Element {
    let mut keyword = use_signal(String::new);
    let mut year = use_signal(String::new);
    let mut results = use_signal(FetchState::<Vec<DelhiStatusRow>>::default);
    let mut form_error = use_signal(|| None::<String>);

    let mut handle_search = move |_| {
        match build_status_query(&keyword(), &year()) {
            Err(e) => form_error.set(Some(e.to_string())),
            Ok(request) => {
                form_error.set(None);
                results.set(FetchState::Loading);

                spawn(async move {
                    let api = ApiService::new();
                    logging::log_search_start(LogOperation::StatusLookup, &request.keyword, "delhi");
                    match api.delhi_status(&request).await {
                        Ok(rows) => {
                            logging::log_search_result(LogOperation::StatusLookup, "delhi", rows.len());
                            results.set(FetchState::Loaded(rows));
                        }
                        Err(e) => {
                            logging::log_backend_error(LogOperation::StatusLookup, &e.to_string());
                            results.set(FetchState::Failed(
                                "Backend error while fetching Delhi case status".to_string(),
                            ));
                        }
                    }
                });
            }
        }
    };

    let mut handle_clear = move |_| {
        keyword.set(String::new());
        year.set(String::new());
        results.set(FetchState::Idle);
        form_error.set(None);
    };

    let state = results();

    rsx! {
        div { class: "p-delhi",
            // Header
            div { class: "p-delhi__header",
                h1 { class: "p-delhi__heading", "🏛️ Delhi High Court Case Status" }
                p { class: "p-delhi__subheading",
                    "Search and view live case-status details from the Delhi High Court by party name and year."
                }
            }

            // Input card
            Card {
                div { class: "c-status-form",
                    label { class: "c-status-form__field",
                        span { class: "c-status-form__label", "Party Name" }
                        input {
                            r#type: "text",
                            class: "c-status-form__input",
                            placeholder: "e.g. XYZ Ltd",
                            value: "{keyword}",
                            oninput: move |evt| keyword.set(evt.value()),
                        }
                    }

                    label { class: "c-status-form__field",
                        span { class: "c-status-form__label", "Case Year" }
                        input {
                            r#type: "text",
                            class: "c-status-form__input",
                            placeholder: "e.g. 2023",
                            value: "{year}",
                            oninput: move |evt| year.set(evt.value()),
                        }
                    }

                    if let Some(error) = form_error() {
                        p { class: "c-status-form__error", "{error}" }
                    }

                    div { class: "c-status-form__actions",
                        Button {
                            disabled: state.is_loading(),
                            onclick: move |evt| handle_search(evt),
                            if state.is_loading() { "Searching…" } else { "▶ Search Case Status" }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            disabled: state.is_loading(),
                            onclick: move |evt| handle_clear(evt),
                            "⟳ Clear"
                        }
                    }
                }
            }

            if let Some(message) = state.error() {
                ErrorMessage { message: "{message}" }
            }

            if state.is_loading() {
                p { class: "p-delhi__loading", "Fetching Delhi High Court case status…" }
            }

            if let Some(rows) = state.loaded() {
                if rows.is_empty() {
                    p { class: "p-delhi__empty",
                        "No case status found. Enter a party name and year, then search."
                    }
                } else {
                    div { class: "c-status-table__wrapper",
                        table { class: "c-status-table",
                            thead {
                                tr {
                                    th { "S.No." }
                                    th { "Case Info" }
                                    th { "Petitioner vs Respondent" }
                                    th { "Advocate" }
                                    th { "Listing Info" }
                                    th { "Court No" }
                                    th { "Order Link" }
                                    th { "Judgment Link" }
                                }
                            }
                            tbody {
                                for (idx, row) in rows.iter().enumerate() {
                                    StatusRow { key: "{idx}", index: idx, row: row.clone() }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatusRow(index: usize, row: DelhiStatusRow) -> Element {
    let serial = row
        .s_no
        .clone()
        .unwrap_or_else(|| (index + 1).to_string());

    rsx! {
        tr { class: "c-status-table__row",
            td { class: "c-status-table__serial", "{serial}" }

            td {
                div { class: "c-status-table__case-number", "{row.case_number}" }
                if let Some(status) = row.status.as_ref().filter(|s| !s.is_empty()) {
                    div { class: "c-status-table__status", "[{status}]" }
                }
            }

            td { class: "c-status-table__parties",
                "{row.petitioner}"
                br {}
                strong { "VS." }
                " {row.respondent}"
            }

            td { {cell(&row.advocates)} }
            td { class: "c-status-table__listing", {cell(&row.listing_info)} }
            td { {cell_opt(&row.court_no)} }

            td {
                if let Some(link) = row.order_link.as_ref().filter(|l| !l.is_empty()) {
                    a {
                        class: "c-status-table__link",
                        href: "{link}",
                        target: "_blank",
                        rel: "noreferrer",
                        "Order(s)"
                    }
                } else {
                    "N/A"
                }
            }

            td {
                if let Some(link) = row.judgment_link.as_ref().filter(|l| !l.is_empty()) {
                    a {
                        class: "c-status-table__link",
                        href: "{link}",
                        target: "_blank",
                        rel: "noreferrer",
                        "Judgment"
                    }
                } else {
                    "N/A"
                }
            }
        }
    }
}

fn cell(value: &str) -> String {
    if value.is_empty() {
        "N/A".to_string()
    } else {
        value.to_string()
    }
}

fn cell_opt(value: &Option<String>) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "N/A".to_string(),
    }
}
