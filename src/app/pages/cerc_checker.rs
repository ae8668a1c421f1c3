use dioxus::prelude::*;

use crate::app::components::{Button, Card, ErrorMessage, LoadingText};
use crate::domain::models::CercRow;
use crate::domain::services::build_month_party_query;
use crate::shared::logging::{self, LogOperation};
use crate::shared::services::ApiService;
use crate::shared::state::FetchState;

#[component]
pub fn CercChecker() -> Element {
    let mut month = use_signal(String::new);
    let mut party = use_signal(String::new);
    let mut results = use_signal(FetchState::<Vec<CercRow>>::default);
    let mut form_error = use_signal(|| None::<String>);

    let mut run_check = move |_| {
        match build_month_party_query(&month(), &party()) {
            Err(e) => form_error.set(Some(e.to_string())),
            Ok(request) => {
                form_error.set(None);
                results.set(FetchState::Loading);

                spawn(async move {
                    let api = ApiService::new();
                    logging::log_search_start(LogOperation::CauseListCheck, &request.party, "cerc");
                    match api.cerc_search(&request).await {
                        Ok(report) => {
                            logging::log_search_result(
                                LogOperation::CauseListCheck,
                                "cerc",
                                report.results.len(),
                            );
                            results.set(FetchState::Loaded(report.results));
                        }
                        Err(e) => {
                            logging::log_backend_error(LogOperation::CauseListCheck, &e.to_string());
                            results.set(FetchState::Failed("Backend error".to_string()));
                        }
                    }
                });
            }
        }
    };

    let state = results();

    rsx! {
        div { class: "p-cerc",
            h1 { class: "p-cerc__heading", "CERC Cause List Checker" }

            Card {
                div { class: "c-cerc-form",
                    input {
                        r#type: "text",
                        class: "c-cerc-form__input",
                        placeholder: "Month (e.g. February)",
                        value: "{month}",
                        oninput: move |evt| month.set(evt.value()),
                    }

                    input {
                        r#type: "text",
                        class: "c-cerc-form__input",
                        placeholder: "Petitioner name",
                        value: "{party}",
                        oninput: move |evt| party.set(evt.value()),
                    }

                    if let Some(error) = form_error() {
                        p { class: "c-cerc-form__error", "{error}" }
                    }

                    Button {
                        disabled: state.is_loading(),
                        onclick: move |evt| run_check(evt),
                        if state.is_loading() { "Running…" } else { "Run CERC Check" }
                    }
                }
            }

            if state.is_loading() {
                LoadingText { message: "Scanning cause lists…" }
            }

            if let Some(message) = state.error() {
                ErrorMessage { message: "{message}" }
            }

            if let Some(rows) = state.loaded() {
                if rows.is_empty() {
                    p { class: "p-cerc__empty", "No cause-list entries matched." }
                } else {
                    div { class: "p-cerc__results",
                        for (idx, row) in rows.iter().enumerate() {
                            CercCard { key: "{idx}", row: row.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CercCard(row: CercRow) -> Element {
    let hearing_date = row
        .hearing_date_if_present
        .clone()
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| "N/A".to_string());

    rsx! {
        div { class: "c-cerc-card",
            p { strong { "S. No: " } "{row.sno}" }
            p { strong { "Petition: " } "{row.petition_no}" }
            p { strong { "Petitioner: " } "{row.petitioner}" }
            p { strong { "Subject: " } "{row.subject}" }
            p { strong { "Date: " } "{hearing_date}" }
            p { class: "c-cerc-card__source", "{row.source_pdf} — page {row.page}" }
        }
    }
}
