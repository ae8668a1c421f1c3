use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::app::components::{Button, Card};
use crate::app::routes::Route;
use crate::domain::models::Court;
use crate::domain::services::build_date_range_query;

/// Date inputs always produce ISO dates; parse failures behave like an
/// unselected date and trip the "missing date range" validation.
fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    let mut party_name = use_signal(String::new);
    let mut start_date = use_signal(String::new);
    let mut end_date = use_signal(String::new);
    let mut court = use_signal(|| Court::Supreme);
    let mut form_error = use_signal(|| None::<String>);

    let mut handle_search = move |_| {
        let start = parse_input_date(&start_date());
        let end = parse_input_date(&end_date());

        match build_date_range_query(&party_name(), start, end, court()) {
            Ok(request) => {
                form_error.set(None);
                nav.push(Route::Results {
                    partyName: Some(request.party_name),
                    date: None,
                    startDate: Some(request.start_date),
                    endDate: Some(request.end_date),
                    court: Some(request.court),
                });
            }
            Err(e) => {
                // Surfaced inline; nothing reaches the backend
                form_error.set(Some(e.to_string()));
            }
        }
    };

    rsx! {
        div { class: "p-home",
            // Hero
            div { class: "p-home__hero",
                h1 { class: "p-home__headline",
                    "Litigation Intelligence,"
                    br {}
                    span { class: "p-home__headline-accent", "Simplified." }
                }
                p { class: "p-home__tagline",
                    "Track hearings and monitor cases across the Supreme Court, Delhi High Court, Bombay High Court and NCLAT."
                }
            }

            // Search card
            Card {
                div { class: "c-search-form",
                    div { class: "c-search-form__field",
                        span { class: "c-search-form__field-icon", "🔍" }
                        input {
                            r#type: "text",
                            class: "c-search-form__input",
                            placeholder: "Party Name or Case No. (e.g. Union of India, APL/928/2022)",
                            value: "{party_name}",
                            oninput: move |evt| party_name.set(evt.value()),
                        }
                    }

                    div { class: "c-search-form__dates",
                        label { class: "c-search-form__date",
                            span { class: "c-search-form__label", "Start Date" }
                            input {
                                r#type: "date",
                                class: "c-search-form__input",
                                value: "{start_date}",
                                oninput: move |evt| start_date.set(evt.value()),
                            }
                        }
                        label { class: "c-search-form__date",
                            span { class: "c-search-form__label", "End Date" }
                            input {
                                r#type: "date",
                                class: "c-search-form__input",
                                value: "{end_date}",
                                oninput: move |evt| end_date.set(evt.value()),
                            }
                        }
                    }

                    // Court selector grid
                    div { class: "c-court-grid",
                        for option in Court::selectable() {
                            button {
                                key: "{option.as_str()}",
                                class: "c-court-grid__item",
                                class: if court() == option { "c-court-grid__item--selected" },
                                onclick: move |_| court.set(option),
                                span { class: "c-court-grid__icon", "{option.icon()}" }
                                span { class: "c-court-grid__label", "{option.label()}" }
                            }
                        }
                    }

                    if let Some(error) = form_error() {
                        p { class: "c-search-form__error", "{error}" }
                    }

                    Button {
                        onclick: move |evt| handle_search(evt),
                        "Search Cases"
                    }
                }
            }
        }
    }
}
