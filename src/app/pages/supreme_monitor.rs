use dioxus::prelude::*;

use crate::app::components::{Button, ButtonVariant, Card, ErrorMessage, LoadingText};
use crate::domain::models::{MonitorReport, PdfLink, SavedMonitor, SearchMode};
use crate::domain::services::{build_monitor_query, JudgmentSnippet};
use crate::shared::logging::{self, LogOperation};
use crate::shared::services::ApiService;
use crate::shared::state::FetchState;

#[component]
pub fn SupremeMonitor() -> Element {
    let mut keyword = use_signal(String::new);
    let mut mode = use_signal(SearchMode::default);
    let mut monitor = use_signal(FetchState::<MonitorReport>::default);
    let mut form_error = use_signal(|| None::<String>);

    let mut saved_files = use_signal(Vec::<String>::new);
    let mut loading_saved = use_signal(|| false);
    let mut selected_saved = use_signal(|| None::<SavedMonitor>);

    let mut selected_cases = use_signal(Vec::<usize>::new);
    let mut downloading = use_signal(|| false);
    let mut download_error = use_signal(|| None::<String>);
    let mut downloaded_pdfs = use_signal(Vec::<PdfLink>::new);

    let mut expanded = use_signal(|| None::<usize>);

    // ---------------- RUN MONITOR ----------------

    let mut run_monitor = move |_| {
        match build_monitor_query(&keyword(), Some(mode())) {
            Err(e) => form_error.set(Some(e.to_string())),
            Ok(request) => {
                form_error.set(None);
                download_error.set(None);
                monitor.set(FetchState::Loading);
                selected_cases.write().clear();
                downloaded_pdfs.write().clear();
                expanded.set(None);

                spawn(async move {
                    let api = ApiService::new();
                    match api.run_monitor(&request).await {
                        Ok(report) => {
                            logging::log_monitor_result(
                                &request.keyword,
                                report.new_items.len(),
                                report.file.as_deref(),
                            );
                            monitor.set(FetchState::Loaded(report));
                        }
                        Err(e) => {
                            logging::log_backend_error(LogOperation::MonitorRun, &e.to_string());
                            monitor.set(FetchState::Failed("Backend error".to_string()));
                        }
                    }
                });
            }
        }
    };

    // ---------------- SAVED MONITORS ----------------

    let mut load_saved_files = move |_| {
        loading_saved.set(true);
        spawn(async move {
            let api = ApiService::new();
            match api.saved_monitors().await {
                Ok(list) => saved_files.set(list.files),
                Err(e) => {
                    logging::log_backend_error(LogOperation::SavedMonitors, &e.to_string());
                }
            }
            loading_saved.set(false);
        });
    };

    let on_open_saved = move |filename: String| {
        loading_saved.set(true);
        spawn(async move {
            let api = ApiService::new();
            match api.open_saved_monitor(&filename).await {
                Ok(saved) => selected_saved.set(Some(saved)),
                Err(e) => {
                    logging::log_backend_error(LogOperation::SavedMonitors, &e.to_string());
                }
            }
            loading_saved.set(false);
        });
    };

    let on_saved_deleted = move |filename: String| {
        saved_files.write().retain(|f| f != &filename);
        if selected_saved
            .read()
            .as_ref()
            .is_some_and(|saved| saved.file == filename)
        {
            selected_saved.set(None);
        }
    };

    // ---------------- DOWNLOAD SELECTED ----------------

    let mut download_selected = move |_| {
        let FetchState::Loaded(report) = monitor() else {
            return;
        };
        let indices = selected_cases();
        if indices.is_empty() {
            download_error.set(Some("Select at least one case to download".to_string()));
            return;
        }
        let Some(filename) = report.file else {
            download_error.set(Some("This monitor run has no saved file to download from".to_string()));
            return;
        };

        download_error.set(None);
        downloading.set(true);
        spawn(async move {
            let api = ApiService::new();
            // One request per case, sequentially; failed items are dropped
            let links = api.download_selected(&filename, &indices).await;
            downloaded_pdfs.set(links);
            downloading.set(false);
        });
    };

    // ---------------- SELECTION / EXPANSION ----------------

    let on_toggle_case = move |case_number: usize| {
        let mut selected = selected_cases.write();
        if let Some(position) = selected.iter().position(|&n| n == case_number) {
            selected.remove(position);
        } else {
            selected.push(case_number);
        }
    };

    let on_toggle_expand = move |index: usize| {
        expanded.set(if expanded() == Some(index) {
            None
        } else {
            Some(index)
        });
    };

    let report = monitor();

    rsx! {
        div { class: "p-monitor",
            // Header
            div { class: "p-monitor__header",
                div {
                    h1 { class: "p-monitor__heading", "Supreme Court – Judgment Monitor" }
                    p { class: "p-monitor__subheading", "Monitor, download & view judgments." }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |evt| load_saved_files(evt),
                    "📂 Refresh Saved"
                }
            }

            div { class: "p-monitor__columns",
                // Left: form + live results
                div { class: "p-monitor__main",
                    Card { title: "🔍 Start Monitoring",
                        div { class: "c-monitor-form",
                            input {
                                r#type: "text",
                                class: "c-monitor-form__input",
                                placeholder: "Enter party name, company or keyword",
                                value: "{keyword}",
                                oninput: move |evt| keyword.set(evt.value()),
                            }

                            div { class: "c-monitor-form__modes",
                                for option in [SearchMode::Phrase, SearchMode::AllWords, SearchMode::AnyWords] {
                                    ModeButton {
                                        key: "{option.as_str()}",
                                        option: option,
                                        current: mode(),
                                        on_select: move |selected| mode.set(selected),
                                    }
                                }
                            }

                            if let Some(error) = form_error() {
                                p { class: "c-monitor-form__error", "{error}" }
                            }

                            Button {
                                disabled: report.is_loading(),
                                onclick: move |evt| run_monitor(evt),
                                if report.is_loading() { "Scanning Supreme Court…" } else { "🚀 Run Monitor" }
                            }
                        }
                    }

                    if let Some(message) = report.error() {
                        ErrorMessage { message: "{message}" }
                    }

                    // "Up to date" banner: a distinct state, not an empty list
                    if let Some(loaded) = report.loaded() {
                        if loaded.has_no_new_judgments() {
                            div { class: "c-no-new-banner",
                                span { "✅" }
                                span { "{loaded.no_new_banner()}" }
                            }
                        }

                        if !loaded.new_items.is_empty() {
                            Card {
                                div { class: "c-live-results__header",
                                    p { class: "c-live-results__title", "📑 Live Results" }
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        disabled: downloading(),
                                        onclick: move |evt| download_selected(evt),
                                        if downloading() { "Downloading…" } else { "📥 Download Selected" }
                                    }
                                }

                                if let Some(error) = download_error() {
                                    p { class: "c-live-results__error", "{error}" }
                                }

                                div { class: "c-live-results__list",
                                    for (index, item) in loaded.new_items.iter().enumerate() {
                                        JudgmentItem {
                                            key: "{index}",
                                            index: index,
                                            text: item.clone(),
                                            selected: selected_cases.read().contains(&(index + 1)),
                                            expanded: expanded() == Some(index),
                                            on_toggle_select: on_toggle_case,
                                            on_toggle_expand: on_toggle_expand,
                                        }
                                    }
                                }
                            }
                        }
                    }

                    if !downloaded_pdfs.read().is_empty() {
                        Card { title: "📄 Downloaded PDFs",
                            div { class: "c-pdf-list",
                                for (idx, pdf) in downloaded_pdfs.read().iter().enumerate() {
                                    div { key: "{idx}", class: "c-pdf-list__row",
                                        span { class: "c-pdf-list__file", "{pdf.file}" }
                                        a {
                                            class: "c-pdf-list__link",
                                            href: "{pdf.url}",
                                            target: "_blank",
                                            rel: "noreferrer",
                                            "View PDF ↗"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                // Right: saved monitors
                div { class: "p-monitor__side",
                    Card { title: "📂 Saved Monitors",
                        if loading_saved() {
                            LoadingText { message: "Loading saved monitors…" }
                        } else if saved_files.read().is_empty() {
                            p { class: "c-saved-list__hint",
                                "No saved monitors loaded. Use Refresh Saved to fetch them."
                            }
                        } else {
                            div { class: "c-saved-list",
                                for file in saved_files() {
                                    SavedMonitorRow {
                                        key: "{file}",
                                        filename: file.clone(),
                                        on_open: on_open_saved,
                                        on_deleted: on_saved_deleted,
                                    }
                                }
                            }
                        }
                    }

                    if let Some(saved) = selected_saved() {
                        Card { title: "{saved.file}",
                            div { class: "c-saved-results",
                                for (index, item) in saved.results.iter().enumerate() {
                                    div { key: "{index}", class: "c-saved-results__item",
                                        span { class: "c-badge", "#{index + 1}" }
                                        p { class: "c-saved-results__text", "{item}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Keyword mode selector button. The selected mode renders as primary.
#[component]
fn ModeButton(
    option: SearchMode,
    current: SearchMode,
    on_select: EventHandler<SearchMode>,
) -> Element {
    let variant = if option == current {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Outline
    };

    rsx! {
        Button {
            variant: variant,
            title: "{option.hint()}",
            onclick: move |_| on_select.call(option),
            "{option.label()}"
        }
    }
}

/// One live judgment result with checkbox selection and expandable body.
/// Case numbering shown to the user (and sent to the download endpoint) is
/// 1-based.
#[component]
fn JudgmentItem(
    index: usize,
    text: String,
    selected: bool,
    expanded: bool,
    on_toggle_select: EventHandler<usize>,
    on_toggle_expand: EventHandler<usize>,
) -> Element {
    let snippet = JudgmentSnippet::parse(&text);
    let case_number = index + 1;

    rsx! {
        div { class: "c-judgment",
            input {
                r#type: "checkbox",
                class: "c-judgment__checkbox",
                checked: selected,
                onchange: move |_| on_toggle_select.call(case_number),
            }

            div { class: "c-judgment__content",
                div { class: "c-judgment__title-row",
                    span { class: "c-badge", "#{case_number}" }
                    h3 { class: "c-judgment__title", "{snippet.title}" }
                }

                p { class: "c-judgment__meta", "{snippet.meta}" }

                if expanded {
                    p { class: "c-judgment__body", "{snippet.body}" }
                }

                button {
                    class: "c-judgment__toggle",
                    onclick: move |_| on_toggle_expand.call(index),
                    if expanded { "Hide details ▲" } else { "View details ▼" }
                }
            }
        }
    }
}

/// Saved monitor file row with inline delete confirmation.
#[component]
fn SavedMonitorRow(
    filename: String,
    on_open: EventHandler<String>,
    on_deleted: EventHandler<String>,
) -> Element {
    let mut show_confirm = use_signal(|| false);
    let mut is_deleting = use_signal(|| false);

    let filename_for_open = filename.clone();
    let filename_for_delete = filename.clone();

    rsx! {
        div { class: "c-saved-row",
            button {
                class: "c-saved-row__open",
                onclick: move |_| on_open.call(filename_for_open.clone()),
                "📄 {filename}"
            }

            if *show_confirm.read() {
                span { class: "c-saved-row__confirm-text", "Delete?" }
                button {
                    class: "c-saved-row__confirm c-saved-row__confirm--danger",
                    disabled: *is_deleting.read(),
                    onclick: move |_| {
                        let filename = filename_for_delete.clone();
                        is_deleting.set(true);
                        spawn(async move {
                            let api = ApiService::new();
                            match api.delete_saved_monitor(&filename).await {
                                Ok(()) => on_deleted.call(filename),
                                Err(e) => {
                                    logging::log_backend_error(
                                        LogOperation::SavedMonitors,
                                        &e.to_string(),
                                    );
                                    is_deleting.set(false);
                                    show_confirm.set(false);
                                }
                            }
                        });
                    },
                    if *is_deleting.read() { "…" } else { "Yes" }
                }
                button {
                    class: "c-saved-row__confirm",
                    onclick: move |_| show_confirm.set(false),
                    "No"
                }
            } else {
                button {
                    class: "c-saved-row__delete",
                    onclick: move |_| show_confirm.set(true),
                    "🗑️"
                }
            }
        }
    }
}
