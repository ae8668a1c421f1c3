// Business logic services
// Framework-agnostic, 100% testable

pub mod judgment;
pub mod query_builder;

pub use judgment::JudgmentSnippet;
pub use query_builder::{
    build_date_range_query, build_month_party_query, build_monitor_query, build_single_date_query,
    build_status_query, format_court_date, format_court_date_tag, ValidationError,
};
