// Shared services
// ApiService compiles for both targets; requests are only ever issued from
// the browser (form handlers and the Results fetch), never during SSR.
pub mod api_service;

pub use api_service::ApiService;
