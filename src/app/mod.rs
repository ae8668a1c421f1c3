pub mod components;
pub mod pages;
pub mod routes;

// Re-export the CasePulse App
pub use routes::App;
