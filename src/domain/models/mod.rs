// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod case;
pub mod cerc;
pub mod delhi;
pub mod monitor;
pub mod query;

pub use case::{CaseResult, WithCase};
pub use cerc::{CercReport, CercRow};
pub use delhi::DelhiStatusRow;
pub use monitor::{
    DownloadReceipt, DownloadRequest, MonitorReport, PdfLink, SavedMonitor, SavedMonitorList,
};
pub use query::{
    CercSearchRequest, Court, DelhiStatusRequest, MonitorRequest, RangeSearchRequest, SearchMode,
    SingleDateSearchRequest,
};
