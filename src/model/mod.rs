//! Model layer - records, the table engine, and presentation state
//!
//! - `table` - generic filter / paginate / export engine (`TableView`)
//! - `log`, `payment`, `vehicle` - the tabular datasets
//! - `client`, `api_key` - account data shown outside the tables
//! - `ModalStack` - modal overlay management

pub mod api_key;
pub mod client;
pub mod log;
pub mod modal;
pub mod payment;
pub mod table;
pub mod ui;
pub mod vehicle;

// Re-export commonly used types
pub use api_key::ApiKeys;
pub use client::ClientInfo;
pub use log::ApiLog;
pub use payment::Payment;
pub use table::{Dataset, ExportQuoting, StatCard, StatSummary, TableView};
pub use ui::DashboardView;
pub use vehicle::VehicleRecord;
