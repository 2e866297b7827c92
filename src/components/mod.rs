//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod client_info;
pub mod dashboard;
pub mod data_view;
pub mod filter_dialog;
pub mod help_dialog;
pub mod keys;
pub mod layout;
pub mod overview;
pub mod profile_dialog;
pub mod quit_dialog;
pub mod recharge_dialog;
pub mod splash;
pub mod table;
pub mod vehicle_lookup_dialog;

pub use client_info::ClientInfoComponent;
pub use dashboard::DashboardRenderContext;
pub use data_view::{DataScreen, DataViewComponent};
pub use filter_dialog::{FilterChoice, FilterDialog};
pub use help_dialog::HelpDialog;
pub use keys::KeysComponent;
pub use layout::{calculate_main_layout, centered_popup};
pub use overview::{OverviewComponent, OverviewSummary};
pub use quit_dialog::QuitDialog;
pub use splash::SplashComponent;
pub use table::TableComponent;
