//! Side-effecting operations behind the dashboard
//!
//! - CSV export files
//! - Vehicle registration lookup
//! - API key generation
//! - Wallet recharge requests

pub mod export;
pub mod keygen;
pub mod recharge;
pub mod vehicle_lookup;

pub use export::save_export;
pub use keygen::generate_key;
pub use recharge::{request_recharge, RechargeOutcome};
pub use vehicle_lookup::{lookup, LookupOutcome};
