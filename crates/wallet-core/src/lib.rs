//! Shared domain types for the Stellar Compass agent system.
//!
//! Everything here is consumed by the analysis formulas, the monitors, and the
//! orchestrator. The only I/O seam is [`WalletDataProvider`].

pub mod error;
pub mod mock;
pub mod provider;
pub mod types;

pub use error::WalletError;
pub use mock::MockWalletProvider;
pub use provider::WalletDataProvider;
pub use types::*;
