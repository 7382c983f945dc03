//! Autonomous monitoring agents for a Stellar wallet.
//!
//! Six independently scheduled monitors watch wallet state on their own
//! cadences and emit [`notification_service::Alert`]s into the
//! [`AgentOrchestrator`], which keeps a bounded alert history and routes each
//! alert to the enabled notification channels by priority.

pub mod error;
pub mod history;
pub mod monitor;
pub mod monitors;
pub mod orchestrator;
pub mod router;
pub mod settings;

pub use error::AgentError;
pub use history::{AlertHistory, HISTORY_CAPACITY};
pub use monitor::{AlertSink, Monitor, MonitorRunner};
pub use orchestrator::{AgentOrchestrator, MonitorIntervals};
pub use router::NotificationRouter;
pub use settings::{AgentSettings, SettingsUpdate, SharedSettings};
