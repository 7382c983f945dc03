use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Monitor '{0}' is already running")]
    AlreadyRunning(String),

    #[error("Agents are already active for this wallet")]
    AlreadyActive,
}
