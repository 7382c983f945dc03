use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalletError {
    #[error("Data fetch failed: {0}")]
    DataFetch(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}
