#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Generic(String),
    #[error("Encoding error: {0}")]
    EncodingError(#[from] volund_core::volund_common::error::Error),
    #[error("Transaction error: {0}")]
    TransactionError(#[from] volund_core::volund_tx::error::Error),
}
