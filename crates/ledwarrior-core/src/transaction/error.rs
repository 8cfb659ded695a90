use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("bridge did not close the transaction within {window:?}")]
    Timeout { window: Duration },
}
