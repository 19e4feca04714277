//! Error Types
//!
//! Failures of the collaborators the editor drives. Rejected keystrokes,
//! aborts and interrupts are ordinary outcomes and never appear here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("key source has no more input")]
    ExhaustedInput,
}

pub type Result<T> = std::result::Result<T, ConsoleError>;
