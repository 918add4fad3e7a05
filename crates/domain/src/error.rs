use std::collections::TryReserveError;

/// Shared error type used across the append-format crates.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("unrecognized flag bits: {0:#x}")]
    InvalidFlags(u32),

    #[error("format: {0}")]
    Format(String),

    #[error("allocation: {0}")]
    Allocation(#[from] TryReserveError),

    #[error("length would exceed limit of {limit} bytes")]
    Overflow { limit: usize },

    #[error("IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("config: {0}")]
    Config(String),
}

impl Error {
    /// Negative status code for callers that speak the integer contract:
    /// `-2` for unrecognized flags, `-1` for every other failure.
    pub fn code(&self) -> i32 {
        match self {
            Error::InvalidFlags(_) => -2,
            _ => -1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
