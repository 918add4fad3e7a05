pub mod config;
pub mod error;
pub mod flags;

pub use error::{Error, Result};
pub use flags::{AppendFlags, FlagName};
