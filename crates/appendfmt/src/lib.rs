//! Append a separator and formatted text to a growable string.
//!
//! - `append`: the operation itself (separator policy, CR/LF trimming, size checks)
//! - `appender`: a buffer owner that carries configured defaults between appends
//! - `dump`: hex/ASCII dump of a buffer for diagnostics
//! - `macros`: `append_format!` and friends

pub mod append;
pub mod appender;
pub mod dump;
pub mod separator;
pub mod trim;
pub(crate) mod measure;

mod macros;

// Re-exports for convenience.
pub use af_domain::config::LengthLimit;
pub use af_domain::{AppendFlags, Error, Result};
pub use append::{
    append_flags_sep_format, append_flags_sep_format_limited, measure_append,
    measure_append_limited,
};
pub use appender::Appender;
pub use dump::{dump, Dumper};
