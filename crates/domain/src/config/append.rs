use serde::{Deserialize, Serialize};

use crate::flags::{AppendFlags, FlagName};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Append defaults
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Defaults applied by a persistent appender.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppendConfig {
    /// Flags applied to every append that does not pass its own.
    #[serde(default)]
    pub flags: Vec<FlagName>,
    /// Separator placed between appended pieces.
    #[serde(default)]
    pub separator: Option<String>,
    #[serde(default)]
    pub length_limit: LengthLimit,
}

impl AppendConfig {
    pub fn flags(&self) -> AppendFlags {
        self.flags.iter().copied().collect()
    }
}

/// Upper bound on the size of an appended buffer, counting one terminator
/// slot on top of the content length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LengthLimit {
    /// `i32::MAX`, for consumers that store lengths as a signed 32-bit int.
    #[default]
    I32,
    /// `isize::MAX`, the largest allocation Rust permits.
    Native,
    /// Explicit cap in bytes.
    Bytes(usize),
}

impl LengthLimit {
    /// Largest permitted total size, terminator slot included.
    pub fn max_total(self) -> usize {
        match self {
            LengthLimit::I32 => usize::try_from(i32::MAX).unwrap_or(usize::MAX),
            LengthLimit::Native => isize::MAX.unsigned_abs(),
            LengthLimit::Bytes(n) => n,
        }
    }
}
