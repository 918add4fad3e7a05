//! Option bits accepted by the append operation.
//!
//! `AppendFlags` is a plain `u32` mask. Unknown bits can be carried (via
//! [`AppendFlags::from_bits_retain`]) so callers forwarding raw masks get an
//! `InvalidFlags` error instead of silent truncation.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AppendFlags(u32);

impl AppendFlags {
    pub const NONE: Self = Self(0);

    /// Remove all trailing CR and LF from the buffer before appending.
    pub const TRIM_CRLF_BEFORE: Self = Self(1 << 0);

    /// Remove all trailing CR and LF from the buffer after appending.
    pub const TRIM_CRLF_AFTER: Self = Self(1 << 1);

    /// Append the separator even if the buffer is absent or empty.
    pub const SEP_IF_BUFFER_EMPTY: Self = Self(1 << 2);

    /// Append the separator even if the rendered text is empty.
    pub const SEP_IF_FORMAT_EMPTY: Self = Self(1 << 3);

    pub const TRIM_CRLF_BOTH: Self = Self(Self::TRIM_CRLF_BEFORE.0 | Self::TRIM_CRLF_AFTER.0);

    pub const SEP_ALWAYS: Self = Self(Self::SEP_IF_BUFFER_EMPTY.0 | Self::SEP_IF_FORMAT_EMPTY.0);

    /// Every recognized bit. Grows as flags are added.
    pub const ALL: Self = Self(Self::TRIM_CRLF_BOTH.0 | Self::SEP_ALWAYS.0);

    /// Build from a raw mask, rejecting unrecognized bits.
    pub fn from_bits(bits: u32) -> Result<Self> {
        Self::from_bits_retain(bits).validate()
    }

    /// Build from a raw mask without checking it.
    pub const fn from_bits_retain(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Bits outside [`AppendFlags::ALL`].
    pub const fn unknown_bits(self) -> u32 {
        self.0 & !Self::ALL.0
    }

    pub fn validate(self) -> Result<Self> {
        match self.unknown_bits() {
            0 => Ok(self),
            unknown => Err(Error::InvalidFlags(unknown)),
        }
    }

    /// Names of the recognized bits that are set, in bit order.
    pub fn names(self) -> Vec<FlagName> {
        FlagName::ALL
            .iter()
            .copied()
            .filter(|name| self.contains(name.flag()))
            .collect()
    }
}

impl BitOr for AppendFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for AppendFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for AppendFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Debug for AppendFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        for name in self.names() {
            set.entry(&name);
        }
        if self.unknown_bits() != 0 {
            set.entry(&format_args!("{:#x}", self.unknown_bits()));
        }
        set.finish()
    }
}

impl FromIterator<FlagName> for AppendFlags {
    fn from_iter<I: IntoIterator<Item = FlagName>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::NONE, |acc, name| acc | name.flag())
    }
}

/// Config-facing name of a single flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagName {
    TrimCrlfBefore,
    TrimCrlfAfter,
    SepIfBufferEmpty,
    SepIfFormatEmpty,
}

impl FlagName {
    pub const ALL: [FlagName; 4] = [
        FlagName::TrimCrlfBefore,
        FlagName::TrimCrlfAfter,
        FlagName::SepIfBufferEmpty,
        FlagName::SepIfFormatEmpty,
    ];

    pub const fn flag(self) -> AppendFlags {
        match self {
            FlagName::TrimCrlfBefore => AppendFlags::TRIM_CRLF_BEFORE,
            FlagName::TrimCrlfAfter => AppendFlags::TRIM_CRLF_AFTER,
            FlagName::SepIfBufferEmpty => AppendFlags::SEP_IF_BUFFER_EMPTY,
            FlagName::SepIfFormatEmpty => AppendFlags::SEP_IF_FORMAT_EMPTY,
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
