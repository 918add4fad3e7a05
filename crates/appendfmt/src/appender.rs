use std::fmt;

use af_domain::config::{AppendConfig, LengthLimit};
use af_domain::{AppendFlags, Result};

use crate::append::{append_flags_sep_format_limited, measure_append_limited};

/// Owns a buffer across many appends and applies configured defaults.
///
/// A failed append leaves the held buffer untouched.
#[derive(Debug, Clone, Default)]
pub struct Appender {
    buf: Option<String>,
    pub flags: AppendFlags,
    pub separator: Option<String>,
    pub length_limit: LengthLimit,
}

impl Appender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &AppendConfig) -> Self {
        Self {
            buf: None,
            flags: config.flags(),
            separator: config.separator.clone(),
            length_limit: config.length_limit,
        }
    }

    /// Start from existing content instead of an absent buffer.
    pub fn with_buffer(mut self, buf: impl Into<String>) -> Self {
        self.buf = Some(buf.into());
        self
    }

    /// Append using the configured flags and separator.
    pub fn append(&mut self, args: fmt::Arguments<'_>) -> Result<usize> {
        append_flags_sep_format_limited(
            Some(&mut self.buf),
            self.flags,
            self.separator.as_deref(),
            args,
            self.length_limit,
        )
    }

    /// Append with explicit flags and separator, ignoring the defaults.
    pub fn append_with(
        &mut self,
        flags: AppendFlags,
        sep: Option<&str>,
        args: fmt::Arguments<'_>,
    ) -> Result<usize> {
        append_flags_sep_format_limited(Some(&mut self.buf), flags, sep, args, self.length_limit)
    }

    /// Length the buffer would have after `append(args)`, without appending.
    pub fn measure(&self, args: fmt::Arguments<'_>) -> Result<usize> {
        measure_append_limited(
            self.buf.as_deref(),
            self.flags,
            self.separator.as_deref(),
            args,
            self.length_limit,
        )
    }

    pub fn as_str(&self) -> Option<&str> {
        self.buf.as_deref()
    }

    pub fn len(&self) -> usize {
        self.buf.as_ref().map_or(0, String::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True until the first successful append (or `with_buffer`).
    pub fn is_absent(&self) -> bool {
        self.buf.is_none()
    }

    /// Hand the buffer out and go back to absent.
    pub fn take(&mut self) -> Option<String> {
        self.buf.take()
    }

    /// Empty the buffer but keep it present.
    pub fn clear(&mut self) {
        if let Some(buf) = self.buf.as_mut() {
            buf.clear();
        }
    }

    pub fn into_inner(self) -> Option<String> {
        self.buf
    }
}
