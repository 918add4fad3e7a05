use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Diagnostic dump layout
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DumpConfig {
    /// Show a hex column next to the printable column.
    #[serde(default = "d_true")]
    pub hex: bool,
    /// Bytes per row when `hex` is on.
    #[serde(default = "d_16")]
    pub hex_width: usize,
    /// Bytes per row when `hex` is off.
    #[serde(default = "d_64")]
    pub text_width: usize,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            hex: true,
            hex_width: 16,
            text_width: 64,
        }
    }
}

impl DumpConfig {
    pub fn width(&self) -> usize {
        if self.hex {
            self.hex_width
        } else {
            self.text_width
        }
    }
}

// ── serde default helpers ───────────────────────────────────────────

fn d_true() -> bool {
    true
}
fn d_16() -> usize {
    16
}
fn d_64() -> usize {
    64
}
