//! Hex/ASCII dump of raw buffer bytes, laid out like curl's debug callback.
//!
//! Hex mode shows `hex_width` bytes per row with a hex column. Text mode shows
//! `text_width` bytes per row and starts a new row after each CRLF pair.

use af_domain::config::DumpConfig;

const CR: u8 = 0x0d;
const LF: u8 = 0x0a;

/// Dump `bytes` under a `text` heading with the default widths.
pub fn dump(text: &str, bytes: &[u8], hex: bool) -> String {
    Dumper::new(DumpConfig {
        hex,
        ..DumpConfig::default()
    })
    .dump(text, bytes)
}

#[derive(Debug, Clone, Default)]
pub struct Dumper {
    config: DumpConfig,
}

impl Dumper {
    pub fn new(config: DumpConfig) -> Self {
        Self { config }
    }

    pub fn dump(&self, text: &str, bytes: &[u8]) -> String {
        let hex = self.config.hex;
        let width = self.config.width().max(1);
        let size = bytes.len();
        let is_crlf = |at: usize| at + 1 < size && bytes[at] == CR && bytes[at + 1] == LF;

        let mut out = format!("{text}, {size:010} bytes (0x{size:08x})\n");

        let mut i = 0;
        while i < size {
            out.push_str(&format!("{i:04x}: "));

            if hex {
                for c in 0..width {
                    match bytes.get(i + c) {
                        Some(b) => out.push_str(&format!("{b:02x} ")),
                        None => out.push_str("   "),
                    }
                }
            }

            let mut next = i + width;
            let mut c = 0;
            while c < width && i + c < size {
                if !hex && is_crlf(i + c) {
                    next = i + c + 2;
                    break;
                }
                out.push(printable(bytes[i + c]));
                // a CRLF right after this byte ends the row without an extra newline
                if !hex && is_crlf(i + c + 1) {
                    next = i + c + 3;
                    break;
                }
                c += 1;
            }
            out.push('\n');
            i = next;
        }
        out
    }
}

fn printable(b: u8) -> char {
    if (0x20..0x80).contains(&b) {
        char::from(b)
    } else {
        '.'
    }
}
