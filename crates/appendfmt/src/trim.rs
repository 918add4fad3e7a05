//! Trailing CR/LF trimming on raw bytes.
//!
//! Only 0x0D and 0x0A are considered. Both are ASCII, so cutting a `String`
//! at the start of the run always lands on a char boundary.

const CR: u8 = b'\r';
const LF: u8 = b'\n';

/// Length of the maximal trailing run of CR and LF bytes, in any mixture.
pub fn trailing_crlf_len(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .rev()
        .take_while(|&&b| b == CR || b == LF)
        .count()
}

/// Remove the trailing CR/LF run from `s`. Returns how many bytes went.
pub fn trim_crlf(s: &mut String) -> usize {
    let n = trailing_crlf_len(s.as_bytes());
    s.truncate(s.len() - n);
    n
}
