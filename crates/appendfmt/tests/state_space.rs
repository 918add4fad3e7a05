//! Exhaustive check of the append operation against a plain reference model.
//!
//! Enumerates every combination of buffer state, separator, rendered text
//! and flag mask (including unrecognized bits) and compares content, length
//! and the unchanged-on-failure guarantee.

use af_appendfmt::{append_flags_sep_format, dump, measure_append, AppendFlags, Error};

#[derive(Debug, Clone, Copy)]
enum BufState {
    /// No target at all: only the length comes back.
    NoTarget,
    Absent,
    Present(&'static str),
}

const BUFFERS: &[BufState] = &[
    BufState::NoTarget,
    BufState::Absent,
    BufState::Present(""),
    BufState::Present("foo"),
    BufState::Present("foo\r\n\r"),
    BufState::Present("\r\n"),
    BufState::Present("\n\nx\r"),
];

const SEPARATORS: &[Option<&str>] = &[None, Some(""), Some("; "), Some("\r\n")];

const TEXTS: &[&str] = &["", "bar", "bar\r\n", "\r", "\n\n"];

const INVALID_MASKS: &[u32] = &[1 << 4, (1 << 4) | 1, 0xff, 1 << 31];

fn is_crlf(c: char) -> bool {
    c == '\r' || c == '\n'
}

/// The documented behavior, written the slow obvious way.
fn model(buf: Option<&str>, flags: AppendFlags, sep: Option<&str>, text: &str) -> String {
    let old = buf.unwrap_or("");
    let include_sep = sep.is_some()
        && (!old.is_empty() || flags.contains(AppendFlags::SEP_IF_BUFFER_EMPTY))
        && (!text.is_empty() || flags.contains(AppendFlags::SEP_IF_FORMAT_EMPTY));

    let mut out = old.to_string();
    if flags.contains(AppendFlags::TRIM_CRLF_BEFORE) {
        out = out.trim_end_matches(is_crlf).to_string();
    }
    if include_sep {
        out.push_str(sep.unwrap_or_default());
    }
    out.push_str(text);
    if flags.contains(AppendFlags::TRIM_CRLF_AFTER) {
        out = out.trim_end_matches(is_crlf).to_string();
    }
    out
}

fn describe(state: BufState, flags: AppendFlags, sep: Option<&str>, text: &str) -> String {
    let mut msg = format!("state={state:?} flags={flags:?} sep={sep:?}\n");
    msg.push_str(&dump("text", text.as_bytes(), true));
    if let BufState::Present(s) = state {
        msg.push_str(&dump("buffer", s.as_bytes(), true));
    }
    msg
}

#[test]
fn every_valid_combination_matches_model() {
    let mut checked = 0;
    for &state in BUFFERS {
        for &sep in SEPARATORS {
            for &text in TEXTS {
                for bits in 0..16u32 {
                    let flags = AppendFlags::from_bits(bits).unwrap();
                    let ctx = describe(state, flags, sep, text);

                    match state {
                        BufState::NoTarget => {
                            let expected = model(None, flags, sep, text);
                            let len =
                                append_flags_sep_format(None, flags, sep, format_args!("{text}"))
                                    .unwrap();
                            assert_eq!(len, expected.len(), "{ctx}");
                        }
                        BufState::Absent | BufState::Present(_) => {
                            let initial = match state {
                                BufState::Present(s) => Some(s.to_string()),
                                _ => None,
                            };
                            let expected = model(initial.as_deref(), flags, sep, text);

                            let predicted =
                                measure_append(initial.as_deref(), flags, sep, format_args!("{text}"))
                                    .unwrap();

                            let mut buf = initial.clone();
                            let len = append_flags_sep_format(
                                Some(&mut buf),
                                flags,
                                sep,
                                format_args!("{text}"),
                            )
                            .unwrap();

                            let got = buf.as_deref().unwrap_or("<absent>");
                            assert_eq!(
                                got,
                                expected,
                                "{ctx}{}",
                                dump("result", got.as_bytes(), true)
                            );
                            assert_eq!(len, expected.len(), "{ctx}");
                            assert_eq!(predicted, len, "{ctx}");
                        }
                    }
                    checked += 1;
                }
            }
        }
    }
    assert_eq!(checked, BUFFERS.len() * SEPARATORS.len() * TEXTS.len() * 16);
}

#[test]
fn every_invalid_mask_leaves_buffer_untouched() {
    for &state in BUFFERS {
        for &bits in INVALID_MASKS {
            let flags = AppendFlags::from_bits_retain(bits);
            match state {
                BufState::NoTarget => {
                    let err = append_flags_sep_format(None, flags, Some("; "), format_args!("bar"))
                        .unwrap_err();
                    assert_eq!(err.code(), -2);
                }
                BufState::Absent | BufState::Present(_) => {
                    let mut buf = match state {
                        BufState::Present(s) => Some(s.to_string()),
                        _ => None,
                    };
                    let before = buf.clone();
                    let before_ptr = buf.as_ref().map(|s| s.as_ptr());

                    let err = append_flags_sep_format(
                        Some(&mut buf),
                        flags,
                        Some("; "),
                        format_args!("bar"),
                    )
                    .unwrap_err();

                    assert!(matches!(err, Error::InvalidFlags(_)), "{state:?} {bits:#x}");
                    assert_eq!(buf, before);
                    assert_eq!(buf.as_ref().map(|s| s.as_ptr()), before_ptr);
                }
            }
        }
    }
}

#[test]
fn trimming_twice_changes_nothing() {
    for &state in BUFFERS {
        let BufState::Present(s) = state else {
            continue;
        };
        let mut once = Some(s.to_string());
        append_flags_sep_format(
            Some(&mut once),
            AppendFlags::TRIM_CRLF_AFTER,
            None,
            format_args!(""),
        )
        .unwrap();

        let mut twice = once.clone();
        append_flags_sep_format(
            Some(&mut twice),
            AppendFlags::TRIM_CRLF_BOTH,
            None,
            format_args!(""),
        )
        .unwrap();

        assert_eq!(once, twice, "{}", dump("buffer", s.as_bytes(), false));
    }
}
