use af_domain::AppendFlags;

/// Separator-suppression policy.
///
/// The separator goes in only when one was given, the buffer already has
/// content (or `SEP_IF_BUFFER_EMPTY`), and the rendered text is non-empty
/// (or `SEP_IF_FORMAT_EMPTY`). `buffer_len` is measured before any trim.
pub fn effective_separator<'a>(
    sep: Option<&'a str>,
    flags: AppendFlags,
    buffer_len: usize,
    rendered_len: usize,
) -> &'a str {
    match sep {
        Some(sep)
            if (buffer_len > 0 || flags.contains(AppendFlags::SEP_IF_BUFFER_EMPTY))
                && (rendered_len > 0 || flags.contains(AppendFlags::SEP_IF_FORMAT_EMPTY)) =>
        {
            sep
        }
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEP: Option<&str> = Some("; ");

    #[test]
    fn absent_separator_is_never_written() {
        assert_eq!(effective_separator(None, AppendFlags::SEP_ALWAYS, 3, 3), "");
    }

    #[test]
    fn both_non_empty_includes() {
        assert_eq!(effective_separator(SEP, AppendFlags::NONE, 3, 3), "; ");
    }

    #[test]
    fn empty_buffer_suppresses_unless_flagged() {
        assert_eq!(effective_separator(SEP, AppendFlags::NONE, 0, 3), "");
        assert_eq!(
            effective_separator(SEP, AppendFlags::SEP_IF_BUFFER_EMPTY, 0, 3),
            "; "
        );
        assert_eq!(
            effective_separator(SEP, AppendFlags::SEP_IF_FORMAT_EMPTY, 0, 3),
            ""
        );
    }

    #[test]
    fn empty_format_suppresses_unless_flagged() {
        assert_eq!(effective_separator(SEP, AppendFlags::NONE, 3, 0), "");
        assert_eq!(
            effective_separator(SEP, AppendFlags::SEP_IF_FORMAT_EMPTY, 3, 0),
            "; "
        );
        assert_eq!(
            effective_separator(SEP, AppendFlags::SEP_IF_BUFFER_EMPTY, 3, 0),
            ""
        );
    }

    #[test]
    fn both_empty_needs_both_flags() {
        assert_eq!(effective_separator(SEP, AppendFlags::SEP_IF_BUFFER_EMPTY, 0, 0), "");
        assert_eq!(effective_separator(SEP, AppendFlags::SEP_IF_FORMAT_EMPTY, 0, 0), "");
        assert_eq!(effective_separator(SEP, AppendFlags::SEP_ALWAYS, 0, 0), "; ");
    }

    #[test]
    fn trim_flags_do_not_affect_inclusion() {
        assert_eq!(effective_separator(SEP, AppendFlags::TRIM_CRLF_BOTH, 0, 3), "");
        assert_eq!(effective_separator(SEP, AppendFlags::TRIM_CRLF_BOTH, 3, 3), "; ");
    }
}
