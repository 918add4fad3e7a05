//! Shorthands for the common flag/separator combinations. Each takes a
//! `&mut Option<String>` followed by `format!`-style arguments.

/// Append with explicit flags and an optional separator.
#[macro_export]
macro_rules! append_flags_sep_format {
    ($buf:expr, $flags:expr, $sep:expr, $($arg:tt)+) => {
        $crate::append_flags_sep_format(
            ::core::option::Option::Some($buf),
            $flags,
            $sep,
            ::core::format_args!($($arg)+),
        )
    };
}

/// Append without flags or separator.
#[macro_export]
macro_rules! append_format {
    ($buf:expr, $($arg:tt)+) => {
        $crate::append_flags_sep_format!(
            $buf,
            $crate::AppendFlags::NONE,
            ::core::option::Option::None,
            $($arg)+
        )
    };
}

/// Append with a separator and no flags.
#[macro_export]
macro_rules! append_sep_format {
    ($buf:expr, $sep:expr, $($arg:tt)+) => {
        $crate::append_flags_sep_format!(
            $buf,
            $crate::AppendFlags::NONE,
            ::core::option::Option::Some($sep),
            $($arg)+
        )
    };
}

/// Append without a separator, trimming trailing CR/LF before and after.
#[macro_export]
macro_rules! append_rmcrlfs_format {
    ($buf:expr, $($arg:tt)+) => {
        $crate::append_flags_sep_format!(
            $buf,
            $crate::AppendFlags::TRIM_CRLF_BOTH,
            ::core::option::Option::None,
            $($arg)+
        )
    };
}

/// Append with a separator, trimming trailing CR/LF before and after.
#[macro_export]
macro_rules! append_rmcrlfs_sep_format {
    ($buf:expr, $sep:expr, $($arg:tt)+) => {
        $crate::append_flags_sep_format!(
            $buf,
            $crate::AppendFlags::TRIM_CRLF_BOTH,
            ::core::option::Option::Some($sep),
            $($arg)+
        )
    };
}
