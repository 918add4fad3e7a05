//! Append a separator and formatted text to an optional owned string.
//!
//! Every fallible step (flag check, measuring, size arithmetic, rendering,
//! reserving) runs before the caller's buffer is touched. The commit that
//! follows cannot fail, so an error always leaves the buffer as it was.

use std::fmt;

use af_domain::config::LengthLimit;
use af_domain::{AppendFlags, Error, Result};

use crate::measure;
use crate::separator::effective_separator;
use crate::trim;

/// Append `sep` (subject to the suppression policy) and the rendered `args`
/// to `*target`.
///
/// - `target = None`: nothing is written; the return value is the length an
///   absent buffer would have after the append.
/// - `*target = None`: treated as empty; on success it becomes `Some`.
///
/// Returns the new content length. Uses the default [`LengthLimit`].
pub fn append_flags_sep_format(
    target: Option<&mut Option<String>>,
    flags: AppendFlags,
    sep: Option<&str>,
    args: fmt::Arguments<'_>,
) -> Result<usize> {
    append_flags_sep_format_limited(target, flags, sep, args, LengthLimit::default())
}

/// [`append_flags_sep_format`] with an explicit size bound.
pub fn append_flags_sep_format_limited(
    target: Option<&mut Option<String>>,
    flags: AppendFlags,
    sep: Option<&str>,
    args: fmt::Arguments<'_>,
    limit: LengthLimit,
) -> Result<usize> {
    let result = match target {
        Some(slot) => append_into(slot, flags, sep, args, limit.max_total()),
        None => measure_with(None, flags, sep, args, limit.max_total()),
    };

    match &result {
        Ok(len) => tracing::trace!(new_len = len, "append succeeded"),
        Err(e) => tracing::debug!(error = %e, code = e.code(), "append failed, buffer unchanged"),
    }
    result
}

/// Length `current` would have after the append, without modifying anything.
pub fn measure_append(
    current: Option<&str>,
    flags: AppendFlags,
    sep: Option<&str>,
    args: fmt::Arguments<'_>,
) -> Result<usize> {
    measure_append_limited(current, flags, sep, args, LengthLimit::default())
}

/// [`measure_append`] with an explicit size bound.
pub fn measure_append_limited(
    current: Option<&str>,
    flags: AppendFlags,
    sep: Option<&str>,
    args: fmt::Arguments<'_>,
    limit: LengthLimit,
) -> Result<usize> {
    measure_with(current, flags, sep, args, limit.max_total())
}

/// Everything the commit needs, computed without touching the buffer.
struct Plan<'s> {
    /// Bytes of the old content that survive the pre-append trim.
    kept: usize,
    sep: &'s str,
    rendered: String,
}

impl Plan<'_> {
    fn untrimmed_len(&self) -> usize {
        self.kept + self.sep.len() + self.rendered.len()
    }
}

fn plan<'s>(
    current: Option<&str>,
    flags: AppendFlags,
    sep: Option<&'s str>,
    args: fmt::Arguments<'_>,
    max_total: usize,
) -> Result<Plan<'s>> {
    let flags = flags.validate()?;

    let count = measure::measure(args, max_total)?;
    let old = current.unwrap_or("");
    let sep = effective_separator(sep, flags, old.len(), count);

    // size includes one terminator slot
    1usize
        .checked_add(old.len())
        .and_then(|n| n.checked_add(sep.len()))
        .and_then(|n| n.checked_add(count))
        .filter(|&n| n <= max_total)
        .ok_or(Error::Overflow { limit: max_total })?;

    let rendered = measure::render(args, count)?;

    let kept = if flags.contains(AppendFlags::TRIM_CRLF_BEFORE) {
        old.len() - trim::trailing_crlf_len(old.as_bytes())
    } else {
        old.len()
    };

    Ok(Plan {
        kept,
        sep,
        rendered,
    })
}

fn measure_with(
    current: Option<&str>,
    flags: AppendFlags,
    sep: Option<&str>,
    args: fmt::Arguments<'_>,
    max_total: usize,
) -> Result<usize> {
    let plan = plan(current, flags, sep, args, max_total)?;
    let len = plan.untrimmed_len();
    if !flags.contains(AppendFlags::TRIM_CRLF_AFTER) {
        return Ok(len);
    }

    // The trailing run may cross from the rendered text into the separator
    // and on into the kept part of the old content.
    let old = current.unwrap_or("").as_bytes();
    let parts = [plan.rendered.as_bytes(), plan.sep.as_bytes(), &old[..plan.kept]];
    let mut run = 0;
    for part in parts {
        let n = trim::trailing_crlf_len(part);
        run += n;
        if n < part.len() {
            break;
        }
    }
    Ok(len - run)
}

fn append_into(
    slot: &mut Option<String>,
    flags: AppendFlags,
    sep: Option<&str>,
    args: fmt::Arguments<'_>,
    max_total: usize,
) -> Result<usize> {
    let plan = plan(slot.as_deref(), flags, sep, args, max_total)?;
    let new_len = plan.untrimmed_len();

    if let Some(buf) = slot.as_mut() {
        buf.try_reserve_exact(new_len.saturating_sub(buf.len()))?;
        return Ok(commit(buf, &plan, flags));
    }

    let mut buf = String::new();
    buf.try_reserve_exact(new_len)?;
    let len = commit(&mut buf, &plan, flags);
    *slot = Some(buf);
    Ok(len)
}

/// Infallible tail of the operation; capacity is already reserved.
fn commit(buf: &mut String, plan: &Plan<'_>, flags: AppendFlags) -> usize {
    let old_len = buf.len();
    buf.truncate(plan.kept);
    buf.push_str(plan.sep);
    buf.push_str(&plan.rendered);

    let trimmed_after = if flags.contains(AppendFlags::TRIM_CRLF_AFTER) {
        trim::trim_crlf(buf)
    } else {
        0
    };

    tracing::trace!(
        old_len,
        trimmed_before = old_len - plan.kept,
        sep_len = plan.sep.len(),
        rendered_len = plan.rendered.len(),
        trimmed_after,
        "append committed"
    );
    buf.len()
}
