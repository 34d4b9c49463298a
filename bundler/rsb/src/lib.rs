#![doc = include_str!("../README.md")]
#![allow(unknown_lints)] // in case you use non-nightly clippy
#![warn(
    clippy::cargo,
    clippy::nursery,
    clippy::pedantic,
    clippy::missing_docs_in_private_items,
    missing_docs,
    clippy::absolute_paths,
    clippy::as_conversions,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::deref_by_slicing,
    clippy::disallowed_script_idents,
    clippy::else_if_without_else,
    clippy::empty_structs_with_brackets,
    clippy::format_push_string,
    clippy::if_then_some_else_none,
    clippy::let_underscore_must_use,
    clippy::min_ident_chars,
    clippy::mixed_read_write_in_expression,
    clippy::multiple_inherent_impl,
    clippy::multiple_unsafe_ops_per_block,
    clippy::non_ascii_literal,
    clippy::redundant_type_annotations,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::same_name_method,
    clippy::semicolon_inside_block,
    clippy::unseparated_literal_suffix,
    clippy::implicit_clone,
    clippy::todo,
    clippy::undocumented_unsafe_blocks,
    clippy::unimplemented,
    clippy::unneeded_field_pattern,
    clippy::wildcard_enum_match_arm,
    let_underscore_drop,
    macro_use_extern_crate,
    missing_debug_implementations,
    non_exhaustive_omitted_patterns,
    unsafe_op_in_unsafe_fn,
    unused_crate_dependencies,
    variant_size_differences,
    unused_qualifications,
    clippy::unwrap_used,
    clippy::print_stderr,
    clippy::print_stdout
)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

use std::{io::Write, path::Path};

use anyhow::Context;
use chrono::NaiveDateTime;

pub use rsb_utils as utils;

// only needed by the `rsb` binary and the integration tests
use {clap as _, env_logger as _, shadow_rs as _};
#[cfg(test)]
use {indoc as _, insta as _, tempfile as _};

/// Format of the generation timestamp in the bundle footer
///
/// ISO-8601 local time with microseconds and no UTC offset, e.g.
/// `2024-03-01T09:15:42.123456`. The fraction is always printed, even when it
/// is zero, so every footer has the same width.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Renders the comment line that closes a bundle
#[must_use]
pub fn footer_line(generated_at: &NaiveDateTime) -> String {
    format!("// {}", generated_at.format(TIMESTAMP_FORMAT))
}

/// Expands `root` and writes the bundle to `out`, one line at a time
///
/// Lines are written as soon as they are produced. When `timestamp` is set
/// the current local time is appended as a final comment line once the whole
/// expansion has succeeded. Returns the number of lines written, including
/// the footer.
///
/// # Errors
///
/// Fails if any file cannot be expanded or if writing to `out` fails. Lines
/// produced before the failure have already been written, but the footer
/// never is.
pub fn write_bundle<W: Write + ?Sized>(
    root: &Path,
    out: &mut W,
    timestamp: bool,
) -> anyhow::Result<usize> {
    let mut written = 0;

    for line in rsb_expand::expand(root) {
        let line = line.with_context(|| format!("failed to bundle `{}`", root.display()))?;
        writeln!(out, "{line}").context("failed to write bundle")?;
        written += 1;
    }

    log::debug!("wrote {written} lines from `{}`", root.display());

    if timestamp {
        let footer = footer_line(&chrono::Local::now().naive_local());
        writeln!(out, "{footer}").context("failed to write bundle footer")?;
        written += 1;
    }

    out.flush().context("failed to flush bundle")?;

    Ok(written)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn footer_uses_iso_format_with_microseconds() {
        let time = NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|date| date.and_hms_micro_opt(9, 5, 7, 42))
            .expect("valid date");

        assert_eq!(footer_line(&time), "// 2024-03-01T09:05:07.000042");
    }

    #[test]
    fn footer_keeps_fraction_when_microseconds_are_zero() {
        let time = NaiveDate::from_ymd_opt(2024, 12, 31)
            .and_then(|date| date.and_hms_opt(23, 59, 0))
            .expect("valid date");

        assert_eq!(footer_line(&time), "// 2024-12-31T23:59:00.000000");
    }
}
