//! The `rsb` command line driver

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
    clippy::unwrap_used
)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

mod build_info;
mod cli;
mod ice;

use std::io::BufWriter;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use rsb::utils::io;
// the library does the bundling; these are its dependencies
use {chrono as _, rsb_expand as _, rsb_utils as _};
#[cfg(test)]
use {indoc as _, insta as _, tempfile as _};

fn main() -> anyhow::Result<()> {
    ice::setup_panic_hook();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.version {
        println!("{}", build_info::version());
        return Ok(());
    }

    let output = io::open_output(&cli.out_file)
        .with_context(|| format!("failed to open `{}`", cli.out_file.display()))?;
    let mut output = BufWriter::new(output);

    let written = rsb::write_bundle(&cli.path, &mut output, !cli.no_timestamp)?;
    log::info!(
        "bundled `{}` into {written} lines",
        cli.path.display()
    );

    Ok(())
}
