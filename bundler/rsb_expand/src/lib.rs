//! Include expansion for rsb
//!
//! This crate implements the core of the bundler: it reads a root source file
//! and splices in the contents of every file referenced by an
//! `include!("path");` line, recursively, producing one flat sequence of
//! lines. Each expanded file is introduced by a `// <file name>` header and a
//! blank line so the bundle stays readable.
//!
//! The entry point is [`expand`], which returns a lazy [`Expansion`]
//! iterator. Files are only read once the iterator reaches them, so a
//! consumer can stream the bundle to its destination as it is produced.
//!
//! ```no_run
//! # fn main() -> Result<(), rsb_expand::ExpandError> {
//! for line in rsb_expand::expand("src/main.rs") {
//!     println!("{}", line?);
//! }
//! # Ok(())
//! # }
//! ```

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
#![allow(
    clippy::multiple_crate_versions,
    clippy::cargo_common_metadata,
    clippy::module_name_repetitions
)]

// snapshot assertions live in the integration tests
#[cfg(test)]
use insta as _;

pub mod directive;
mod error;
pub mod expand;

pub use directive::Include;
pub use error::ExpandError;
pub use expand::{expand, expand_to_lines, Expansion};
