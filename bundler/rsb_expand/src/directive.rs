//! Recognition of include directives
//!
//! An include directive is a whole line of the exact form
//! `include!("<path>");`. Anything else, including a directive with
//! indentation or a trailing comment, is ordinary text.

use std::path::{Path, PathBuf};

use rsb_utils::path::base_dir;

/// Text that opens an include directive, up to the opening quote
const OPEN: &str = "include!(\"";
/// Text that closes an include directive, from the closing quote
const CLOSE: &str = "\");";

/// An include directive found on a line of source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Include<'a> {
    /// The quoted path, exactly as written
    path: &'a str,
}

impl<'a> Include<'a> {
    /// Parses `line` as an include directive
    ///
    /// The whole line must match; callers are expected to have stripped
    /// trailing whitespace already. The quoted path must be non-empty and
    /// must not itself contain a `"`.
    #[must_use]
    pub fn parse(line: &'a str) -> Option<Self> {
        let path = line.strip_prefix(OPEN)?.strip_suffix(CLOSE)?;

        (!path.is_empty() && !path.contains('"')).then_some(Self { path })
    }

    /// The path between the quotes
    #[must_use]
    pub const fn path(&self) -> &'a str {
        self.path
    }

    /// Resolves the included path against the directory of the file that
    /// contains the directive
    ///
    /// An absolute include path replaces the base directory entirely.
    #[must_use]
    pub fn resolve(&self, including_file: &Path) -> PathBuf {
        base_dir(including_file).join(self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_directive() {
        let include = Include::parse(r#"include!("util.rs");"#).expect("should parse");
        assert_eq!(include.path(), "util.rs");
    }

    #[test]
    fn parses_nested_and_parent_paths() {
        assert_eq!(
            Include::parse(r#"include!("../shared/io.rs");"#).map(|inc| inc.path()),
            Some("../shared/io.rs")
        );
        assert_eq!(
            Include::parse(r#"include!("a b/c d.rs");"#).map(|inc| inc.path()),
            Some("a b/c d.rs")
        );
    }

    #[test]
    fn rejects_indentation_and_trailing_text() {
        for line in [
            r#"    include!("util.rs");"#,
            r#"include!("util.rs"); // helpers"#,
            r#"include!("util.rs")"#,
            r#"include! ("util.rs");"#,
            r#"include!("util.rs");;"#,
            r#"xinclude!("util.rs");"#,
        ] {
            assert_eq!(Include::parse(line), None, "{line}");
        }
    }

    #[test]
    fn rejects_empty_and_quoted_paths() {
        assert_eq!(Include::parse(r#"include!("");"#), None);
        assert_eq!(Include::parse(r#"include!("a"b");"#), None);
        assert_eq!(Include::parse(r#"include!(");"#), None);
    }

    #[test]
    fn rejects_rust_include_with_macro_argument() {
        assert_eq!(
            Include::parse(r#"include!(concat!(env!("OUT_DIR"), "/gen.rs"));"#),
            None
        );
    }

    #[test]
    fn resolves_relative_to_including_file() {
        let include = Include::parse(r#"include!("helper.rs");"#).expect("should parse");
        assert_eq!(
            include.resolve(Path::new("src/sub/mod.rs")),
            PathBuf::from("src/sub/helper.rs")
        );
        assert_eq!(
            include.resolve(Path::new("main.rs")),
            PathBuf::from("helper.rs")
        );
    }

    #[test]
    fn absolute_include_ignores_base() {
        let include = Include::parse(r#"include!("/opt/lib.rs");"#).expect("should parse");
        assert_eq!(
            include.resolve(Path::new("src/main.rs")),
            PathBuf::from("/opt/lib.rs")
        );
    }
}
