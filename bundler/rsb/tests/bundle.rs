use std::fs;

use chrono::NaiveDateTime;
use indoc::indoc;

fn project() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("should create temp dir");
    fs::write(
        dir.path().join("main.rs"),
        indoc! {r#"
            fn main() {}
            include!("util.x");
            // done
        "#},
    )
    .expect("should write main file");
    fs::write(dir.path().join("util.x"), "let x = 1;\n").expect("should write util file");
    dir
}

#[test]
fn bundle_without_timestamp_is_reproducible() {
    let dir = project();
    let mut out = Vec::new();

    let written =
        rsb::write_bundle(&dir.path().join("main.rs"), &mut out, false).expect("should bundle");
    let text = String::from_utf8(out).expect("bundle should be utf-8");

    assert_eq!(written, 7);
    insta::assert_snapshot!(text.trim_end(), @r#"
// main.rs

fn main() {}
// util.x

let x = 1;
// done
"#);
}

#[test]
fn bundle_ends_with_a_single_timestamp_line() {
    let dir = project();
    let mut out = Vec::new();

    let written =
        rsb::write_bundle(&dir.path().join("main.rs"), &mut out, true).expect("should bundle");
    let text = String::from_utf8(out).expect("bundle should be utf-8");
    let lines = text.lines().collect::<Vec<_>>();

    assert_eq!(written, 8);
    assert_eq!(lines.len(), 8);
    assert!(text.ends_with('\n'));
    assert_eq!(lines[6], "// done");

    let stamp = lines[7].strip_prefix("// ").expect("footer should be a comment");
    assert!(NaiveDateTime::parse_from_str(stamp, rsb::TIMESTAMP_FORMAT).is_ok());
}

#[test]
fn failed_bundle_keeps_partial_output_but_no_footer() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    fs::write(
        dir.path().join("main.rs"),
        "fn main() {}\ninclude!(\"missing.rs\");\n",
    )
    .expect("should write main file");
    let mut out = Vec::new();

    let err = rsb::write_bundle(&dir.path().join("main.rs"), &mut out, true)
        .expect_err("should fail");
    let text = String::from_utf8(out).expect("bundle should be utf-8");

    assert_eq!(text, "// main.rs\n\nfn main() {}\n// missing.rs\n\n");
    assert!(err
        .chain()
        .any(|cause| cause.to_string().contains("missing.rs")));
}

#[test]
fn circular_bundle_reports_the_cycle() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    fs::write(dir.path().join("main.rs"), "include!(\"main.rs\");\n")
        .expect("should write main file");
    let mut out = Vec::new();

    let err = rsb::write_bundle(&dir.path().join("main.rs"), &mut out, true)
        .expect_err("should fail");

    assert!(err
        .chain()
        .any(|cause| cause.to_string().starts_with("circular include detected")));
}
