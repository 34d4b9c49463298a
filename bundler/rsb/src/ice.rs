//! Internal error handling for rsb
//!
//! A panic inside rsb is always a bug in rsb, never in the files being
//! bundled. This module installs a panic hook that says so and prints the
//! version and command line needed for a useful bug report.

use std::panic::PanicHookInfo;

/// Handles panics and generates the internal error screen
///
/// # Arguments
///
/// * `default_panic_hook` - The default system panic hook to call after
///   printing the internal error message.
/// * `panic_info` - Information about the panic that occurred.
fn ice_hook(
    default_panic_hook: &'static (dyn Fn(&PanicHookInfo<'_>) + Send + Sync),
    panic_info: &PanicHookInfo,
) {
    eprintln!("error: internal error encountered: thread panicked");
    eprintln!("note: this is not a problem with your source files. it is a bug in rsb.");
    eprintln!("note: please include the following in your bug report:");
    eprintln!();
    eprintln!(
        "{}",
        super::build_info::version()
            .lines()
            .map(|line| format!("note: {line}"))
            .collect::<Vec<_>>()
            .join("\n")
    );
    eprintln!();
    eprintln!(
        "note: command line arguments: {}",
        std::env::args().collect::<Vec<_>>().join(" ")
    );
    eprintln!();
    default_panic_hook(panic_info);
    eprintln!();
    eprintln!("error: end internal error. bundling failed.");
}

/// Configures the global panic hook
///
/// Also forces `RUST_BACKTRACE=1` unless the user asked for `full`, so that
/// bug reports come with a backtrace.
pub fn setup_panic_hook() {
    // The hook must be 'static; leaking the single previous hook is fine for
    // a process that exits when bundling finishes.
    let default_panic_hook: &'static _ = Box::leak(std::panic::take_hook());

    std::panic::set_hook(Box::new(|panic_info| {
        ice_hook(default_panic_hook, panic_info);
    }));

    if std::env::var("RUST_BACKTRACE").ok().as_deref() != Some("full") {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
}
