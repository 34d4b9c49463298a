//! Version information baked in at build time

#[doc(hidden)]
#[allow(
    dead_code,
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::restriction
)]
mod build {
    include!(concat!(env!("OUT_DIR"), "/shadow.rs"));
}

/// Returns the version line printed by `--version` and in bug reports
///
/// A build from a dirty checkout also lists the files that differ from the
/// recorded commit, one per line.
pub fn version() -> String {
    let state = if build::GIT_CLEAN { "clean" } else { "dirty" };
    let mut version = format!(
        "{} {} ({} {state}) for {}",
        build::PROJECT_NAME,
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BUILD_TARGET,
    );

    if !build::GIT_CLEAN {
        for file in changed_files(build::GIT_STATUS_FILE) {
            version.push_str("\n  changed: ");
            version.push_str(file);
        }
    }

    version
}

/// Extracts file names from shadow-rs' git status listing
///
/// Each line looks like `path/to/file (dirty)` or `path/to/file (staged)`.
fn changed_files(status: &str) -> impl Iterator<Item = &str> {
    status
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.strip_suffix(" (dirty)")
                .or_else(|| line.strip_suffix(" (staged)"))
                .unwrap_or(line)
        })
}
