//! Errors produced while expanding a file

use std::{io, path::PathBuf};

use thiserror::Error;

/// An error encountered while expanding a file
///
/// Expansion never recovers from these. Once one has been yielded the
/// [`Expansion`](crate::Expansion) is exhausted.
#[derive(Debug, Error)]
pub enum ExpandError {
    /// The root file or one of its includes could not be read
    #[error("failed to read `{}`: {source}", .path.display())]
    Read {
        /// The path that was being read, as resolved from the include
        path: PathBuf,
        /// The underlying IO failure
        #[source]
        source: io::Error,
    },

    /// An include directive refers back to a file that is still being
    /// expanded
    #[error("circular include detected: {}", format_chain(.chain))]
    CircularInclude {
        /// Every file on the active include stack, followed by the file that
        /// closed the cycle
        chain: Vec<PathBuf>,
    },
}

/// Renders an include chain as `a -> b -> a`
fn format_chain(chain: &[PathBuf]) -> String {
    chain
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
