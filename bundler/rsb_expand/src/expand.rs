//! The lazy, depth-first include expander
//!
//! Expansion walks the include graph in pre-order. Every file contributes a
//! `// <file name>` header and a blank line, followed by its own lines with
//! each include directive replaced by the full expansion of the file it
//! names. The walk uses an explicit stack of [`Frame`]s rather than native
//! recursion, so deeply nested includes cannot overflow the call stack.

use std::{
    fs,
    iter::{self, FusedIterator},
    path::{Path, PathBuf},
    vec,
};

use rsb_utils::{io, path::file_label};

use crate::{directive::Include, ExpandError};

/// Begins expanding the file at `path`
///
/// Nothing is read until the returned [`Expansion`] is iterated.
#[must_use]
pub fn expand(path: impl AsRef<Path>) -> Expansion {
    Expansion::new(path.as_ref().to_path_buf())
}

/// Expands the file at `path` and collects every line
///
/// # Errors
///
/// Returns the first [`ExpandError`] encountered; see [`Expansion`].
pub fn expand_to_lines(path: impl AsRef<Path>) -> Result<Vec<String>, ExpandError> {
    expand(path).collect()
}

/// Where a [`Frame`] is in the expansion of its file
#[derive(Debug)]
enum FrameState {
    /// The `// <file name>` line has not been emitted yet
    Header,
    /// The blank line after the header has not been emitted yet
    Blank,
    /// The file has not been read yet
    Unread,
    /// The file has been read and these lines remain
    Lines(vec::IntoIter<String>),
}

/// One file on the include stack
#[derive(Debug)]
struct Frame {
    /// The path as resolved from the including file
    path: PathBuf,
    /// The canonical path, known once the file has been read
    canonical: Option<PathBuf>,
    /// Progress through this file
    state: FrameState,
}

impl Frame {
    /// Creates a frame that has not emitted anything yet
    const fn new(path: PathBuf) -> Self {
        Self {
            path,
            canonical: None,
            state: FrameState::Header,
        }
    }
}

/// A lazy sequence of bundled lines
///
/// Yields `Ok(line)` for every output line, without a trailing newline. If a
/// file cannot be read, or an include would re-enter a file that is still
/// being expanded, a single `Err` is yielded and the iterator is exhausted
/// from then on.
///
/// A file that is included several times from different places, without
/// forming a cycle, is read and expanded again every time.
#[derive(Debug)]
pub struct Expansion {
    /// The files currently being expanded; the last one is innermost
    stack: Vec<Frame>,
}

impl Expansion {
    /// Creates an expansion rooted at `root`
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self {
            stack: vec![Frame::new(root)],
        }
    }

    /// Stops the expansion and hands back `error`
    fn fail(&mut self, error: ExpandError) -> ExpandError {
        self.stack.clear();
        error
    }

    /// Checks that `target` is not already on the include stack
    fn check_cycle(&self, target: &Path) -> Result<(), ExpandError> {
        // A target that cannot be canonicalized cannot be open either; let
        // the read report what is wrong with it.
        let Ok(canonical) = fs::canonicalize(target) else {
            return Ok(());
        };

        let Some(start) = self
            .stack
            .iter()
            .position(|frame| frame.canonical.as_ref() == Some(&canonical))
        else {
            return Ok(());
        };

        let chain = self.stack[start..]
            .iter()
            .map(|frame| frame.path.clone())
            .chain(iter::once(target.to_path_buf()))
            .collect();

        Err(ExpandError::CircularInclude { chain })
    }
}

impl Iterator for Expansion {
    type Item = Result<String, ExpandError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;

            match frame.state {
                FrameState::Header => {
                    frame.state = FrameState::Blank;
                    return Some(Ok(format!("// {}", file_label(&frame.path))));
                }
                FrameState::Blank => {
                    frame.state = FrameState::Unread;
                    return Some(Ok(String::new()));
                }
                FrameState::Unread => match io::read_lines(&frame.path) {
                    Ok(lines) => {
                        log::debug!("expanding {} ({} lines)", frame.path.display(), lines.len());
                        frame.canonical = fs::canonicalize(&frame.path).ok();
                        frame.state = FrameState::Lines(lines.into_iter());
                    }
                    Err(source) => {
                        let error = ExpandError::Read {
                            path: frame.path.clone(),
                            source,
                        };
                        return Some(Err(self.fail(error)));
                    }
                },
                FrameState::Lines(ref mut lines) => {
                    let Some(line) = lines.next() else {
                        self.stack.pop();
                        continue;
                    };

                    let Some(include) = Include::parse(&line) else {
                        return Some(Ok(line));
                    };

                    let target = include.resolve(&frame.path);
                    log::trace!(
                        "{} includes \"{}\" ({})",
                        frame.path.display(),
                        include.path(),
                        target.display()
                    );

                    if let Err(error) = self.check_cycle(&target) {
                        return Some(Err(self.fail(error)));
                    }

                    self.stack.push(Frame::new(target));
                }
            }
        }
    }
}

impl FusedIterator for Expansion {}
