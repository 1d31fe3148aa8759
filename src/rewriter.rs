//! # Rewriter Module
//!
//! This module holds the core rewrite logic: for each target file, read its
//! contents, check for the sentinel string, and prepend the resolved header
//! when the sentinel is absent.
//!
//! Files are processed strictly sequentially, in the order given, and the
//! first I/O failure aborts the whole run. Files rewritten before the failure
//! stay rewritten; there is no rollback.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::info_log;

/// Error type for the rewrite pass.
///
/// Both variants are fatal for the run. A write failure carries the original
/// file contents so the top-level handler can log them for manual recovery;
/// the target file may be left empty or truncated depending on how the write
/// failed.
#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
  /// A target file could not be read.
  #[error("could not read '{}': {}", .path.display(), .source)]
  Read { path: PathBuf, source: std::io::Error },

  /// A target file could not be written back.
  #[error(
    "could not write '{}': {}. existing contents were: {:?}",
    .path.display(),
    .source,
    String::from_utf8_lossy(.original)
  )]
  Write {
    path: PathBuf,
    source: std::io::Error,
    original: Vec<u8>,
  },
}

/// Counts from a completed rewrite pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
  /// Files that had the header prepended.
  pub prepended: usize,
  /// Files skipped because the sentinel was already present.
  pub skipped: usize,
}

/// Applies a resolved header to target files.
///
/// The header and sentinel are fixed at construction; `Rewriter` holds no
/// other state, so the per-file logic stays pure and testable.
#[derive(Debug)]
pub struct Rewriter {
  header: Vec<u8>,
  sentinel: String,
}

impl Rewriter {
  /// Create a rewriter with the resolved header bytes and sentinel string.
  pub const fn new(header: Vec<u8>, sentinel: String) -> Self {
    Self { header, sentinel }
  }

  /// Process the file list in order, prepending the header where the
  /// sentinel is missing.
  ///
  /// # Errors
  ///
  /// Returns a [`RewriteError`] on the first read or write failure. Earlier
  /// files in the list that were already rewritten remain rewritten.
  pub fn apply(&self, files: &[PathBuf]) -> Result<RunSummary, RewriteError> {
    let mut summary = RunSummary::default();

    for path in files {
      if self.apply_one(path)? {
        summary.prepended += 1;
      } else {
        summary.skipped += 1;
      }
    }

    Ok(summary)
  }

  /// Process a single file. Returns `true` if the header was prepended.
  fn apply_one(&self, path: &Path) -> Result<bool, RewriteError> {
    let contents = std::fs::read(path).map_err(|e| RewriteError::Read {
      path: path.to_path_buf(),
      source: e,
    })?;

    if has_sentinel(&contents, &self.sentinel) {
      debug!("sentinel already present in {}", path.display());
      return Ok(false);
    }

    info_log!("prepending header to {}", path.display());

    std::fs::write(path, prepend(&self.header, &contents)).map_err(|e| RewriteError::Write {
      path: path.to_path_buf(),
      source: e,
      original: contents,
    })?;

    Ok(true)
  }
}

/// Check whether `contents` contains the sentinel anywhere.
///
/// The search is a plain byte-level substring match, so it works on files
/// that are not valid UTF-8. An empty sentinel matches everything, which
/// makes every file count as already having a header.
pub fn has_sentinel(contents: &[u8], sentinel: &str) -> bool {
  let needle = sentinel.as_bytes();
  if needle.is_empty() {
    return true;
  }
  if needle.len() > contents.len() {
    return false;
  }
  contents.windows(needle.len()).any(|window| window == needle)
}

/// Build the rewritten file contents: header bytes followed by the original
/// bytes, unmodified.
pub fn prepend(header: &[u8], contents: &[u8]) -> Vec<u8> {
  let mut out = Vec::with_capacity(header.len() + contents.len());
  out.extend_from_slice(header);
  out.extend_from_slice(contents);
  out
}
