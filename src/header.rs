//! # Header Module
//!
//! This module resolves the header byte sequence that gets prepended to
//! target files. A header comes from exactly one of three places:
//!
//! - The built-in Apache-2.0 template, filled in with the current calendar
//!   year and a copyright owner
//! - A header file supplied on the command line, used verbatim
//! - Standard input (`--header -`), used verbatim
//!
//! Resolution happens once per run, before any target file is touched, so a
//! bad header source never leaves the file list half-processed.

use std::io::Read as _;
use std::path::{Path, PathBuf};

use chrono::Datelike;

use crate::verbose_log;

/// The built-in Apache-2.0 header template.
///
/// `{{year}}` and `{{owner}}` are replaced at resolution time. The trailing
/// blank line separates the header from the original file contents.
const APACHE2_TEMPLATE: &str = "// Copyright {{year}} {{owner}}. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the \"License\");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an \"AS IS\" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

";

/// Error type for header resolution.
#[derive(Debug, thiserror::Error)]
pub enum HeaderError {
  /// The header file could not be read.
  #[error("could not read header file '{}': {}", .path.display(), .source)]
  ReadFile { path: PathBuf, source: std::io::Error },

  /// Standard input could not be read.
  #[error("could not read header from stdin: {source}")]
  ReadStdin { source: std::io::Error },
}

/// Where the header bytes come from.
///
/// The variants mirror the three resolution modes; constructing a
/// `HeaderSource` is the CLI's job, resolving it to bytes is [`resolve`].
///
/// [`resolve`]: HeaderSource::resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderSource {
  /// Built-in Apache-2.0 template with the given copyright owner.
  Apache2 { owner: String },
  /// Verbatim contents of a header file.
  File(PathBuf),
  /// Verbatim contents of standard input.
  Stdin,
}

impl HeaderSource {
  /// Resolve this source to the header byte sequence.
  ///
  /// For the Apache-2.0 template the current calendar year is substituted;
  /// file and stdin sources are used byte-for-byte.
  ///
  /// # Errors
  ///
  /// Returns a [`HeaderError`] if the header file or stdin cannot be read.
  pub fn resolve(&self) -> Result<Vec<u8>, HeaderError> {
    match self {
      HeaderSource::Apache2 { owner } => {
        let year = chrono::Local::now().year();
        Ok(render_apache2(year, owner).into_bytes())
      }
      HeaderSource::File(path) => read_header_file(path),
      HeaderSource::Stdin => {
        verbose_log!("Reading header from stdin");
        let mut buf = Vec::new();
        std::io::stdin()
          .read_to_end(&mut buf)
          .map_err(|e| HeaderError::ReadStdin { source: e })?;
        Ok(buf)
      }
    }
  }
}

/// Render the built-in Apache-2.0 template with the given year and owner.
pub fn render_apache2(year: i32, owner: &str) -> String {
  APACHE2_TEMPLATE
    .replace("{{year}}", &year.to_string())
    .replace("{{owner}}", owner)
}

fn read_header_file(path: &Path) -> Result<Vec<u8>, HeaderError> {
  verbose_log!("Reading header from: {}", path.display());

  std::fs::read(path).map_err(|e| HeaderError::ReadFile {
    path: path.to_path_buf(),
    source: e,
  })
}
