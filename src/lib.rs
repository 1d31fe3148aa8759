//! # addcopyright
//!
//! A tool that prepends a copyright/license header to a list of files unless
//! a sentinel string is already present in the file.
//!
//! `addcopyright` rewrites matching files in place as the header bytes
//! followed by the original contents. The header is resolved once per run
//! from the built-in Apache-2.0 template (filled in with the current year and
//! an owner), a header file, or standard input. Processing is strictly
//! sequential and fail-fast: the first I/O error aborts the run.
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use addcopyright::header::HeaderSource;
//! use addcopyright::rewriter::Rewriter;
//! use std::path::PathBuf;
//!
//! fn main() -> anyhow::Result<()> {
//!     // Resolve the built-in Apache-2.0 header for the current year
//!     let source = HeaderSource::Apache2 {
//!         owner: "Acme".to_string(),
//!     };
//!     let header = source.resolve()?;
//!
//!     // Prepend it to files that don't already carry a copyright line
//!     let rewriter = Rewriter::new(header, "// Copyright".to_string());
//!     let summary = rewriter.apply(&[PathBuf::from("src/main.rs")])?;
//!
//!     println!("{} file(s) prepended", summary.prepended);
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`cli`] - Command-line interface and flag validation
//! * [`header`] - Header resolution from template, file, or stdin
//! * [`rewriter`] - Sentinel check and in-place prepend
//! * [`logging`] - Logging utilities for verbose output
//!
//! [`cli`]: crate::cli
//! [`header`]: crate::header
//! [`rewriter`]: crate::rewriter
//! [`logging`]: crate::logging

pub mod cli;
pub mod header;
pub mod logging;
pub mod rewriter;
