//! # CLI Module
//!
//! This module contains the command-line interface implementation. It uses
//! clap for argument parsing and keeps all flag validation in one place so
//! the header and rewriter modules never see raw arguments.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use tracing::debug;

use crate::header::HeaderSource;
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::rewriter::Rewriter;
use crate::{info_log, verbose_log};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  version,
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Prepend the built-in Apache-2.0 header
  addcopyright --apache2 --owner \"Acme\" src/main.rs src/lib.rs

  # Use a custom header file, verbatim
  addcopyright --header NOTICE.txt main.go util.go

  # Read the header from stdin
  cat NOTICE.txt | addcopyright --header - main.go

  # Look for a different sentinel string
  addcopyright --apache2 --owner \"Acme\" --sentinel \"SPDX-License-Identifier\" src/main.rs
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  /// Files to process, in order. Each file is rewritten in place unless the
  /// sentinel string is already present.
  #[arg(required = true, value_name = "FILES")]
  pub files: Vec<PathBuf>,

  /// Path to a file containing the full header text, or '-' to read the
  /// header from stdin
  #[arg(long, value_name = "FILE")]
  pub header: Option<String>,

  /// Substring whose presence means a file already has a header
  #[arg(long, value_name = "STRING", default_value = "// Copyright")]
  pub sentinel: String,

  /// Copyright owner, required with --apache2
  #[arg(long, value_name = "NAME")]
  pub owner: Option<String>,

  /// Use the built-in Apache-2.0 header template
  #[arg(long)]
  pub apache2: bool,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }

  /// Validate the arguments and return an error if invalid
  fn validate(&self) -> Result<(), String> {
    if !self.apache2 && self.header.is_none() {
      return Err("must provide a license type: --apache2 or a custom header (--header)".to_string());
    }
    if self.apache2 && self.owner.as_deref().unwrap_or("").is_empty() {
      return Err("must provide --owner with --apache2".to_string());
    }
    Ok(())
  }

  /// Determine the header source from the flags.
  ///
  /// `--apache2` takes precedence when both it and `--header` are given.
  /// Only valid after [`validate`](Self::validate) has passed.
  fn header_source(&self) -> HeaderSource {
    if self.apache2 {
      let owner = self.owner.as_deref().unwrap_or("").to_string();
      return HeaderSource::Apache2 { owner };
    }
    match self.header.as_deref() {
      Some("-") => HeaderSource::Stdin,
      Some(path) => HeaderSource::File(PathBuf::from(path)),
      None => unreachable!("validate() requires --apache2 or --header"),
    }
  }
}

/// Run the tool with the given arguments
pub fn run(cli: Cli) -> Result<()> {
  // Validate arguments
  if let Err(e) = cli.validate() {
    eprintln!("ERROR: {e}");
    process::exit(1);
  }

  // Initialize tracing subscriber for structured logging
  init_tracing(cli.quiet, cli.verbose);

  // Set verbose mode for output formatting and info_log! macro
  if cli.verbose > 0 {
    set_verbose();
  } else if cli.quiet {
    set_quiet();
  }
  cli.colors.apply();

  // Resolve the header once, before any target file is touched.
  let source = cli.header_source();
  debug!("resolving header from {:?}", source);
  let header = source.resolve().context("failed to resolve header")?;

  verbose_log!("Resolved header ({} bytes)", header.len());

  let rewriter = Rewriter::new(header, cli.sentinel);
  let summary = rewriter.apply(&cli.files)?;

  verbose_log!("{} file(s) prepended, {} skipped", summary.prepended, summary.skipped);
  info_log!("all done");

  Ok(())
}
