//! # addcopyright
//!
//! A tool that prepends a copyright/license header to files unless a
//! sentinel string is already present.

use addcopyright::cli::{Cli, run};
use anyhow::Result;

fn main() -> Result<()> {
  let cli = Cli::parse_args();

  run(cli)
}
