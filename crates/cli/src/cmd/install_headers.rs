//! Implementation of the `p1env install-headers` command.
//!
//! Places the bundled headers where `p1stream_include_dir` points, so a
//! packaged install is usable without copying files by hand.

use anyhow::{Context, Result};

use p1env_lib::headers::{InstallOptions, install_headers};

use crate::InputArgs;
use crate::output::{print_info, print_success};

pub fn cmd_install_headers(inputs: &InputArgs, force: bool) -> Result<()> {
  let config = super::resolve_config(inputs)?;
  let options = InstallOptions {
    include_dir: config.include_dir(),
    force,
  };

  let result = install_headers(&options).context("Failed to install headers")?;

  for path in &result.written {
    print_success(&format!("Installed {}", path.display()));
  }
  for path in &result.unchanged {
    print_info(&format!("Up to date {}", path.display()));
  }

  Ok(())
}
