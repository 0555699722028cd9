//! Implementation of the default `p1env env` command.
//!
//! Prints the build environment to stdout so a parent shell can
//! `eval "$(p1env)"` it before running node-gyp and npm.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::debug;

use p1env_lib::build_env;
use p1env_lib::shell::{Shell, write_exports};

use crate::InputArgs;
use crate::output::{OutputFormat, print_json};

pub fn cmd_env(inputs: &InputArgs, shell: Shell, format: OutputFormat) -> Result<()> {
  let config = super::resolve_config(inputs)?;
  let env = build_env(&config).context("Failed to build environment")?;

  if format.is_json() {
    return print_json(&env);
  }

  debug!(shell = %shell, count = env.len(), "writing exports");
  let stdout = io::stdout();
  let mut out = stdout.lock();
  let written = write_exports(&env, shell, &mut out).and_then(|()| out.flush());
  match written {
    // The reader went away (e.g. piped into `head`); nothing left to do.
    Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
    other => other.context("Failed to write exports"),
  }
}
