mod env;
mod info;
mod install_headers;

pub use env::cmd_env;
pub use info::cmd_info;
pub use install_headers::cmd_install_headers;

use anyhow::{Context, Result};
use p1env_lib::BuildConfig;
use p1env_lib::config::Overrides;

use crate::InputArgs;

/// Detect the build inputs, letting command-line flags take precedence.
fn resolve_config(inputs: &InputArgs) -> Result<BuildConfig> {
  BuildConfig::detect_with(&Overrides::from(inputs)).context("Failed to resolve build inputs")
}
