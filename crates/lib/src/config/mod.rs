//! Build configuration and derivation of the exported variables.
//!
//! [`BuildConfig`] carries every input the exported values depend on. It is
//! detected once per invocation, optionally adjusted with the `with_*`
//! overrides, and turned into an [`EnvMap`] by [`build_env`].

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::consts::{self, vars};
use crate::env::{EnvError, EnvMap};
use crate::platform::arch::Arch;
use crate::platform::os::Os;
use crate::platform::{Platform, paths};
use crate::url;

/// Errors that can occur while resolving inputs or building the map.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("unsupported host platform: {0}")]
  UnsupportedPlatform(String),

  #[error("failed to resolve install directory: {0}")]
  InstallDir(#[source] std::io::Error),

  #[error("install directory must be absolute: {}", .0.display())]
  RelativeInstallDir(PathBuf),

  #[error("path is not valid UTF-8: {}", .0.display())]
  NonUtf8Path(PathBuf),

  #[error(transparent)]
  Env(#[from] EnvError),
}

/// Values that replace detected inputs. `None` keeps the detected value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
  pub os: Option<Os>,
  pub arch: Option<Arch>,
  pub install_dir: Option<PathBuf>,
}

/// Inputs for the exported build environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildConfig {
  pub install_dir: PathBuf,
  pub os: Os,
  pub arch: Arch,
  pub node_version: String,
  pub atom_shell_version: String,
  pub atom_shell_release_url: String,
  pub dist_url: String,
}

impl BuildConfig {
  /// Config for an explicit install directory and platform, using the
  /// pinned versions and URLs.
  pub fn new(install_dir: impl Into<PathBuf>, platform: Platform) -> Self {
    Self {
      install_dir: install_dir.into(),
      os: platform.os,
      arch: platform.arch,
      node_version: consts::NODE_VERSION.to_string(),
      atom_shell_version: consts::ATOM_SHELL_VERSION.to_string(),
      atom_shell_release_url: consts::ATOM_SHELL_RELEASE_URL.to_string(),
      dist_url: consts::ATOM_DIST_URL.to_string(),
    }
  }

  /// Detect the host platform and the running executable's directory.
  pub fn detect() -> Result<Self, ConfigError> {
    Self::detect_with(&Overrides::default())
  }

  /// Detect inputs, skipping detection for anything `overrides` provides.
  ///
  /// An explicit OS works on hosts the detector does not recognise, and an
  /// explicit install directory avoids resolving the executable path. A
  /// relative install directory is made absolute against the working
  /// directory.
  pub fn detect_with(overrides: &Overrides) -> Result<Self, ConfigError> {
    Self::resolve(overrides, std::env::consts::OS)
  }

  fn resolve(overrides: &Overrides, host_os: &str) -> Result<Self, ConfigError> {
    let os = match overrides.os {
      Some(os) => os,
      None => Os::from_rust_os(host_os).ok_or_else(|| ConfigError::UnsupportedPlatform(host_os.to_string()))?,
    };
    let arch = overrides.arch.unwrap_or_default();
    let install_dir = match &overrides.install_dir {
      Some(dir) => std::path::absolute(dir).map_err(ConfigError::InstallDir)?,
      None => paths::install_dir().map_err(ConfigError::InstallDir)?,
    };

    let platform = Platform::new(os, arch);
    info!(platform = %platform, install_dir = %install_dir.display(), "resolved build inputs");
    Ok(Self::new(install_dir, platform))
  }

  pub fn with_os(mut self, os: Os) -> Self {
    self.os = os;
    self
  }

  pub fn with_arch(mut self, arch: Arch) -> Self {
    self.arch = arch;
    self
  }

  pub fn with_install_dir(mut self, install_dir: impl Into<PathBuf>) -> Self {
    self.install_dir = install_dir.into();
    self
  }

  pub fn platform(&self) -> Platform {
    Platform::new(self.os, self.arch)
  }

  /// Bundled header directory (`<install_dir>/include`)
  pub fn include_dir(&self) -> PathBuf {
    paths::include_dir(&self.install_dir)
  }

  pub fn atom_shell_package(&self) -> String {
    url::package_name(&self.atom_shell_version, self.os, self.arch)
  }

  pub fn atom_shell_package_url(&self) -> String {
    url::package_url(
      &self.atom_shell_release_url,
      &self.atom_shell_version,
      &self.atom_shell_package(),
    )
  }
}

/// Build the exported variables in their fixed definition order.
pub fn build_env(config: &BuildConfig) -> Result<EnvMap, ConfigError> {
  if !config.install_dir.is_absolute() {
    return Err(ConfigError::RelativeInstallDir(config.install_dir.clone()));
  }
  let include_dir = path_to_string(&config.include_dir())?;
  let package = config.atom_shell_package();
  let package_url = config.atom_shell_package_url();

  let mut env = EnvMap::builder();
  env
    .insert(vars::INCLUDE_DIR, include_dir)?
    .insert(vars::NODE_PLATFORM, config.os.as_str())?
    .insert(vars::NODE_ARCH, config.arch.as_str())?
    // An earlier release read this from a field that was never defined and
    // exported it blank. The node headers version is the intended source:
    // it is the same value npm_config_target hands to node-gyp below.
    .insert(vars::NODE_VERSION, config.node_version.as_str())?
    .insert(vars::ATOM_SHELL_VERSION, config.atom_shell_version.as_str())?
    .insert(vars::ATOM_SHELL_PACKAGE, package)?
    .insert(vars::ATOM_SHELL_PACKAGE_URL, package_url)?
    .insert(vars::ATOM_DIST_URL, config.dist_url.as_str())?;

  // npm-facing aliases
  let aliases = [
    (vars::NPM_CONFIG_DIST_URL, vars::ATOM_DIST_URL),
    (vars::NPM_CONFIG_TARGET, vars::NODE_VERSION),
    (vars::NPM_CONFIG_ARCH, vars::NODE_ARCH),
  ];
  for (alias, source) in aliases {
    env.alias(alias, source)?;
  }

  let env = env.finish();
  for entry in &env {
    debug!(name = %entry.name, value = %entry.value, "derived variable");
  }
  Ok(env)
}

fn path_to_string(path: &Path) -> Result<String, ConfigError> {
  path
    .to_str()
    .map(str::to_string)
    .ok_or_else(|| ConfigError::NonUtf8Path(path.to_path_buf()))
}
