//! Fixed literals describing the atom-shell toolchain p1stream builds against.

/// Application name used in log targets and CLI output
pub const APP_NAME: &str = "p1env";

/// Name of the bundled header directory, relative to the install directory
pub const INCLUDE_SUBDIR: &str = "include";

/// Node version atom-shell embeds; native modules compile against these headers
pub const NODE_VERSION: &str = "0.11.14";

/// atom-shell release the native module is built for
pub const ATOM_SHELL_VERSION: &str = "0.17.1";

/// Base of the atom-shell GitHub release downloads
pub const ATOM_SHELL_RELEASE_URL: &str = "https://github.com/atom/atom-shell/releases/download";

/// Host serving atom-shell node headers for node-gyp
pub const ATOM_DIST_URL: &str = "https://gh-contractor-zcbenz.s3.amazonaws.com/atom-shell/dist";

/// Exported variable names, in definition order.
pub mod vars {
  pub const INCLUDE_DIR: &str = "p1stream_include_dir";
  pub const NODE_PLATFORM: &str = "node_platform";
  pub const NODE_ARCH: &str = "node_arch";
  pub const NODE_VERSION: &str = "node_version";
  pub const ATOM_SHELL_VERSION: &str = "atom_shell_version";
  pub const ATOM_SHELL_PACKAGE: &str = "atom_shell_package";
  pub const ATOM_SHELL_PACKAGE_URL: &str = "atom_shell_package_url";
  pub const ATOM_DIST_URL: &str = "atom_dist_url";
  pub const NPM_CONFIG_DIST_URL: &str = "npm_config_dist_url";
  pub const NPM_CONFIG_TARGET: &str = "npm_config_target";
  pub const NPM_CONFIG_ARCH: &str = "npm_config_arch";
}
