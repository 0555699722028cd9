//! Download URL templating for atom-shell release packages.
//!
//! Every function takes its inputs explicitly; nothing is read from ambient
//! configuration, so a URL can never pick up a stale or unset field.

use crate::platform::arch::Arch;
use crate::platform::os::Os;

/// Filename of the atom-shell release archive for a version and platform.
///
/// ```
/// use p1env_lib::platform::{arch::Arch, os::Os};
/// use p1env_lib::url::package_name;
///
/// assert_eq!(package_name("0.17.1", Os::Linux, Arch::X64), "atom-shell-v0.17.1-linux-x64.zip");
/// ```
pub fn package_name(version: &str, os: Os, arch: Arch) -> String {
  format!("atom-shell-v{}-{}-{}.zip", version, os, arch)
}

/// Full download URL of a release archive under `release_url`.
pub fn package_url(release_url: &str, version: &str, package: &str) -> String {
  format!("{}/v{}/{}", release_url.trim_end_matches('/'), version, package)
}
