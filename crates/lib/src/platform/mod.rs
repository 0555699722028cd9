pub mod arch;
pub mod os;
pub mod paths;

use arch::Arch;
use os::Os;
use serde::Serialize;
use std::fmt;

/// Platform identifier combining OS and architecture (e.g., "darwin-x64")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Platform {
  pub os: Os,
  pub arch: Arch,
}

impl Platform {
  /// Create a new platform identifier
  pub fn new(os: Os, arch: Arch) -> Self {
    Self { os, arch }
  }

  /// Detect the current platform, pairing the host OS with the default arch
  ///
  /// Returns `None` if the OS is not supported
  pub fn current() -> Option<Self> {
    Some(Self {
      os: Os::current()?,
      arch: Arch::default(),
    })
  }

  /// Returns the platform pair as used in atom-shell package names (e.g., "darwin-x64")
  pub fn pair(&self) -> String {
    format!("{}-{}", self.os, self.arch)
  }
}

impl fmt::Display for Platform {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.pair())
  }
}
