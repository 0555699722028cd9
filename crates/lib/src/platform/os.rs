use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Host operating systems, named the way node's `process.platform` names them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
  Darwin,
  Linux,
  Win32,
  FreeBsd,
  OpenBsd,
}

impl Os {
  /// Detect the current operating system at runtime
  pub fn current() -> Option<Self> {
    Self::from_rust_os(std::env::consts::OS)
  }

  /// Map a Rust `target_os` value onto the node identifier
  pub fn from_rust_os(os: &str) -> Option<Self> {
    match os {
      "macos" => Some(Self::Darwin),
      "linux" => Some(Self::Linux),
      "windows" => Some(Self::Win32),
      "freebsd" => Some(Self::FreeBsd),
      "openbsd" => Some(Self::OpenBsd),
      _ => None,
    }
  }

  /// Returns the lowercase string identifier for this OS
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Darwin => "darwin",
      Self::Linux => "linux",
      Self::Win32 => "win32",
      Self::FreeBsd => "freebsd",
      Self::OpenBsd => "openbsd",
    }
  }
}

impl fmt::Display for Os {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for Os {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "darwin" => Ok(Self::Darwin),
      "linux" => Ok(Self::Linux),
      "win32" => Ok(Self::Win32),
      "freebsd" => Ok(Self::FreeBsd),
      "openbsd" => Ok(Self::OpenBsd),
      other => Err(format!(
        "unknown platform '{}' (expected one of: darwin, linux, win32, freebsd, openbsd)",
        other
      )),
    }
  }
}
