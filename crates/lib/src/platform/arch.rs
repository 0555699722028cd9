use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// CPU architectures, named the way node and npm name them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
  /// atom-shell ships x64 builds for every platform p1stream targets, so this
  /// is a fixed literal rather than a detected value.
  #[default]
  X64,
  Ia32,
  Arm64,
}

impl Arch {
  /// Returns the lowercase string identifier for this architecture
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::X64 => "x64",
      Self::Ia32 => "ia32",
      Self::Arm64 => "arm64",
    }
  }
}

impl fmt::Display for Arch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for Arch {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "x64" => Ok(Self::X64),
      "ia32" => Ok(Self::Ia32),
      "arm64" => Ok(Self::Arm64),
      other => Err(format!("unknown arch '{}' (expected one of: x64, ia32, arm64)", other)),
    }
  }
}
