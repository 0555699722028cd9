//! Rendering of an [`EnvMap`] as shell statements.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::env::{EnvEntry, EnvMap};

/// Shell dialects the exporter can emit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Shell {
  /// `export NAME=VALUE`, evaluated by sh, bash and zsh
  #[default]
  Posix,
  Fish,
  PowerShell,
}

impl Shell {
  pub fn as_str(&self) -> &'static str {
    match self {
      Shell::Posix => "sh",
      Shell::Fish => "fish",
      Shell::PowerShell => "powershell",
    }
  }

  /// Generate the statement that sets one variable.
  ///
  /// Values are written verbatim. They are expected to contain no whitespace
  /// or shell metacharacters.
  pub fn export_var(&self, name: &str, value: &str) -> String {
    match self {
      Shell::Posix => format!("export {}={}", name, value),
      Shell::Fish => format!("set -gx {} {}", name, value),
      Shell::PowerShell => format!("$env:{} = \"{}\"", name, value),
    }
  }

  fn export_entry(&self, entry: &EnvEntry) -> String {
    self.export_var(&entry.name, &entry.value)
  }
}

impl fmt::Display for Shell {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for Shell {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "sh" | "bash" | "zsh" | "posix" => Ok(Shell::Posix),
      "fish" => Ok(Shell::Fish),
      "powershell" | "pwsh" => Ok(Shell::PowerShell),
      other => Err(format!("unknown shell '{}' (supported: sh, bash, zsh, fish, powershell)", other)),
    }
  }
}

/// Write one statement per entry, in map order, each terminated by `\n`.
pub fn write_exports<W: Write>(env: &EnvMap, shell: Shell, out: &mut W) -> io::Result<()> {
  for entry in env {
    writeln!(out, "{}", shell.export_entry(entry))?;
  }
  Ok(())
}

/// Render the statements into a string.
pub fn render_exports(env: &EnvMap, shell: Shell) -> String {
  env.iter().map(|entry| shell.export_entry(entry) + "\n").collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::{BuildConfig, build_env};
  use crate::platform::Platform;
  use crate::platform::arch::Arch;
  use crate::platform::os::Os;

  fn sample() -> EnvMap {
    let mut builder = EnvMap::builder();
    builder
      .insert("node_platform", "linux")
      .unwrap()
      .insert("npm_config_target", "0.11.14")
      .unwrap();
    builder.finish()
  }

  #[test]
  fn posix_export_is_unquoted() {
    assert_eq!(Shell::Posix.export_var("node_arch", "x64"), "export node_arch=x64");
  }

  #[test]
  fn fish_and_powershell_exports() {
    assert_eq!(Shell::Fish.export_var("node_arch", "x64"), "set -gx node_arch x64");
    assert_eq!(Shell::PowerShell.export_var("node_arch", "x64"), r#"$env:node_arch = "x64""#);
  }

  #[test]
  fn writes_one_line_per_entry() {
    let mut out = Vec::new();
    write_exports(&sample(), Shell::Posix, &mut out).unwrap();
    assert_eq!(
      String::from_utf8(out).unwrap(),
      "export node_platform=linux\nexport npm_config_target=0.11.14\n"
    );
  }

  #[test]
  fn rendering_is_idempotent() {
    let env = sample();
    let first = render_exports(&env, Shell::Posix);
    let second = render_exports(&env, Shell::Posix);
    assert_eq!(first, second);

    let mut written = Vec::new();
    write_exports(&env, Shell::Posix, &mut written).unwrap();
    assert_eq!(written, first.as_bytes());
  }

  #[test]
  fn empty_map_renders_nothing() {
    assert_eq!(render_exports(&EnvMap::default(), Shell::Posix), "");
  }

  #[test]
  fn linux_scenario() {
    let config = BuildConfig::new("/opt/p1stream", Platform::new(Os::Linux, Arch::X64));
    let env = build_env(&config).unwrap();
    let output = render_exports(&env, Shell::Posix);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), env.len());
    let include = config.include_dir();
    assert_eq!(lines[0], format!("export p1stream_include_dir={}", include.display()));
    let target = lines.iter().position(|l| *l == "export npm_config_target=0.11.14");
    assert!(matches!(target, Some(i) if i > 0));

    for (line, entry) in lines.iter().zip(&env) {
      assert_eq!(*line, format!("export {}={}", entry.name, entry.value));
    }
  }

  #[test]
  fn parse_shell_names() {
    assert_eq!("bash".parse::<Shell>().unwrap(), Shell::Posix);
    assert_eq!("pwsh".parse::<Shell>().unwrap(), Shell::PowerShell);
    assert!("tcsh".parse::<Shell>().is_err());
  }
}
