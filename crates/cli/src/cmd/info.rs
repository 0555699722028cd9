//! Implementation of the `p1env info` command.

use anyhow::Result;
use owo_colors::{OwoColorize, Stream};

use p1env_lib::consts::APP_NAME;
use p1env_lib::headers::headers_installed;

use crate::InputArgs;
use crate::output::{OutputFormat, print_info, print_json, print_stat, status_symbol};

pub fn cmd_info(inputs: &InputArgs, format: OutputFormat) -> Result<()> {
  let config = super::resolve_config(inputs)?;
  let include_dir = config.include_dir();
  let has_headers = headers_installed(&include_dir);

  if format.is_json() {
    let json = serde_json::json!({
      "config": config,
      "include_dir": include_dir,
      "include_dir_exists": include_dir.is_dir(),
      "headers_installed": has_headers,
      "atom_shell_package": config.atom_shell_package(),
      "atom_shell_package_url": config.atom_shell_package_url(),
    });
    return print_json(&json);
  }

  println!(
    "{} v{}",
    APP_NAME.if_supports_color(Stream::Stdout, |s| s.bold()),
    env!("CARGO_PKG_VERSION")
  );
  println!();
  print_stat("Platform", &config.platform().to_string());
  print_stat("Install dir", &config.install_dir.display().to_string());
  print_stat(
    "Include dir",
    &format!("{} {}", include_dir.display(), status_symbol(has_headers)),
  );
  print_stat("Node", &config.node_version);
  print_stat("atom-shell", &config.atom_shell_version);
  print_stat("Package", &config.atom_shell_package_url());
  print_stat("Dist URL", &config.dist_url);

  if !has_headers {
    println!();
    print_info("Headers not installed; run 'p1env install-headers' before building native modules");
  }

  Ok(())
}
