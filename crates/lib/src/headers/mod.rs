//! Bundled p1stream C headers.
//!
//! Native modules compile against `p1stream.h`, which the exported
//! `p1stream_include_dir` points at. The headers are embedded in the binary
//! and written out by [`install_headers`].

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

/// A header shipped with the crate.
#[derive(Debug, Clone, Copy)]
pub struct BundledHeader {
  pub name: &'static str,
  pub contents: &'static str,
}

/// Every header installed into the include directory
pub const HEADERS: &[BundledHeader] = &[
  BundledHeader {
    name: "p1stream.h",
    contents: include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/include/p1stream.h")),
  },
  BundledHeader {
    name: "p1stream_mac_preview.h",
    contents: include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/include/p1stream_mac_preview.h")),
  },
];

/// Errors that can occur while installing headers.
#[derive(Debug, Error)]
pub enum HeaderError {
  #[error("{} exists with different contents (use --force to overwrite)", path.display())]
  PathExists { path: PathBuf },

  #[error("failed to create directory {}: {source}", path.display())]
  CreateDir { path: PathBuf, source: std::io::Error },

  #[error("failed to read file {}: {source}", path.display())]
  ReadFile { path: PathBuf, source: std::io::Error },

  #[error("failed to write file {}: {source}", path.display())]
  WriteFile { path: PathBuf, source: std::io::Error },
}

/// Options for installing headers.
#[derive(Debug, Clone)]
pub struct InstallOptions {
  /// Directory the headers are written into
  pub include_dir: PathBuf,
  /// Overwrite headers whose contents differ
  pub force: bool,
}

/// Result of a successful install.
#[derive(Debug, Default)]
pub struct InstallResult {
  /// Headers that were created or overwritten
  pub written: Vec<PathBuf>,
  /// Headers already present with identical contents
  pub unchanged: Vec<PathBuf>,
}

/// Write the bundled headers into `options.include_dir`, creating it if needed.
///
/// # Errors
///
/// Returns an error if a header exists with different contents and `force`
/// is not set, or if the directory or a file cannot be written.
pub fn install_headers(options: &InstallOptions) -> Result<InstallResult, HeaderError> {
  let include_dir = &options.include_dir;
  fs::create_dir_all(include_dir).map_err(|e| HeaderError::CreateDir {
    path: include_dir.clone(),
    source: e,
  })?;

  let mut result = InstallResult::default();
  for header in HEADERS {
    let path = include_dir.join(header.name);

    if path.exists() {
      let existing = fs::read_to_string(&path).map_err(|e| HeaderError::ReadFile {
        path: path.clone(),
        source: e,
      })?;
      if existing == header.contents {
        debug!(path = %path.display(), "header up to date");
        result.unchanged.push(path);
        continue;
      }
      if !options.force {
        return Err(HeaderError::PathExists { path });
      }
    }

    fs::write(&path, header.contents).map_err(|e| HeaderError::WriteFile {
      path: path.clone(),
      source: e,
    })?;
    info!(path = %path.display(), "installed header");
    result.written.push(path);
  }

  Ok(result)
}

/// Whether every bundled header is present in `include_dir`
pub fn headers_installed(include_dir: &Path) -> bool {
  HEADERS.iter().all(|h| include_dir.join(h.name).is_file())
}
