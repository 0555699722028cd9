use std::path::{Path, PathBuf};

use crate::consts::INCLUDE_SUBDIR;

/// Returns the directory containing the running executable
pub fn install_dir() -> std::io::Result<PathBuf> {
  let exe = std::env::current_exe()?;
  let exe = dunce::canonicalize(&exe).unwrap_or(exe);
  exe
    .parent()
    .map(Path::to_path_buf)
    .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, "executable has no parent directory"))
}

/// Returns the bundled header directory for a given install directory
pub fn include_dir(install_dir: &Path) -> PathBuf {
  install_dir.join(INCLUDE_SUBDIR)
}
