//! p1env-lib: build environment for the p1stream native module
//!
//! This crate computes the variables a native-module build needs to target
//! atom-shell and renders them as shell statements:
//! - `BuildConfig`: host platform, architecture, versions and URLs
//! - `EnvMap`: the ordered, validated set of exported variables
//! - `shell`: `export NAME=VALUE` rendering
//! - `headers`: the bundled p1stream headers `p1stream_include_dir` points at

pub mod config;
pub mod consts;
pub mod env;
pub mod headers;
pub mod platform;
pub mod shell;
pub mod url;

pub use config::{BuildConfig, ConfigError, build_env};
pub use env::{EnvEntry, EnvError, EnvMap};
pub use shell::{Shell, render_exports, write_exports};
