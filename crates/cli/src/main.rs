mod cmd;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use p1env_lib::config::Overrides;
use p1env_lib::platform::arch::Arch;
use p1env_lib::platform::os::Os;
use p1env_lib::shell::Shell;

use crate::output::OutputFormat;

/// p1env - print the build environment for the p1stream native module
#[derive(Parser)]
#[command(name = "p1env")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
  /// Enable verbose logging on stderr
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Option<Commands>,

  #[command(flatten)]
  env: EnvArgs,
}

#[derive(Subcommand)]
enum Commands {
  /// Print shell export statements (default)
  Env(EnvArgs),

  /// Show the detected build inputs
  Info {
    #[command(flatten)]
    inputs: InputArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    format: OutputFormat,
  },

  /// Write the bundled p1stream headers into the include directory
  InstallHeaders {
    #[command(flatten)]
    inputs: InputArgs,

    /// Overwrite headers that were modified
    #[arg(long)]
    force: bool,
  },
}

#[derive(Args, Clone, Default)]
struct EnvArgs {
  #[command(flatten)]
  inputs: InputArgs,

  /// Shell dialect to emit
  #[arg(short, long, default_value_t)]
  shell: Shell,

  /// Output format
  #[arg(short, long, value_enum, default_value_t)]
  format: OutputFormat,
}

/// Overrides for the detected build inputs
#[derive(Args, Clone, Default)]
pub struct InputArgs {
  /// Target platform instead of the host (darwin, linux, win32, freebsd, openbsd)
  #[arg(long)]
  pub platform: Option<Os>,

  /// Target architecture (x64, ia32, arm64)
  #[arg(long)]
  pub arch: Option<Arch>,

  /// Install directory the include path is resolved against
  #[arg(long)]
  pub install_dir: Option<PathBuf>,
}

impl From<&InputArgs> for Overrides {
  fn from(args: &InputArgs) -> Self {
    Overrides {
      os: args.platform,
      arch: args.arch,
      install_dir: args.install_dir.clone(),
    }
  }
}

fn main() {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  if let Err(e) = run(cli) {
    output::print_error(&format!("{:#}", e));
    std::process::exit(1);
  }
}

fn run(cli: Cli) -> Result<()> {
  match cli.command {
    Some(Commands::Env(args)) => cmd::cmd_env(&args.inputs, args.shell, args.format),
    Some(Commands::Info { inputs, format }) => cmd::cmd_info(&inputs, format),
    Some(Commands::InstallHeaders { inputs, force }) => cmd::cmd_install_headers(&inputs, force),
    None => cmd::cmd_env(&cli.env.inputs, cli.env.shell, cli.env.format),
  }
}
