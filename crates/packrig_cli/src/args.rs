use std::path::PathBuf;

use clap::Args;

use crate::types::{devtool::Devtool, mode::Mode};

#[derive(Args)]
pub struct EnvArgs {
  /// Overrides the NODE_ENV-derived mode.
  #[clap(long)]
  pub mode: Option<Mode>,

  /// Overrides the PORT-derived dev-server port.
  #[clap(long, short = 'p')]
  pub port: Option<u16>,

  #[clap(long)]
  pub cwd: Option<PathBuf>,
}

#[derive(Args)]
pub struct OutputArgs {
  #[clap(long, short = 'd')]
  pub dir: Option<String>,

  #[clap(long)]
  pub entry_filenames: Option<String>,

  #[clap(long)]
  pub asset_filenames: Option<String>,

  #[clap(long)]
  pub css_filenames: Option<String>,

  #[clap(long)]
  pub devtool: Option<Devtool>,
}

#[derive(Args)]
pub struct EmitArgs {
  /// Writes the configuration to a file instead of stdout.
  #[clap(long, short = 'o')]
  pub out: Option<PathBuf>,

  /// Emits compact JSON instead of pretty-printed.
  #[clap(long)]
  pub compact: bool,

  /// Prints the JSON Schema of the emitted value and exits.
  #[clap(long)]
  pub schema: bool,

  #[clap(long)]
  pub silent: bool,
}
