use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum Mode {
  Development,
  Production,
}

impl From<Mode> for packrig::Mode {
  fn from(value: Mode) -> Self {
    match value {
      Mode::Development => packrig::Mode::Development,
      Mode::Production => packrig::Mode::Production,
    }
  }
}
