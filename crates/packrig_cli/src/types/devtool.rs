use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, ValueEnum)]
#[clap(rename_all = "kebab-case")]
pub enum Devtool {
  SourceMap,
  InlineSourceMap,
  HiddenSourceMap,
}

impl From<Devtool> for packrig::Devtool {
  fn from(value: Devtool) -> Self {
    match value {
      Devtool::SourceMap => packrig::Devtool::SourceMap,
      Devtool::InlineSourceMap => packrig::Devtool::InlineSourceMap,
      Devtool::HiddenSourceMap => packrig::Devtool::HiddenSourceMap,
    }
  }
}
