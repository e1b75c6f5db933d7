use std::fmt::Display;

use schemars::JsonSchema;
use serde::Serialize;

/// Source-map flavor. Absent from the configuration means source maps are
/// disabled entirely, which is the production default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Devtool {
  SourceMap,
  InlineSourceMap,
  HiddenSourceMap,
}

impl Display for Devtool {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::SourceMap => write!(f, "source-map"),
      Self::InlineSourceMap => write!(f, "inline-source-map"),
      Self::HiddenSourceMap => write!(f, "hidden-source-map"),
    }
  }
}
