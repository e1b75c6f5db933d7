use std::fmt::Display;

use schemars::JsonSchema;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
  Development,
  #[default]
  Production,
}

impl Mode {
  #[inline]
  pub fn is_dev(self) -> bool {
    matches!(self, Self::Development)
  }
}

impl Display for Mode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Development => write!(f, "development"),
      Self::Production => write!(f, "production"),
    }
  }
}
