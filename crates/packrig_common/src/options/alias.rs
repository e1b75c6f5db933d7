use schemars::JsonSchema;
use serde::Serialize;

/// Maps a short import name to a source directory. Replacements are
/// absolutized against the project root during assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct AliasEntry {
  pub find: String,
  pub replacement: String,
}

impl AliasEntry {
  pub fn new(find: impl Into<String>, replacement: impl Into<String>) -> Self {
    Self { find: find.into(), replacement: replacement.into() }
  }
}
