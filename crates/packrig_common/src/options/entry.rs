use schemars::JsonSchema;
use serde::Serialize;

/// A named grouping of entry files. A grouping with no name borrows one from
/// its first import during assembly.
#[derive(Debug, Default, Clone)]
pub struct EntryItem {
  pub name: Option<String>,
  pub imports: Vec<String>,
}

impl From<&str> for EntryItem {
  fn from(value: &str) -> Self {
    Self { name: None, imports: vec![value.to_string()] }
  }
}

/// Entry grouping after assembly: a concrete name and absolute import paths.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ResolvedEntry {
  pub name: String,
  pub imports: Vec<String>,
}
