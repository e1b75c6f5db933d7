use schemars::JsonSchema;
use serde::Serialize;

/// Raw dev-server overrides. Ignored outside development mode, where no
/// server section is emitted at all.
#[derive(Debug, Default, Clone)]
pub struct ServerOptions {
  pub static_dir: Option<String>,
  pub open: Option<bool>,
  pub compress: Option<bool>,
  pub history_api_fallback: Option<bool>,
  pub watch: Option<Vec<String>>,
}

/// Local development server section of the assembled configuration. The
/// server itself belongs to the external orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct DevServerConfig {
  pub history_api_fallback: bool,
  /// Directory served as-is, without going through the module graph.
  pub static_dir: String,
  pub open: bool,
  pub compress: bool,
  pub port: u16,
  /// Globs, relative to the project root, that trigger a reload on change.
  pub watch: Vec<String>,
}

impl DevServerConfig {
  /// True when a path relative to the project root falls under a watch glob.
  pub fn watches(&self, path: &str) -> bool {
    let path = path.strip_prefix("./").unwrap_or(path);
    self.watch.iter().any(|pattern| {
      let pattern = pattern.strip_prefix("./").unwrap_or(pattern);
      fast_glob::glob_match(pattern, path)
    })
  }
}
