use packrig_utils::sanitize_file_name::sanitize_file_name;
use schemars::JsonSchema;
use serde::Serialize;

use crate::{
  AliasEntry, DevServerConfig, Devtool, FileNameRenderOptions, FilenameTemplate, Mode, ModuleRule,
  Optimization, PluginSpec, ResolvedEntry,
};

/// The assembled build configuration: every field concrete, every path
/// absolute (forward-slash form) or root-relative, ready to be serialized for
/// the external orchestrator. Built once, never mutated.
#[derive(Debug, Serialize, JsonSchema)]
pub struct BuildConfig {
  pub mode: Mode,
  /// Absent means source maps are disabled.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub devtool: Option<Devtool>,
  /// Absolute project root all relative inputs were resolved against.
  pub context: String,
  pub entries: Vec<ResolvedEntry>,
  pub output: OutputConfig,
  pub resolve: ResolveConfig,
  pub rules: Vec<ModuleRule>,
  pub optimization: Optimization,
  /// Present only in development mode.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub dev_server: Option<DevServerConfig>,
  pub plugins: Vec<PluginSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct OutputConfig {
  /// Absolute output directory.
  pub dir: String,
  pub filename: FilenameTemplate,
  pub asset_filename: FilenameTemplate,
  /// Wipe the output directory before the next build.
  pub clean: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ResolveConfig {
  pub alias: Vec<AliasEntry>,
}

impl BuildConfig {
  pub fn is_dev(&self) -> bool {
    self.mode.is_dev()
  }

  /// Output filename per entry with the name substituted and the hash
  /// placeholders left for the consumer to fill in at emit time.
  pub fn entry_filename_previews(&self) -> Vec<(String, String)> {
    self
      .entries
      .iter()
      .map(|entry| {
        let name = sanitize_file_name(&entry.name);
        let rendered = self
          .output
          .filename
          .render(&FileNameRenderOptions { name: Some(&name), ..Default::default() });
        (entry.name.clone(), rendered)
      })
      .collect()
  }
}
