pub mod alias;
pub mod dev_server;
pub mod devtool;
pub mod entry;
pub mod filename_template;
pub mod loader;
pub mod mode;
pub mod module_rule;
pub mod normalized_config;
pub mod optimization;
pub mod plugin;

use std::path::PathBuf;

use crate::{
  AliasEntry, ChunkIds, ChunkScope, Devtool, EntryItem, HtmlOptions, Mode, ModuleRule,
  ServerOptions,
};

/// Raw, user-facing options. Every field is optional; `assemble` fills the
/// gaps with the web-app defaults and the mode-conditional selections.
#[derive(Default, Debug, Clone)]
pub struct BuildOptions {
  // --- Environment
  pub mode: Option<Mode>,
  pub port: Option<u16>,
  pub cwd: Option<PathBuf>,

  // --- Input
  pub entries: Option<Vec<EntryItem>>,
  pub alias: Option<Vec<AliasEntry>>,

  // --- Output
  pub dir: Option<String>,
  pub entry_filenames: Option<String>,
  pub asset_filenames: Option<String>,
  pub css_filenames: Option<String>,
  pub clean: Option<bool>,

  // --- Pipeline
  pub devtool: Option<Devtool>,
  pub rules: Option<Vec<ModuleRule>>,

  // --- Optimization
  pub chunk_scope: Option<ChunkScope>,
  pub chunk_ids: Option<ChunkIds>,
  pub minify: Option<bool>,

  // --- Serve
  pub server: Option<ServerOptions>,

  // --- Plugins
  pub html: Option<HtmlOptions>,
}
