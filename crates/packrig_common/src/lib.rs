mod options;

pub use options::{
  alias::AliasEntry,
  dev_server::{DevServerConfig, ServerOptions},
  devtool::Devtool,
  entry::{EntryItem, ResolvedEntry},
  filename_template::{FileNameRenderOptions, FilenameTemplate},
  loader::{BabelOptions, CustomLoader, LoaderSpec, PostCssOptions, PresetEnvOptions},
  mode::Mode,
  module_rule::{FileTest, ModuleRule, RuleEffect},
  normalized_config::{BuildConfig, OutputConfig, ResolveConfig},
  optimization::{
    ChunkIds, ChunkScope, ImageEncoder, ImageMinimizerOptions, Minimizer, Optimization,
    ScriptMinimizerOptions, SplitChunks,
  },
  plugin::{CssExtractConfig, HtmlOptions, HtmlTemplateConfig, InjectTarget, PluginSpec},
  BuildOptions,
};
