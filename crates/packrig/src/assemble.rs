use std::path::Path;

use packrig_common::{
  AliasEntry, BabelOptions, BuildConfig, BuildOptions, ChunkIds, CssExtractConfig, DevServerConfig,
  Devtool, EntryItem, FileTest, FilenameTemplate, HtmlTemplateConfig, ImageMinimizerOptions,
  LoaderSpec, Minimizer, ModuleRule, Optimization, OutputConfig, PluginSpec, PostCssOptions,
  ResolveConfig, ResolvedEntry, RuleEffect, ScriptMinimizerOptions, SplitChunks,
};
use packrig_utils::path_ext::PathExt;
use sugar_path::SugarPath;

use crate::env::{Env, EnvInputs, DEFAULT_PORT};

const DEFAULT_DIR: &str = "dist";
const DEFAULT_SCRIPT_ENTRY: &str = "./src/index.js";
const DEFAULT_STYLE_ENTRY: &str = "./src/index.scss";
const DEFAULT_HTML_TEMPLATE: &str = "src/index.html";
const DEFAULT_WATCH_GLOB: &str = "./src/**/*";

const DEV_ENTRY_FILENAMES: &str = "[name].bundle.js";
const PROD_ENTRY_FILENAMES: &str = "[name].[contenthash].bundle.js";
const DEFAULT_ASSET_FILENAMES: &str = "assets/[name][extname][query]";
const DEFAULT_CSS_FILENAMES: &str = "[name].[contenthash].min.css";

/// Captures `NODE_ENV` and `PORT` from the given environment, then assembles.
/// Explicitly set options win over the environment, the environment wins over
/// the defaults.
pub fn assemble_with_env(env: &Env, mut options: BuildOptions) -> BuildConfig {
  let inputs = EnvInputs::capture(env);
  options.mode = options.mode.or(inputs.mode);
  options.port = options.port.or(inputs.port);
  assemble(options)
}

/// The assembler: a pure function from raw options to the complete
/// configuration value. Unset fields take the web-app defaults; the
/// mode-gated fields (devtool, minimizers, chunk ids, output filenames,
/// dev server, stylesheet pipeline head, CSS extraction) are each selected
/// independently.
pub fn assemble(raw: BuildOptions) -> BuildConfig {
  let BuildOptions {
    mode,
    port,
    cwd,
    entries,
    alias,
    dir,
    entry_filenames,
    asset_filenames,
    css_filenames,
    clean,
    devtool,
    rules,
    chunk_scope,
    chunk_ids,
    minify,
    server,
    html,
  } = raw;

  let mode = mode.unwrap_or_default();
  let is_dev = mode.is_dev();
  let port = port.unwrap_or(DEFAULT_PORT);
  let cwd = cwd.unwrap_or_else(|| std::env::current_dir().expect("Failed to get current dir"));

  let devtool = match devtool {
    Some(devtool) => Some(devtool),
    None => is_dev.then_some(Devtool::SourceMap),
  };

  let entries = resolve_entries(entries.unwrap_or_else(default_entries), &cwd);

  let dir = absolutize(&cwd, &dir.unwrap_or_else(|| DEFAULT_DIR.to_string()));
  let filename = FilenameTemplate::new(entry_filenames.unwrap_or_else(|| {
    if is_dev { DEV_ENTRY_FILENAMES } else { PROD_ENTRY_FILENAMES }.to_string()
  }));
  let asset_filename =
    FilenameTemplate::new(asset_filenames.unwrap_or_else(|| DEFAULT_ASSET_FILENAMES.to_string()));
  let css_filename =
    FilenameTemplate::new(css_filenames.unwrap_or_else(|| DEFAULT_CSS_FILENAMES.to_string()));

  let alias = alias
    .unwrap_or_else(default_alias)
    .into_iter()
    .map(|entry| AliasEntry {
      find: entry.find,
      replacement: absolutize(&cwd, &entry.replacement),
    })
    .collect();

  let rules = rules.unwrap_or_else(|| default_rules(is_dev));

  let minimize = minify.unwrap_or(!is_dev);
  let optimization = Optimization {
    split_chunks: SplitChunks { chunks: chunk_scope.unwrap_or_default() },
    chunk_ids: chunk_ids
      .unwrap_or(if is_dev { ChunkIds::Named } else { ChunkIds::TotalSize }),
    minimize,
    minimizers: if minimize {
      vec![
        Minimizer::Image(ImageMinimizerOptions::default()),
        Minimizer::Script(ScriptMinimizerOptions::default()),
      ]
    } else {
      vec![]
    },
  };

  let dev_server = is_dev.then(|| {
    let server = server.unwrap_or_default();
    DevServerConfig {
      history_api_fallback: server.history_api_fallback.unwrap_or(true),
      static_dir: server
        .static_dir
        .map_or_else(|| format!("{dir}/assets"), |static_dir| absolutize(&cwd, &static_dir)),
      open: server.open.unwrap_or(true),
      compress: server.compress.unwrap_or(true),
      port,
      watch: server.watch.unwrap_or_else(|| vec![DEFAULT_WATCH_GLOB.to_string()]),
    }
  });

  let html = html.unwrap_or_default();
  let mut plugins = vec![PluginSpec::HtmlTemplate(HtmlTemplateConfig {
    template: html.template.unwrap_or_else(|| DEFAULT_HTML_TEMPLATE.to_string()),
    filename: html.filename.unwrap_or_else(|| "index.html".to_string()),
    inject: html.inject.unwrap_or_default(),
  })];
  if !is_dev {
    plugins.push(PluginSpec::CssExtract(CssExtractConfig {
      filename: css_filename.clone(),
      chunk_filename: css_filename,
    }));
  }

  BuildConfig {
    mode,
    devtool,
    context: cwd.expect_to_slash(),
    entries,
    output: OutputConfig { dir, filename, asset_filename, clean: clean.unwrap_or(true) },
    resolve: ResolveConfig { alias },
    rules,
    optimization,
    dev_server,
    plugins,
  }
}

fn absolutize(cwd: &Path, path: &str) -> String {
  Path::new(path).absolutize_with(cwd).expect_to_slash()
}

fn resolve_entries(entries: Vec<EntryItem>, cwd: &Path) -> Vec<ResolvedEntry> {
  entries
    .into_iter()
    .map(|entry| {
      let name = match entry.name {
        Some(name) => name,
        None => entry.imports.first().map_or_else(
          || "main".to_string(),
          |import| Path::new(import).representative_file_name().into_owned(),
        ),
      };
      let imports = entry.imports.iter().map(|import| absolutize(cwd, import)).collect();
      ResolvedEntry { name, imports }
    })
    .collect()
}

fn default_entries() -> Vec<EntryItem> {
  vec![EntryItem {
    name: Some("main".to_string()),
    imports: vec![DEFAULT_SCRIPT_ENTRY.to_string(), DEFAULT_STYLE_ENTRY.to_string()],
  }]
}

fn default_alias() -> Vec<AliasEntry> {
  vec![
    AliasEntry::new("Assets", "./src/assets"),
    AliasEntry::new("Components", "./src/components"),
    AliasEntry::new("Layout", "./src/layout"),
    AliasEntry::new("Src", "./src"),
  ]
}

fn default_rules(is_dev: bool) -> Vec<ModuleRule> {
  vec![
    ModuleRule {
      test: FileTest::with_exclude(&["woff", "woff2", "eot", "ttf", "otf", "svg"], &["images"]),
      effect: RuleEffect::EmitFile { filename: "assets/fonts/[name][extname]".into() },
    },
    ModuleRule {
      test: FileTest::with_exclude(&["ico", "png", "jpg", "jpeg", "gif", "svg"], &["fonts"]),
      effect: RuleEffect::AutoAsset { filename: "assets/[name][extname]".into() },
    },
    ModuleRule {
      test: FileTest::new(&["sass", "scss", "css"]),
      effect: RuleEffect::Pipeline {
        loaders: vec![
          if is_dev { LoaderSpec::Style } else { LoaderSpec::CssExtract },
          LoaderSpec::Css,
          LoaderSpec::PostCss(PostCssOptions::default()),
          LoaderSpec::Sass,
        ],
      },
    },
    ModuleRule {
      test: FileTest::with_exclude(&["js"], &["node_modules"]),
      effect: RuleEffect::Pipeline { loaders: vec![LoaderSpec::Babel(BabelOptions::default())] },
    },
    ModuleRule {
      test: FileTest::new(&["html"]),
      effect: RuleEffect::Pipeline { loaders: vec![LoaderSpec::Html] },
    },
  ]
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use packrig_common::Mode;

  use super::*;

  fn options(mode: Mode) -> BuildOptions {
    BuildOptions {
      mode: Some(mode),
      cwd: Some(PathBuf::from("/project")),
      ..Default::default()
    }
  }

  #[test]
  fn development_enables_source_maps_and_skips_minification() {
    let config = assemble(options(Mode::Development));

    assert_eq!(config.devtool, Some(Devtool::SourceMap));
    assert!(!config.optimization.minimize);
    assert!(config.optimization.minimizers.is_empty());
    assert_eq!(config.optimization.chunk_ids, ChunkIds::Named);
  }

  #[test]
  fn production_minifies_and_extracts_css() {
    let config = assemble(options(Mode::Production));

    assert_eq!(config.devtool, None);
    assert!(config.optimization.minimize);
    assert!(config.optimization.minimizers.iter().any(Minimizer::is_script));
    assert_eq!(config.optimization.chunk_ids, ChunkIds::TotalSize);
    assert!(config.plugins.iter().any(|p| matches!(p, PluginSpec::CssExtract(_))));
  }

  #[test]
  fn development_excludes_css_extraction_plugin() {
    let config = assemble(options(Mode::Development));
    assert!(!config.plugins.iter().any(|p| matches!(p, PluginSpec::CssExtract(_))));
  }

  #[test]
  fn unset_mode_defaults_to_production() {
    let config = assemble(BuildOptions {
      cwd: Some(PathBuf::from("/project")),
      ..Default::default()
    });
    assert_eq!(config.mode, Mode::Production);
  }

  #[test]
  fn default_entry_is_one_grouping_of_script_and_stylesheet() {
    let config = assemble(options(Mode::Production));

    assert_eq!(config.entries.len(), 1);
    let entry = &config.entries[0];
    assert_eq!(entry.name, "main");
    assert_eq!(
      entry.imports,
      vec!["/project/src/index.js".to_string(), "/project/src/index.scss".to_string()]
    );
  }

  #[test]
  fn aliases_are_fixed_and_input_independent() {
    let dev = assemble(options(Mode::Development));
    let prod = assemble(BuildOptions { port: Some(3000), ..options(Mode::Production) });

    assert_eq!(dev.resolve.alias, prod.resolve.alias);
    assert_eq!(
      dev.resolve.alias,
      vec![
        AliasEntry::new("Assets", "/project/src/assets"),
        AliasEntry::new("Components", "/project/src/components"),
        AliasEntry::new("Layout", "/project/src/layout"),
        AliasEntry::new("Src", "/project/src"),
      ]
    );
  }

  #[test]
  fn output_filename_is_named_in_dev_and_hashed_in_prod() {
    let dev = assemble(options(Mode::Development));
    let prod = assemble(options(Mode::Production));

    assert_eq!(dev.output.filename.template(), "[name].bundle.js");
    assert!(prod.output.filename.has_hash());
  }

  #[test]
  fn dev_server_exists_only_in_development() {
    let dev = assemble(options(Mode::Development));
    let prod = assemble(options(Mode::Production));

    let server = dev.dev_server.expect("development config should carry a dev server");
    assert!(prod.dev_server.is_none());

    assert_eq!(server.port, DEFAULT_PORT);
    assert_eq!(server.static_dir, "/project/dist/assets");
    assert!(server.history_api_fallback);
    assert!(server.open);
    assert!(server.compress);
    assert!(server.watches("src/layout/header.scss"));
    assert!(!server.watches("dist/assets/logo.png"));
  }

  #[test]
  fn stylesheet_pipeline_head_follows_mode() {
    let style_loaders = |config: &BuildConfig| -> Vec<LoaderSpec> {
      config
        .rules
        .iter()
        .find_map(|rule| match &rule.effect {
          RuleEffect::Pipeline { loaders } if rule.test.matches("src/index.scss") => {
            Some(loaders.clone())
          }
          _ => None,
        })
        .expect("a stylesheet rule should exist")
    };

    let dev = style_loaders(&assemble(options(Mode::Development)));
    let prod = style_loaders(&assemble(options(Mode::Production)));

    assert_eq!(dev[0], LoaderSpec::Style);
    assert_eq!(prod[0], LoaderSpec::CssExtract);
    assert_eq!(dev[1..], prod[1..]);
    assert_eq!(
      dev[1..],
      vec![LoaderSpec::Css, LoaderSpec::PostCss(PostCssOptions::default()), LoaderSpec::Sass]
    );
  }

  #[test]
  fn entry_name_falls_back_to_representative_file_name() {
    let config = assemble(BuildOptions {
      entries: Some(vec![EntryItem::from("./src/admin/index.js")]),
      ..options(Mode::Development)
    });
    assert_eq!(config.entries[0].name, "admin");
  }

  #[test]
  fn filename_previews_substitute_entry_names() {
    let dev = assemble(options(Mode::Development));
    assert_eq!(
      dev.entry_filename_previews(),
      vec![("main".to_string(), "main.bundle.js".to_string())]
    );

    let prod = assemble(options(Mode::Production));
    assert_eq!(
      prod.entry_filename_previews(),
      vec![("main".to_string(), "main.[contenthash].bundle.js".to_string())]
    );
  }

  #[test]
  fn explicit_options_win_over_environment() {
    let env = Env::mock([(crate::env::MODE_VAR, "development"), (crate::env::PORT_VAR, "4100")]);
    let config = assemble_with_env(
      &env,
      BuildOptions { port: Some(8080), ..options(Mode::Production) },
    );

    assert_eq!(config.mode, Mode::Production);
    assert!(config.dev_server.is_none());
  }

  #[test]
  fn environment_port_reaches_the_dev_server() {
    let env = Env::mock([(crate::env::MODE_VAR, "development"), (crate::env::PORT_VAR, "3000")]);
    let config = assemble_with_env(
      &env,
      BuildOptions { cwd: Some(PathBuf::from("/project")), ..Default::default() },
    );
    assert_eq!(config.dev_server.expect("dev server").port, 3000);
  }

  #[test]
  fn unparseable_port_falls_back_to_default() {
    let env = Env::mock([(crate::env::MODE_VAR, "development"), (crate::env::PORT_VAR, "not-a-port")]);
    let config = assemble_with_env(
      &env,
      BuildOptions { cwd: Some(PathBuf::from("/project")), ..Default::default() },
    );
    assert_eq!(config.dev_server.expect("dev server").port, DEFAULT_PORT);
  }

  #[test]
  fn unset_port_falls_back_to_default() {
    let env = Env::mock([(crate::env::MODE_VAR, "development")]);
    let config = assemble_with_env(
      &env,
      BuildOptions { cwd: Some(PathBuf::from("/project")), ..Default::default() },
    );
    assert_eq!(config.dev_server.expect("dev server").port, DEFAULT_PORT);
  }
}
