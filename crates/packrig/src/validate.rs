use packrig_common::{BuildConfig, LoaderSpec, RuleEffect};
use packrig_error::{BuildError, BuildResult};
use rustc_hash::FxHashSet;

/// Structural check of an assembled configuration. The invariant being
/// enforced is name-level resolvability: every entry, alias and descriptor the
/// consumer will look up must carry a usable name. Errors are collected
/// rather than short-circuited; advisory findings come back as warnings.
pub fn validate(config: &BuildConfig) -> BuildResult<Vec<String>> {
  let mut errors = BuildError::default();
  let mut warnings = Vec::new();

  if config.entries.is_empty() {
    errors.push_msg("configuration has no entries");
  }

  let mut entry_names = FxHashSet::default();
  for entry in &config.entries {
    if entry.name.is_empty() {
      errors.push_msg("entry with an empty name");
    } else if !entry_names.insert(entry.name.as_str()) {
      errors.push_msg(format!("duplicate entry name `{}`", entry.name));
    }
    if entry.imports.is_empty() {
      errors.push_msg(format!("entry `{}` has no imports", entry.name));
    }
  }

  let mut alias_keys = FxHashSet::default();
  for alias in &config.resolve.alias {
    if alias.find.is_empty() {
      errors.push_msg("alias with an empty key");
    } else if !alias_keys.insert(alias.find.as_str()) {
      errors.push_msg(format!("duplicate alias `{}`", alias.find));
    }
  }

  for rule in &config.rules {
    if rule.test.extensions.is_empty() {
      errors.push_msg("module rule matching no extensions");
    }
    if let RuleEffect::Pipeline { loaders } = &rule.effect {
      for loader in loaders {
        if let LoaderSpec::Custom(custom) = loader {
          if custom.name.is_empty() {
            errors.push_msg("custom loader with an empty name");
          }
        }
      }
    }
  }

  if let Some(server) = &config.dev_server {
    if server.port == 0 {
      errors.push_msg("dev server port must be non-zero");
    }
    if server.watch.is_empty() {
      warnings.push("dev server watch list is empty, changes will not trigger reloads".to_string());
    }
  }

  if !config.is_dev() && !config.output.filename.has_hash() {
    warnings.push(format!(
      "production output filename `{}` has no hash placeholder, cached bundles will go stale",
      config.output.filename.template()
    ));
  }

  if errors.is_empty() {
    Ok(warnings)
  } else {
    Err(errors)
  }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use packrig_common::{AliasEntry, BuildOptions, CustomLoader, EntryItem, FileTest, Mode, ModuleRule};

  use super::*;
  use crate::assemble;

  fn options(mode: Mode) -> BuildOptions {
    BuildOptions {
      mode: Some(mode),
      cwd: Some(PathBuf::from("/project")),
      ..Default::default()
    }
  }

  #[test]
  fn default_configs_are_clean() {
    assert!(validate(&assemble(options(Mode::Development))).expect("valid").is_empty());
    assert!(validate(&assemble(options(Mode::Production))).expect("valid").is_empty());
  }

  #[test]
  fn rejects_duplicate_entry_names() {
    let config = assemble(BuildOptions {
      entries: Some(vec![
        EntryItem { name: Some("main".to_string()), imports: vec!["./src/a.js".to_string()] },
        EntryItem { name: Some("main".to_string()), imports: vec!["./src/b.js".to_string()] },
      ]),
      ..options(Mode::Production)
    });

    let errors = validate(&config).expect_err("duplicate names should fail");
    assert!(errors.iter().any(|e| e.to_string().contains("duplicate entry name `main`")));
  }

  #[test]
  fn rejects_empty_alias_keys_and_duplicates() {
    let config = assemble(BuildOptions {
      alias: Some(vec![
        AliasEntry::new("", "./src"),
        AliasEntry::new("Src", "./src"),
        AliasEntry::new("Src", "./source"),
      ]),
      ..options(Mode::Production)
    });

    let errors = validate(&config).expect_err("bad aliases should fail");
    assert_eq!(errors.len(), 2);
  }

  #[test]
  fn rejects_port_zero() {
    let config = assemble(BuildOptions { port: Some(0), ..options(Mode::Development) });
    let errors = validate(&config).expect_err("port 0 should fail");
    assert!(errors.iter().any(|e| e.to_string().contains("port")));
  }

  #[test]
  fn rejects_empty_custom_loader_name() {
    let config = assemble(BuildOptions {
      rules: Some(vec![ModuleRule {
        test: FileTest::new(&["toml"]),
        effect: RuleEffect::Pipeline {
          loaders: vec![LoaderSpec::Custom(CustomLoader { name: String::new(), options: None })],
        },
      }]),
      ..options(Mode::Production)
    });

    let errors = validate(&config).expect_err("unnamed loader should fail");
    assert!(errors.iter().any(|e| e.to_string().contains("custom loader")));
  }

  #[test]
  fn collects_every_error_in_one_pass() {
    let config = assemble(BuildOptions {
      entries: Some(vec![EntryItem { name: Some(String::new()), imports: vec![] }]),
      alias: Some(vec![AliasEntry::new("", "./src")]),
      ..options(Mode::Production)
    });

    let errors = validate(&config).expect_err("should fail");
    assert!(errors.len() >= 3);
  }

  #[test]
  fn warns_on_hashless_production_filename() {
    let config = assemble(BuildOptions {
      entry_filenames: Some("[name].bundle.js".to_string()),
      ..options(Mode::Production)
    });

    let warnings = validate(&config).expect("valid with warnings");
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("hash"));
  }

  #[test]
  fn warns_on_empty_watch_list_in_development() {
    let config = assemble(BuildOptions {
      server: Some(packrig_common::ServerOptions { watch: Some(vec![]), ..Default::default() }),
      ..options(Mode::Development)
    });

    let warnings = validate(&config).expect("valid with warnings");
    assert!(warnings.iter().any(|w| w.contains("watch")));
  }
}
