use schemars::JsonSchema;
use serde::Serialize;

use crate::{FilenameTemplate, LoaderSpec};

/// Maps a class of source files to the pipeline that handles them.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct ModuleRule {
  pub test: FileTest,
  pub effect: RuleEffect,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
pub struct FileTest {
  /// Extensions without the leading dot, matched case-insensitively.
  pub extensions: Vec<String>,
  /// Path fragments that opt a file out even when the extension matches.
  /// This is what lets `.svg` belong to fonts or images by location.
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub exclude: Vec<String>,
}

impl FileTest {
  pub fn new(extensions: &[&str]) -> Self {
    Self::with_exclude(extensions, &[])
  }

  pub fn with_exclude(extensions: &[&str], exclude: &[&str]) -> Self {
    Self {
      extensions: extensions.iter().map(ToString::to_string).collect(),
      exclude: exclude.iter().map(ToString::to_string).collect(),
    }
  }

  /// `path` is expected in forward-slash form, as emitted configurations use.
  pub fn matches(&self, path: &str) -> bool {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    let Some((_, ext)) = file_name.rsplit_once('.') else {
      return false;
    };

    if !self.extensions.iter().any(|candidate| ext.eq_ignore_ascii_case(candidate)) {
      return false;
    }

    !self.exclude.iter().any(|fragment| path.contains(fragment.as_str()))
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RuleEffect {
  /// Copied out as a standalone file (fonts).
  EmitFile { filename: FilenameTemplate },
  /// Inlined as a data URI when small enough, emitted otherwise (images).
  AutoAsset { filename: FilenameTemplate },
  /// Piped through an ordered loader chain; the last loader runs first.
  Pipeline { loaders: Vec<LoaderSpec> },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn matches_extension_case_insensitively() {
    let test = FileTest::new(&["png", "jpg"]);
    assert!(test.matches("src/assets/logo.PNG"));
    assert!(test.matches("src/assets/photo.jpg"));
    assert!(!test.matches("src/assets/icon.gif"));
    assert!(!test.matches("src/assets/Makefile"));
  }

  #[test]
  fn exclude_fragment_wins_over_extension() {
    let test = FileTest::with_exclude(&["js"], &["node_modules"]);
    assert!(test.matches("src/index.js"));
    assert!(!test.matches("node_modules/lodash/index.js"));
  }

  #[test]
  fn svg_splits_between_fonts_and_images_by_location() {
    let fonts = FileTest::with_exclude(&["woff", "woff2", "eot", "ttf", "otf", "svg"], &["images"]);
    let images = FileTest::with_exclude(&["ico", "png", "jpg", "jpeg", "gif", "svg"], &["fonts"]);

    assert!(fonts.matches("src/assets/fonts/icons.svg"));
    assert!(!images.matches("src/assets/fonts/icons.svg"));

    assert!(images.matches("src/assets/images/logo.svg"));
    assert!(!fonts.matches("src/assets/images/logo.svg"));
  }
}
