use std::{borrow::Cow, ffi::OsStr};

use sugar_path::SugarPath;

pub trait PathExt {
  fn expect_to_str(&self) -> &str;

  fn expect_to_slash(&self) -> String;

  fn representative_file_name(&self) -> Cow<str>;
}

impl PathExt for std::path::Path {
  fn expect_to_str(&self) -> &str {
    self.to_str().unwrap_or_else(|| {
      panic!("Failed to convert {:?} to valid utf8 str", self.display());
    })
  }

  /// Forward-slash form of the path, with Windows verbatim prefixes stripped.
  /// Emitted configurations must look the same on every host OS.
  fn expect_to_slash(&self) -> String {
    let simplified = dunce::simplified(self);
    simplified
      .to_slash()
      .unwrap_or_else(|| panic!("Failed to convert {:?} to slash str", self.display()))
      .into_owned()
  }

  /// Derives a chunk-worthy name from a file path. `index`-like files borrow
  /// their parent directory's name instead.
  fn representative_file_name(&self) -> Cow<str> {
    let file_name =
      self.file_stem().map_or_else(|| self.to_string_lossy(), |stem| stem.to_string_lossy());

    match &*file_name {
      "index" | "mod" => self
        .parent()
        .and_then(Self::file_stem)
        .map(OsStr::to_string_lossy)
        .map_or(file_name, |parent_dir_name| parent_dir_name),
      _ => file_name,
    }
  }
}

#[test]
fn test_representative_file_name() {
  use std::path::Path;

  let cwd = Path::new(".").join("project");
  let path = cwd.join("src").join("app.js");
  assert_eq!(path.representative_file_name(), "app");

  let path = cwd.join("admin").join("index.js");
  assert_eq!(path.representative_file_name(), "admin");
}

#[test]
fn test_expect_to_slash_relative() {
  use std::path::Path;

  let path = Path::new("src").join("assets").join("fonts");
  assert_eq!(path.expect_to_slash(), "src/assets/fonts");
}
