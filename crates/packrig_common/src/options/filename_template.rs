use packrig_utils::hash_pattern::extract_hash_pattern;
use schemars::JsonSchema;
use serde::Serialize;

/// Output naming pattern with `[name]`, `[hash]`/`[hash:N]`, `[contenthash]`,
/// `[ext]`, `[extname]` and `[query]` placeholders. The consuming bundler
/// renders the final names; rendering here exists for previews and tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct FilenameTemplate {
  template: String,
}

impl FilenameTemplate {
  pub fn new(template: String) -> Self {
    Self { template }
  }

  pub fn template(&self) -> &str {
    &self.template
  }

  /// Whether the template cache-busts via `[hash]` or `[contenthash]`.
  pub fn has_hash(&self) -> bool {
    extract_hash_pattern(&self.template, "hash").is_some()
      || extract_hash_pattern(&self.template, "contenthash").is_some()
  }

  pub fn render(&self, options: &FileNameRenderOptions) -> String {
    let mut output = self.template.clone();

    if let Some(name) = options.name {
      output = output.replace("[name]", name);
    }

    if let Some(hash) = options.hash {
      // `[hash]` and `[contenthash]` are distinct placeholders for the
      // consumer, but both substitute the same digest at this layer.
      for key in ["hash", "contenthash"] {
        if let Some(extracted) = extract_hash_pattern(&output, key) {
          let len = extracted.len.unwrap_or(hash.len()).min(hash.len());
          output = output.replace(&extracted.pattern, &hash[..len]);
        }
      }
    }

    if let Some(ext) = options.ext {
      output = output.replace("[extname]", &format!(".{ext}"));
      output = output.replace("[ext]", ext);
    }

    match options.query {
      Some(query) => output = output.replace("[query]", query),
      None => output = output.replace("[query]", ""),
    }

    output
  }
}

impl From<&str> for FilenameTemplate {
  fn from(value: &str) -> Self {
    Self::new(value.to_string())
  }
}

#[derive(Debug, Default)]
pub struct FileNameRenderOptions<'a> {
  pub name: Option<&'a str>,
  pub hash: Option<&'a str>,
  pub ext: Option<&'a str>,
  pub query: Option<&'a str>,
}
