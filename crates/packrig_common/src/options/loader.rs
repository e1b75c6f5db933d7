use schemars::JsonSchema;
use serde::Serialize;

/// A transformation step referenced by name and handed its option object.
/// The steps themselves live in the consuming bundler; this layer only
/// selects and configures them.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(tag = "loader", rename_all = "kebab-case")]
pub enum LoaderSpec {
  /// Injects stylesheets through `<style>` tags at runtime. Development only.
  Style,
  /// Resolves `url()` and `@import` references inside stylesheets.
  Css,
  PostCss(PostCssOptions),
  Sass,
  Babel(BabelOptions),
  /// Hands CSS to the extraction plugin instead of the JS runtime.
  CssExtract,
  Html,
  Custom(CustomLoader),
}

impl LoaderSpec {
  pub fn name(&self) -> &str {
    match self {
      Self::Style => "style",
      Self::Css => "css",
      Self::PostCss(_) => "post-css",
      Self::Sass => "sass",
      Self::Babel(_) => "babel",
      Self::CssExtract => "css-extract",
      Self::Html => "html",
      Self::Custom(custom) => &custom.name,
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, JsonSchema)]
pub struct PostCssOptions {
  pub preset_env: PresetEnvOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct PresetEnvOptions {
  pub browsers: String,
}

impl Default for PresetEnvOptions {
  fn default() -> Self {
    Self { browsers: "last 4 versions".to_string() }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct BabelOptions {
  pub presets: Vec<String>,
}

impl Default for BabelOptions {
  fn default() -> Self {
    Self { presets: vec!["@babel/preset-env".to_string()] }
  }
}

/// Escape hatch for steps this layer has no first-class knowledge of. The
/// options object is passed through to the consumer untouched.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct CustomLoader {
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub options: Option<serde_json::Value>,
}
