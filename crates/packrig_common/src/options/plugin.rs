use schemars::JsonSchema;
use serde::Serialize;

use crate::FilenameTemplate;

/// A post-build step referenced by name, owned by the external orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum PluginSpec {
  HtmlTemplate(HtmlTemplateConfig),
  CssExtract(CssExtractConfig),
}

impl PluginSpec {
  pub fn name(&self) -> &str {
    match self {
      Self::HtmlTemplate(_) => "html-template",
      Self::CssExtract(_) => "css-extract",
    }
  }
}

/// Renders the page shell from a template and injects the emitted bundles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct HtmlTemplateConfig {
  /// Template path, relative to the project root.
  pub template: String,
  pub filename: String,
  pub inject: InjectTarget,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum InjectTarget {
  Head,
  #[default]
  Body,
}

/// Pulls CSS out of the JS bundles into standalone stylesheets. Production
/// only; development keeps styles in the JS runtime for hot reload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct CssExtractConfig {
  pub filename: FilenameTemplate,
  pub chunk_filename: FilenameTemplate,
}

/// Raw HTML templating overrides.
#[derive(Debug, Default, Clone)]
pub struct HtmlOptions {
  pub template: Option<String>,
  pub filename: Option<String>,
  pub inject: Option<InjectTarget>,
}
