use schemars::JsonSchema;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Optimization {
  pub split_chunks: SplitChunks,
  pub chunk_ids: ChunkIds,
  pub minimize: bool,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub minimizers: Vec<Minimizer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
pub struct SplitChunks {
  pub chunks: ChunkScope,
}

/// Which import graphs are eligible for chunk splitting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChunkScope {
  #[default]
  All,
  Async,
  Initial,
}

/// Chunk naming policy: readable names for fast dev rebuilds, size-ordered
/// short ids for production cacheability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ChunkIds {
  Named,
  Deterministic,
  TotalSize,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(tag = "minimizer", rename_all = "kebab-case")]
pub enum Minimizer {
  Image(ImageMinimizerOptions),
  Script(ScriptMinimizerOptions),
}

impl Minimizer {
  pub fn is_script(&self) -> bool {
    matches!(self, Self::Script(_))
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ImageMinimizerOptions {
  pub encoder: ImageEncoder,
  pub quality: u8,
}

impl Default for ImageMinimizerOptions {
  fn default() -> Self {
    Self { encoder: ImageEncoder::MozJpeg, quality: 75 }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ImageEncoder {
  MozJpeg,
  OxiPng,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ScriptMinimizerOptions {
  pub compress: bool,
  pub mangle: bool,
}

impl Default for ScriptMinimizerOptions {
  fn default() -> Self {
    Self { compress: true, mangle: true }
  }
}
