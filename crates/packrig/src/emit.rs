use packrig_common::BuildConfig;
use packrig_error::BuildResult;

/// Compact JSON form of the configuration, as the external orchestrator
/// consumes it. Serialization is deterministic for a fixed input: field order
/// follows declaration order and every path is already in forward-slash form.
pub fn to_json(config: &BuildConfig) -> BuildResult<String> {
  serde_json::to_string(config).map_err(|err| anyhow::Error::new(err).into())
}

pub fn to_json_pretty(config: &BuildConfig) -> BuildResult<String> {
  serde_json::to_string_pretty(config).map_err(|err| anyhow::Error::new(err).into())
}

/// JSON Schema of the emitted value, for consumers that want to validate
/// before building.
pub fn config_schema() -> BuildResult<String> {
  serde_json::to_string_pretty(&schemars::schema_for!(BuildConfig))
    .map_err(|err| anyhow::Error::new(err).into())
}
