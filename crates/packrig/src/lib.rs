mod assemble;
mod emit;
mod env;
mod validate;

pub use crate::{
  assemble::{assemble, assemble_with_env},
  emit::{config_schema, to_json, to_json_pretty},
  env::{Env, EnvInputs, DEFAULT_PORT, MODE_VAR, PORT_VAR},
  validate::validate,
};
pub use packrig_common::*;
pub use packrig_error::{BuildError, BuildResult};
