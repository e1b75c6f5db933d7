use packrig_common::Mode;
use rustc_hash::FxHashMap;

/// Conventional mode indicator of the web build ecosystem.
pub const MODE_VAR: &str = "NODE_ENV";
pub const PORT_VAR: &str = "PORT";
pub const DEFAULT_PORT: u16 = 9000;

/// Environment reader with a map-backed double, so environment-driven
/// behavior is testable without mutating process-global state.
#[derive(Debug, Default)]
pub struct Env {
  overrides: Option<FxHashMap<String, String>>,
}

impl Env {
  pub fn process() -> Self {
    Self { overrides: None }
  }

  #[cfg(test)]
  pub(crate) fn mock<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
  where
    K: Into<String>,
    V: Into<String>,
  {
    Self { overrides: Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect()) }
  }

  pub fn var(&self, name: &str) -> Option<String> {
    match &self.overrides {
      Some(map) => map.get(name).cloned(),
      None => std::env::var(name).ok(),
    }
  }
}

/// The two environment-derived assembler inputs. Malformed values degrade to
/// `None` here and to the defaults inside `assemble`; nothing in this layer
/// signals failure.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EnvInputs {
  pub mode: Option<Mode>,
  pub port: Option<u16>,
}

impl EnvInputs {
  pub fn capture(env: &Env) -> Self {
    let mode = env.var(MODE_VAR).and_then(|value| match value.as_str() {
      "development" => Some(Mode::Development),
      "production" => Some(Mode::Production),
      _ => None,
    });

    let port = env.var(PORT_VAR).and_then(|value| value.trim().parse::<u16>().ok());

    Self { mode, port }
  }
}
