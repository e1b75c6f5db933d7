use std::ops::{Deref, DerefMut};

/// Aggregate of everything that went wrong while assembling, validating or
/// emitting a build configuration. Collecting instead of short-circuiting lets
/// a caller surface every finding in one pass.
#[derive(Debug, Default)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl BuildError {
  pub fn msg(message: impl Into<String>) -> Self {
    Self(vec![anyhow::anyhow!(message.into())])
  }

  pub fn push_msg(&mut self, message: impl Into<String>) {
    self.0.push(anyhow::anyhow!(message.into()));
  }
}

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

#[test]
fn test_collects_multiple_errors() {
  let mut error = BuildError::msg("first");
  error.push_msg("second");
  assert_eq!(error.len(), 2);
  assert_eq!(error[0].to_string(), "first");
  assert_eq!(error[1].to_string(), "second");
}
