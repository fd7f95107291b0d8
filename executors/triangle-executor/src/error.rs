//! Structured error types for the triangle executor.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecutorError {
  #[error("read: {0}")]
  Read(#[from] std::io::Error),

  #[error("parse: {0}")]
  Parse(serde_json::Error),

  #[error("schema: {0}")]
  Schema(serde_json::Error),

  #[error("write: {source}")]
  Write {
    #[source]
    source: std::io::Error,
  },
}

impl ExecutorError {
  pub fn write(source: impl Into<std::io::Error>) -> Self {
    Self::Write {
      source: source.into(),
    }
  }

  /// True for errors caused by the input document rather than the process streams.
  pub fn is_input_error(&self) -> bool {
    matches!(self, Self::Parse(_) | Self::Schema(_))
  }
}
