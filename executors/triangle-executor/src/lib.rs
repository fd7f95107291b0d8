//! Triangle Executor: acute-triangle trial for the experiment runner.
//! Used by the binary for stdin/stdout; can also be called as a library.
//!
//! No DB, no network, no state between runs; pure computation.

pub mod angle;
pub mod classify;
pub mod config;
pub mod error;
pub mod types;

pub use classify::{classify, Classifier};
pub use config::Config;
pub use error::ExecutorError;
pub use types::{Sample, TrialInput, TrialOutput};

use serde::de::Error as _;

/// Parse and validate one input document, then classify it (no I/O).
///
/// Invalid JSON is a `Parse` error; valid JSON without a numeric `sample.x0`
/// .. `sample.y2` is a `Schema` error.
pub fn run(raw: &str) -> Result<TrialOutput, ExecutorError> {
  let value: serde_json::Value = serde_json::from_str(raw).map_err(ExecutorError::Parse)?;
  require_object_shape(&value)?;
  let input: TrialInput = serde_json::from_value(value).map_err(ExecutorError::Schema)?;
  Ok(classify(&input.sample))
}

/// Derived struct deserializers also accept sequences in field order; only
/// keyed objects are valid input, at the top level and under `sample`.
fn require_object_shape(value: &serde_json::Value) -> Result<(), ExecutorError> {
  if !value.is_object() {
    return Err(ExecutorError::Schema(serde_json::Error::custom(
      "input must be a JSON object",
    )));
  }
  match value.get("sample") {
    Some(sample) if !sample.is_object() => Err(ExecutorError::Schema(
      serde_json::Error::custom("field `sample` must be a JSON object"),
    )),
    _ => Ok(()),
  }
}
