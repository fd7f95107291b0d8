//! Binary entrypoint: read one JSON object from stdin, write one to stdout.

use std::io::{self, Read, Write};

use tracing_subscriber::EnvFilter;
use triangle_executor::{run, ExecutorError, TrialOutput};

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("triangle_executor=warn")),
    )
    .with_writer(io::stderr)
    .init();

  if let Err(e) = run_binary() {
    tracing::debug!(input_error = e.is_input_error(), "trial failed");
    let _ = writeln!(io::stderr(), "triangle-executor error: {}", e);
    std::process::exit(1);
  }
}

fn run_binary() -> Result<(), ExecutorError> {
  let mut raw = String::new();
  io::stdin().lock().read_to_string(&mut raw)?;

  let out = run(&raw)?;

  write_output(&out).map_err(ExecutorError::write)
}

fn write_output(out: &TrialOutput) -> io::Result<()> {
  let mut stdout = io::BufWriter::new(io::stdout().lock());
  serde_json::to_writer(&mut stdout, out)?;
  writeln!(stdout)?;
  stdout.flush()
}
