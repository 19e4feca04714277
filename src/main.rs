use std::process::ExitCode;

use anyhow::Context;
use screen_entry::{App, EntryConfig, Session};
use tracing_subscriber::EnvFilter;

/// Conventional status for a Control+C exit
const INTERRUPTED: u8 = 130;

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = EntryConfig::load_or_default()
        .with_context(|| format!("loading {}", EntryConfig::default_path().display()))?;

    // The terminal is restored before anything is printed
    let session = App::new(config).run()?;

    match session {
        Session::Committed(values) => {
            for (label, value) in values {
                println!("{label}: {value}");
            }
        }
        Session::Cancelled => println!("cancelled"),
        Session::Interrupted => return Ok(ExitCode::from(INTERRUPTED)),
    }
    Ok(ExitCode::SUCCESS)
}
