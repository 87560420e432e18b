//! One-shot pasteboard inspection tool.
//!
//! Reads the system pasteboard once, prints every stored representation to
//! stdout, and exits. There is no command-line surface; `RUST_LOG` controls
//! the stderr diagnostics.

use anyhow::{Context, Result};
use pastepeek_pasteboard::SystemSource;
use pastepeek_report::write_report;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut source = SystemSource::general().context("Failed to open the system pasteboard")?;
    let stdout = std::io::stdout();
    write_report(&mut source, &mut stdout.lock())
        .context("Failed to report the pasteboard contents")?;
    Ok(())
}
