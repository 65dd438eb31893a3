//! Healthcare Global Trends: disease statistics dashboard
//!
//! Main entry point for the terminal application.

use anyhow::Result;
use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use healthtrends::adapters::sanitize::SanitizingMakeWriter;
use healthtrends::tui::App;

fn main() -> Result<()> {
    // Logs written to the terminal would corrupt the alternate screen.
    // auto: interactive TTY logs to a file, otherwise to stdout.
    let log_mode = std::env::var("HEALTHTRENDS_LOG_MODE").unwrap_or_else(|_| "auto".to_string());

    let interactive = std::io::stdout().is_terminal();
    let use_file = match log_mode.as_str() {
        "file" => true,
        "stdout" => false,
        _ => interactive,
    };

    let (writer, _guard) = if use_file {
        let log_file = std::env::var("HEALTHTRENDS_LOG_FILE")
            .unwrap_or_else(|_| "healthtrends.log".to_string());

        if let Some(parent) = std::path::Path::new(&log_file).parent() {
            if !parent.as_os_str().is_empty() {
                let _ = std::fs::create_dir_all(parent);
            }
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)?;
        tracing_appender::non_blocking(file)
    } else {
        tracing_appender::non_blocking(std::io::stdout())
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(!use_file)
                .with_writer(SanitizingMakeWriter::new(writer)),
        )
        .init();

    tracing::info!("Starting Healthcare Global Trends...");

    let mut app = App::new()?;
    app.run()?;

    tracing::info!("Shutdown complete.");
    Ok(())
}
