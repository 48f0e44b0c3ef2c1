#![windows_subsystem = "windows"]
use std::io::{self, BufRead, Write};
use std::panic::{self, AssertUnwindSafe};

use anyhow::{Context, Result};
use locloader_core::{protocol, Config, Plugin};
use tracing::{info, warn};

fn main() -> Result<()> {
    // stdout carries protocol responses, logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "locloader_core=info".into()),
        )
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    info!(language_dir = %config.language_dir.display(), "locloader core started");

    let mut plugin = Plugin::new(config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                warn!("failed to read request: {e}");
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let result = panic::catch_unwind(AssertUnwindSafe(|| protocol::handle(&mut plugin, &line)));

        let response = match result {
            Ok(resp) => resp,
            Err(_) => serde_json::json!({
                "status": "error",
                "message": "internal core error"
            })
            .to_string(),
        };

        if writeln!(stdout, "{response}").is_err() {
            break;
        }

        let _ = stdout.flush();
    }

    Ok(())
}
