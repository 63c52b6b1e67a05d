//! Hook entry point
//!
//! stdout belongs to certbot (it captures the record ID), so logs and
//! diagnostics go to stderr.

use std::process::ExitCode;

use certbot_he_hook::{HookConfig, HookError, run};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log filter when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize tracing to stderr; `log` records from the provider crate are bridged in
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(filter)
        .init();

    let config = match HookConfig::from_env() {
        Ok(config) => config,
        Err(e) => return fail(&e),
    };
    tracing::debug!(
        "Hook started: phase={:?}, zone={}, domain={}",
        config.phase,
        config.zone,
        config.domain
    );

    let mut stdout = std::io::stdout();
    match run(&config, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(&e),
    }
}

fn fail(error: &HookError) -> ExitCode {
    if !error.is_expected() {
        tracing::error!("Hook failed: {error:?}");
    }
    eprintln!("ERROR: {error}");
    ExitCode::from(error.exit_code())
}
