//! Phase dispatch
//!
//! One run walks `login → resolve zone → create | delete` once, left to right.
//! Any failure ends the run; nothing already done on the provider is undone.

use std::io::Write;

use certbot_he_provider::{HeClient, RecordId, Session};

use crate::config::{HookConfig, Phase};
use crate::error::HookResult;

/// Run the hook for the phase selected in `config`.
///
/// In the auth phase the new record ID is written to `out` (certbot's
/// capture of stdout), followed by the propagation wait.
pub async fn run<W: Write>(config: &HookConfig, out: &mut W) -> HookResult<()> {
    let client = HeClient::with_base_url(config.base_url.clone())?;
    let session = client.login(&config.credentials).await?;

    match &config.phase {
        Phase::Auth => auth(&session, config, out).await,
        Phase::Cleanup { record_id } => cleanup(&session, config, record_id).await,
    }
}

async fn auth<W: Write>(session: &Session, config: &HookConfig, out: &mut W) -> HookResult<()> {
    let record_id = session
        .set_validation(&config.zone, &config.domain, &config.validation)
        .await?;

    writeln!(out, "{record_id}")?;
    out.flush()?;

    tracing::info!(
        "Record {record_id} created, waiting {}s for propagation",
        config.propagation.as_secs()
    );
    tokio::time::sleep(config.propagation).await;
    Ok(())
}

async fn cleanup(session: &Session, config: &HookConfig, record_id: &RecordId) -> HookResult<()> {
    session.delete_validation(&config.zone, record_id).await?;
    tracing::info!("Record {record_id} removed from {}", config.zone);
    Ok(())
}
