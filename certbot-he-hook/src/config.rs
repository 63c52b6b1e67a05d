//! Environment configuration
//!
//! certbot passes everything through the environment. It is read once, up
//! front, into a [`HookConfig`]; nothing below this module looks at the
//! environment again.

use std::time::Duration;

use certbot_he_provider::{Credentials, DEFAULT_BASE_URL, RecordId, Url};

use crate::error::{HookError, HookResult};

pub const HE_USERNAME: &str = "HE_USERNAME";
pub const HE_PASSWORD: &str = "HE_PASSWORD";
pub const HE_ZONE: &str = "HE_ZONE";
pub const CERTBOT_DOMAIN: &str = "CERTBOT_DOMAIN";
pub const CERTBOT_VALIDATION: &str = "CERTBOT_VALIDATION";
/// Set by certbot for the cleanup hook only, to whatever the auth hook printed.
pub const CERTBOT_AUTH_OUTPUT: &str = "CERTBOT_AUTH_OUTPUT";
pub const HE_PROPAGATION_SECONDS: &str = "HE_PROPAGATION_SECONDS";
pub const HE_BASE_URL: &str = "HE_BASE_URL";

/// 默认 DNS 传播等待时间（秒）
pub const DEFAULT_PROPAGATION_SECONDS: u64 = 30;

/// Which half of the challenge this invocation handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Create the validation record and print its ID.
    Auth,
    /// Delete the record the auth phase created.
    Cleanup { record_id: RecordId },
}

/// Everything a single hook run needs.
#[derive(Debug, Clone)]
pub struct HookConfig {
    pub credentials: Credentials,
    /// Zone managed in the account.
    pub zone: String,
    /// Domain being validated.
    pub domain: String,
    /// Token for the TXT record.
    pub validation: String,
    pub phase: Phase,
    /// Wait after a successful create.
    pub propagation: Duration,
    pub base_url: Url,
}

impl HookConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> HookResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through `lookup`.
    ///
    /// Required variables are checked in a fixed order and the first missing
    /// one is reported. Presence is what counts; an empty value is accepted.
    pub fn from_lookup<F>(lookup: F) -> HookResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| lookup(name).ok_or(HookError::MissingParameter(name));

        let username = required(HE_USERNAME)?;
        let password = required(HE_PASSWORD)?;
        let zone = required(HE_ZONE)?;
        let domain = required(CERTBOT_DOMAIN)?;
        let validation = required(CERTBOT_VALIDATION)?;

        let phase = match lookup(CERTBOT_AUTH_OUTPUT) {
            Some(output) => parse_phase_output(&output)?,
            None => Phase::Auth,
        };

        let propagation = match lookup(HE_PROPAGATION_SECONDS) {
            Some(raw) => parse_propagation(&raw)?,
            None => Duration::from_secs(DEFAULT_PROPAGATION_SECONDS),
        };

        let base_url = parse_base_url(lookup(HE_BASE_URL).as_deref().unwrap_or(DEFAULT_BASE_URL))?;

        Ok(Self {
            credentials: Credentials::new(username, password),
            zone,
            domain,
            validation,
            phase,
            propagation,
            base_url,
        })
    }
}

/// certbot hands back the auth hook's stdout, trailing newline and all.
fn parse_phase_output(output: &str) -> HookResult<Phase> {
    let record_id = output.trim();
    if record_id.is_empty() {
        return Err(HookError::InvalidParameter {
            name: CERTBOT_AUTH_OUTPUT,
            detail: "expected the record ID printed by the auth hook, got an empty value"
                .to_string(),
        });
    }
    Ok(Phase::Cleanup {
        record_id: RecordId::new(record_id),
    })
}

fn parse_propagation(raw: &str) -> HookResult<Duration> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| HookError::InvalidParameter {
            name: HE_PROPAGATION_SECONDS,
            detail: format!("'{raw}' is not a whole number of seconds ({e})"),
        })
}

fn parse_base_url(raw: &str) -> HookResult<Url> {
    let invalid = |detail: String| HookError::InvalidParameter {
        name: HE_BASE_URL,
        detail,
    };

    let url = Url::parse(raw).map_err(|e| invalid(format!("'{raw}': {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("'{raw}' is not an http(s) URL")));
    }
    Ok(url)
}
