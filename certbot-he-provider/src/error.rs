use thiserror::Error;

/// Error type for every operation against the Hurricane Electric console.
///
/// The console has no API, so most failures are inferred from the absence of
/// a marker in the returned HTML rather than from a status code. None of the
/// variants are retried; each one is terminal for the current run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    #[error("[he] Network error: {detail}")]
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("[he] Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The console answered with a non-2xx status.
    #[error("[he] Unexpected HTTP status {status} from {url}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Request URL.
        url: String,
    },

    /// The login page came back with the `dns_err` block.
    #[error("[he] Login failed, check the username and password")]
    InvalidCredentials,

    /// No "delete zone" control exists for the zone, so it is not in the account.
    #[error("[he] Zone '{zone}' not found in account")]
    ZoneNotFound {
        /// Zone name that was looked up.
        zone: String,
    },

    /// The record table returned after the create form did not list the record.
    ///
    /// Covers both a rejected create and a changed page layout; the two cannot be told apart.
    #[error(
        "[he] Record '{record_name}' not created or not found in the zone listing, check that it was created"
    )]
    RecordNotConfirmed {
        /// Full name of the record that was submitted.
        record_name: String,
    },

    /// The delete response carried no `dns_status` block.
    #[error(
        "[he] Unable to delete record '{record_id}': it does not exist, was already deleted, or needs to be removed manually"
    )]
    DeleteNotConfirmed {
        /// ID of the record that was submitted for deletion.
        record_id: String,
    },

    /// Failed to interpret a URL or a markup selector.
    #[error("[he] Parse error: {detail}")]
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },
}

/// Coarse classification of a [`ProviderError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Credentials rejected.
    Auth,
    /// Zone name absent from the account.
    Resolution,
    /// Create or delete not confirmed by the response page.
    Mutation,
    /// Transport or parsing trouble unrelated to the account state.
    Other,
}

impl ProviderError {
    /// Classify the error into auth / resolution / mutation failures.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidCredentials => FailureKind::Auth,
            Self::ZoneNotFound { .. } => FailureKind::Resolution,
            Self::RecordNotConfirmed { .. } | Self::DeleteNotConfirmed { .. } => {
                FailureKind::Mutation
            }
            Self::NetworkError { .. }
            | Self::Timeout { .. }
            | Self::HttpStatus { .. }
            | Self::ParseError { .. } => FailureKind::Other,
        }
    }

    /// 是否为预期行为（凭证错误、zone 不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials
                | Self::ZoneNotFound { .. }
                | Self::RecordNotConfirmed { .. }
                | Self::DeleteNotConfirmed { .. }
        )
    }
}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
