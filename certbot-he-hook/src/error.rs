//! Hook error type

use certbot_he_provider::ProviderError;
use thiserror::Error;

/// Process exit code for every failure. Success is 0.
pub const EXIT_FAILURE: u8 = 1;

/// Everything that can end a hook run early.
#[derive(Error, Debug)]
pub enum HookError {
    /// A required environment variable is absent
    #[error("Required environment variable {0} is unset")]
    MissingParameter(&'static str),

    /// An environment variable is present but unusable
    #[error("Invalid value for {name}: {detail}")]
    InvalidParameter { name: &'static str, detail: String },

    /// Login, zone resolution or record mutation failed
    #[error("{0}")]
    Provider(#[from] ProviderError),

    /// The record ID could not be written for certbot to capture
    #[error("Failed to write record ID to stdout: {0}")]
    Output(#[from] std::io::Error),
}

impl HookError {
    /// All failures share one exit code; there is no partial success.
    pub fn exit_code(&self) -> u8 {
        EXIT_FAILURE
    }

    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::MissingParameter(_) | Self::InvalidParameter { .. } => true,
            Self::Provider(e) => e.is_expected(),
            Self::Output(_) => false,
        }
    }
}

/// Hook layer Result type alias
pub type HookResult<T> = std::result::Result<T, HookError>;
