//! # certbot-he-provider
//!
//! Client for the [Hurricane Electric](https://dns.he.net/) free DNS service,
//! which offers no API, only an HTML console behind a login form.
//!
//! The client logs in, finds the numeric zone ID on the zone list page and
//! submits the same forms a browser would. Every outcome is read back from the
//! returned HTML; see [`markup`] for the exact markers.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls. Recommended for static or cross-compiled builds.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use certbot_he_provider::{Credentials, HeClient};
//!
//! # async fn example() -> certbot_he_provider::Result<()> {
//! let credentials = Credentials::new("user", "password");
//! let session = HeClient::new()?.login(&credentials).await?;
//!
//! // auth phase
//! let record_id = session
//!     .set_validation("example.com", "www.example.com", "token")
//!     .await?;
//!
//! // cleanup phase, possibly in another process
//! session.delete_validation("example.com", &record_id).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError).
//! [`ProviderError::kind`] sorts them into auth, resolution and mutation
//! failures. Nothing is retried.

mod auth;
mod error;
mod http_client;
pub mod markup;
mod record;
mod session;
mod types;
mod utils;
mod zone;

pub use error::{FailureKind, ProviderError, Result};

pub use session::{DEFAULT_BASE_URL, HeClient, Session};

pub use types::{
    ACME_CHALLENGE_PREFIX, Credentials, RecordId, VALIDATION_TTL, ValidationRecord, ZoneId,
};

pub use reqwest::Url;
