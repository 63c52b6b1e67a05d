//! certbot `--manual-auth-hook` / `--manual-cleanup-hook` for Hurricane Electric DNS
//!
//! The same binary serves both hooks. certbot sets `CERTBOT_AUTH_OUTPUT` only
//! for the cleanup hook, so its presence selects [`Phase::Cleanup`]:
//!
//! ```bash
//! certbot certonly --manual --preferred-challenges dns \
//!     --manual-auth-hook certbot-he-hook \
//!     --manual-cleanup-hook certbot-he-hook \
//!     -d example.com
//! ```
//!
//! The auth hook prints the new record ID; certbot feeds it back to the
//! cleanup hook, which deletes that record.

pub mod config;
pub mod error;
mod hook;

pub use config::{HookConfig, Phase};
pub use error::{EXIT_FAILURE, HookError, HookResult};
pub use hook::run;
