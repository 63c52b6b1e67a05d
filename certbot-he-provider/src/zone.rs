//! Zone ID resolution

use crate::error::{ProviderError, Result};
use crate::markup;
use crate::session::Session;
use crate::types::ZoneId;

impl Session {
    /// Look up the console's numeric ID for `zone_name`.
    ///
    /// Fetches the zone list fresh on every call; nothing is cached.
    pub async fn resolve_zone_id(&self, zone_name: &str) -> Result<ZoneId> {
        let html = self.get_page(&self.endpoints().landing).await?;

        match markup::extract_zone_id(&html, zone_name)? {
            Some(zone_id) => {
                log::debug!("[he] Zone {zone_name} resolved to {zone_id}");
                Ok(zone_id)
            }
            None => {
                log::warn!("[he] Zone {zone_name} is not listed in the account");
                Err(ProviderError::ZoneNotFound {
                    zone: zone_name.to_string(),
                })
            }
        }
    }
}
