//! TXT record creation and deletion
//!
//! Both mutations are form posts to `index.cgi`. The console answers with a
//! full page either way, so the outcome is read back from the markup: the
//! record table for a create, the status block for a delete.

use crate::error::{ProviderError, Result};
use crate::markup;
use crate::session::Session;
use crate::types::{CreateRecordForm, DeleteRecordForm, RecordId, ValidationRecord, ZoneId};

impl Session {
    /// Create `record` in the zone and return the ID the console assigned.
    ///
    /// The ID is taken from the first table row listing the record's name.
    /// If an older record with the same name is still present, that row may
    /// come first (see [`markup::extract_record_id`]).
    ///
    /// A post that went through but whose row cannot be found still fails
    /// with [`ProviderError::RecordNotConfirmed`], leaving the record behind.
    pub async fn create_txt_record(
        &self,
        zone_id: &ZoneId,
        record: &ValidationRecord,
    ) -> Result<RecordId> {
        let record_name = record.record_name();
        log::info!("[he] Creating TXT {record_name} in zone {zone_id}");

        let form = CreateRecordForm::txt(zone_id, record);
        let html = self.post_form(&self.endpoints().index, &form).await?;

        match markup::extract_record_id(&html, record_name)? {
            Some(record_id) => {
                log::info!("[he] Created TXT {record_name} as record {record_id}");
                Ok(record_id)
            }
            None => {
                log::error!("[he] No row for {record_name} in the create response");
                Err(ProviderError::RecordNotConfirmed {
                    record_name: record_name.to_string(),
                })
            }
        }
    }

    /// Delete a record by ID.
    ///
    /// Not idempotent: a record that is already gone fails with
    /// [`ProviderError::DeleteNotConfirmed`] like any other refusal.
    pub async fn delete_record(&self, zone_id: &ZoneId, record_id: &RecordId) -> Result<()> {
        log::info!("[he] Deleting record {record_id} from zone {zone_id}");

        let form = DeleteRecordForm::new(zone_id, record_id);
        let html = self.post_form(&self.endpoints().index, &form).await?;

        if !markup::has_status_marker(&html)? {
            log::warn!("[he] Delete of record {record_id} not confirmed");
            return Err(ProviderError::DeleteNotConfirmed {
                record_id: record_id.to_string(),
            });
        }

        log::info!("[he] Deleted record {record_id}");
        Ok(())
    }

    /// Resolve `zone` and create the validation record for `domain`.
    pub async fn set_validation(
        &self,
        zone: &str,
        domain: &str,
        validation: &str,
    ) -> Result<RecordId> {
        let zone_id = self.resolve_zone_id(zone).await?;
        let record = ValidationRecord::new(domain, validation);
        self.create_txt_record(&zone_id, &record).await
    }

    /// Resolve `zone` and delete the validation record `record_id`.
    pub async fn delete_validation(&self, zone: &str, record_id: &RecordId) -> Result<()> {
        let zone_id = self.resolve_zone_id(zone).await?;
        self.delete_record(&zone_id, record_id).await
    }
}
