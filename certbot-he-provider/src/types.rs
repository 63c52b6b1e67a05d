use std::fmt;

use serde::Serialize;

// ============ Identifiers ============

/// Provider-internal numeric identifier of a zone.
///
/// Only meaningful together with the [`Session`](crate::Session) that resolved it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZoneId(String);

impl ZoneId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Provider-internal numeric identifier of a DNS record.
///
/// This is the only value carried from the auth invocation to the cleanup one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============ Credentials ============

/// Account login for the web console.
#[derive(Clone)]
pub struct Credentials {
    /// Account username (the console calls it `email`).
    pub username: String,
    /// Account password.
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

// ============ Validation record ============

/// Label prepended to the validated domain.
pub const ACME_CHALLENGE_PREFIX: &str = "_acme-challenge.";

/// TTL of every validation record, in seconds.
pub const VALIDATION_TTL: u32 = 300;

/// The TXT record an ACME DNS-01 challenge asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRecord {
    name: String,
    content: String,
    ttl: u32,
}

impl ValidationRecord {
    /// Build the record for `domain` carrying `token`.
    ///
    /// ```
    /// use certbot_he_provider::ValidationRecord;
    ///
    /// let record = ValidationRecord::new("example.com", "abc123");
    /// assert_eq!(record.record_name(), "_acme-challenge.example.com");
    /// assert_eq!(record.ttl(), 300);
    /// ```
    pub fn new(domain: &str, token: impl Into<String>) -> Self {
        Self {
            name: format!("{ACME_CHALLENGE_PREFIX}{domain}"),
            content: token.into(),
            ttl: VALIDATION_TTL,
        }
    }

    /// Full record name, `_acme-challenge.<domain>`.
    pub fn record_name(&self) -> &str {
        &self.name
    }

    /// Validation token stored in the TXT record.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }
}

// ============ Console form bodies ============

/// `menu` value shared by every record mutation.
const MENU_EDIT_ZONE: &str = "edit_zone";

/// Login form posted to the landing page.
#[derive(Debug, Serialize)]
pub(crate) struct LoginForm<'a> {
    pub email: &'a str,
    pub pass: &'a str,
}

impl<'a> LoginForm<'a> {
    pub fn new(credentials: &'a Credentials) -> Self {
        Self {
            email: &credentials.username,
            pass: &credentials.password,
        }
    }
}

/// "Add record" form. An empty `hosted_dns_recordid` asks for a new record.
#[derive(Debug, Serialize)]
pub(crate) struct CreateRecordForm<'a> {
    pub account: &'a str,
    pub menu: &'a str,
    #[serde(rename = "Type")]
    pub record_type: &'a str,
    pub hosted_dns_zoneid: &'a str,
    pub hosted_dns_recordid: &'a str,
    pub hosted_dns_editzone: &'a str,
    #[serde(rename = "Priority")]
    pub priority: &'a str,
    #[serde(rename = "Name")]
    pub name: &'a str,
    #[serde(rename = "Content")]
    pub content: &'a str,
    #[serde(rename = "TTL")]
    pub ttl: u32,
    pub hosted_dns_editrecord: &'a str,
}

impl<'a> CreateRecordForm<'a> {
    pub fn txt(zone_id: &'a ZoneId, record: &'a ValidationRecord) -> Self {
        Self {
            account: "",
            menu: MENU_EDIT_ZONE,
            record_type: "TXT",
            hosted_dns_zoneid: zone_id.as_str(),
            hosted_dns_recordid: "",
            hosted_dns_editzone: "1",
            priority: "",
            name: record.record_name(),
            content: record.content(),
            ttl: record.ttl(),
            hosted_dns_editrecord: "Submit",
        }
    }
}

/// "Delete record" form with the confirmation fields pre-set.
#[derive(Debug, Serialize)]
pub(crate) struct DeleteRecordForm<'a> {
    pub menu: &'a str,
    pub hosted_dns_zoneid: &'a str,
    pub hosted_dns_recordid: &'a str,
    pub hosted_dns_editzone: &'a str,
    pub hosted_dns_delrecord: &'a str,
    pub hosted_dns_delconfirm: &'a str,
}

impl<'a> DeleteRecordForm<'a> {
    pub fn new(zone_id: &'a ZoneId, record_id: &'a RecordId) -> Self {
        Self {
            menu: MENU_EDIT_ZONE,
            hosted_dns_zoneid: zone_id.as_str(),
            hosted_dns_recordid: record_id.as_str(),
            hosted_dns_editzone: "1",
            hosted_dns_delrecord: "1",
            hosted_dns_delconfirm: "delete",
        }
    }
}
