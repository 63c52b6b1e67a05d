//! HTML scraping for the dns.he.net console
//!
//! Every assumption about the console's markup lives in this module. The
//! console has no documented contract; these selectors are what the pages
//! happen to render today. When the provider changes its layout, this is the
//! only file that should need touching.
//!
//! | Page | Marker |
//! |------|--------|
//! | login response | `<div id="dns_err">` on rejected credentials |
//! | zone list | `<img name="{zone}" alt="delete" value="{zone id}">` |
//! | record table | `<tr class="dns_tr" id="{record id}">` rows with `<td class="dns_view">` cells |
//! | delete response | `<div id="dns_status">` on success |

use scraper::{ElementRef, Html, Selector};

use crate::error::{ProviderError, Result};
use crate::types::{RecordId, ZoneId};

const LOGIN_ERROR: &str = "div#dns_err";
const STATUS: &str = "div#dns_status";
const ZONE_DELETE_BUTTON: &str = r#"img[alt="delete"]"#;
const RECORD_ROW: &str = "tr.dns_tr";
const RECORD_VIEW_CELL: &str = "td.dns_view";

fn selector(css: &'static str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ProviderError::ParseError {
        detail: format!("invalid selector `{css}`: {e:?}"),
    })
}

fn contains(html: &str, css: &'static str) -> Result<bool> {
    let selector = selector(css)?;
    Ok(Html::parse_document(html).select(&selector).next().is_some())
}

/// Whether the login response carries the error block.
pub fn has_login_error(html: &str) -> Result<bool> {
    contains(html, LOGIN_ERROR)
}

/// Whether a mutation response carries the status block.
pub fn has_status_marker(html: &str) -> Result<bool> {
    contains(html, STATUS)
}

/// Find the numeric ID of `zone_name` on the zone list page.
///
/// The "delete zone" button is named after the zone and carries its ID in
/// `value`. A button without `value` is skipped.
pub fn extract_zone_id(html: &str, zone_name: &str) -> Result<Option<ZoneId>> {
    let selector = selector(ZONE_DELETE_BUTTON)?;
    let document = Html::parse_document(html);

    let zone_id = document
        .select(&selector)
        .filter(|img| img.value().attr("name") == Some(zone_name))
        .find_map(|img| img.value().attr("value"))
        .map(ZoneId::new);

    Ok(zone_id)
}

/// IDs of every record row that has a view cell reading exactly `record_name`, in document order.
pub fn find_record_ids(html: &str, record_name: &str) -> Result<Vec<RecordId>> {
    let row_selector = selector(RECORD_ROW)?;
    let cell_selector = selector(RECORD_VIEW_CELL)?;
    let document = Html::parse_document(html);

    let ids = document
        .select(&row_selector)
        .filter(|row| {
            row.select(&cell_selector)
                .any(|cell| cell_text(cell) == record_name)
        })
        .filter_map(|row| row.value().attr("id"))
        .map(RecordId::new)
        .collect();

    Ok(ids)
}

/// ID of the first record row named `record_name`.
///
/// Several rows can share a name when an earlier cleanup never ran. The first
/// one in document order wins, which may not be the record just created, so
/// the duplicates are reported in the log.
pub fn extract_record_id(html: &str, record_name: &str) -> Result<Option<RecordId>> {
    let mut ids = find_record_ids(html, record_name)?.into_iter();
    let first = ids.next();

    let others: Vec<String> = ids.map(|id| id.to_string()).collect();
    if let Some(first) = &first
        && !others.is_empty()
    {
        log::warn!(
            "[he] {} records named '{record_name}' found; using {first}, ignoring {}",
            others.len() + 1,
            others.join(", ")
        );
    }

    Ok(first)
}

/// Concatenated text of all descendant text nodes.
fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect()
}
