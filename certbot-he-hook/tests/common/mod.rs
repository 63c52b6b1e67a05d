//! 共享测试工具：模拟 dns.he.net 并构造 hook 环境

#![allow(dead_code)]

use std::collections::HashMap;

use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ZONE: &str = "example.com";
pub const ZONE_ID: &str = "12345";
pub const RECORD_ID: &str = "98765";
pub const RECORD_NAME: &str = "_acme-challenge.example.com";
pub const VALIDATION: &str = "abc123";
const SESSION_COOKIE: &str = "CGISESSID=feedface";

/// Environment of an auth-phase run against `base_url`.
pub fn auth_env(base_url: &str) -> HashMap<String, String> {
    [
        ("HE_USERNAME", "admin"),
        ("HE_PASSWORD", "secret"),
        ("HE_ZONE", ZONE),
        ("CERTBOT_DOMAIN", ZONE),
        ("CERTBOT_VALIDATION", VALIDATION),
        ("HE_PROPAGATION_SECONDS", "0"),
        ("HE_BASE_URL", base_url),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Environment of a cleanup-phase run for `record_id`.
pub fn cleanup_env(base_url: &str, record_id: &str) -> HashMap<String, String> {
    let mut env = auth_env(base_url);
    env.insert("CERTBOT_AUTH_OUTPUT".to_string(), record_id.to_string());
    env
}

fn zone_list_page() -> String {
    format!(
        r#"<html><body><table id="domains_table"><tr><td><img alt="delete" name="{ZONE}" value="{ZONE_ID}" src="/include/images/delete.png"></td><td>{ZONE}</td></tr></table></body></html>"#
    )
}

fn record_page(record_id: &str, status: bool) -> String {
    let status = if status {
        r#"<div id="dns_status">Successfully updated zone.</div>"#
    } else {
        ""
    };
    format!(
        r#"<html><body>{status}<table><tr class="dns_tr" id="{record_id}"><td class="hidden">{record_id}</td><td class="dns_view">{RECORD_NAME}</td></tr></table></body></html>"#
    )
}

/// The provider as a working account: login accepted, zone listed.
pub async fn mock_account(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", format!("{SESSION_COOKIE}; path=/").as_str())
                .set_body_string(zone_list_page()),
        )
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("cookie", SESSION_COOKIE))
        .and(body_string_contains("email=admin&pass=secret"))
        .respond_with(ResponseTemplate::new(200).set_body_string(zone_list_page()))
        .mount(server)
        .await;
}

/// Login always answered with the error block; the landing page must be hit `landing_hits` times.
pub async fn mock_rejected_login(server: &MockServer, landing_hits: u64) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .expect(landing_hits)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body><div id="dns_err">Incorrect</div></body></html>"#,
        ))
        .mount(server)
        .await;
}

/// Create form answered with a table listing `record_id` (or no table at all).
pub async fn mock_create(server: &MockServer, record_id: Option<&str>) {
    let body = record_id.map_or_else(
        || "<html><body><table></table></body></html>".to_string(),
        |id| record_page(id, true),
    );
    Mock::given(method("POST"))
        .and(path("/index.cgi"))
        .and(body_string_contains("hosted_dns_editrecord=Submit"))
        .and(body_string_contains(format!("Name={RECORD_NAME}").as_str()))
        .and(body_string_contains(format!("Content={VALIDATION}").as_str()))
        .and(body_string_contains("TTL=300"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Delete form for `record_id`, answered with or without the status block.
pub async fn mock_delete(server: &MockServer, record_id: &str, confirmed: bool) {
    Mock::given(method("POST"))
        .and(path("/index.cgi"))
        .and(body_string_contains("hosted_dns_delconfirm=delete"))
        .and(body_string_contains(format!("hosted_dns_zoneid={ZONE_ID}&").as_str()))
        .and(body_string_contains(
            format!("hosted_dns_recordid={record_id}&").as_str(),
        ))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(record_page("55555", confirmed)),
        )
        .mount(server)
        .await;
}
