//! 共享测试工具：console 页面模板和 wiremock 挂载

#![allow(dead_code)]

use certbot_he_provider::{HeClient, Url};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ZONE: &str = "example.com";
pub const ZONE_ID: &str = "12345";
pub const RECORD_ID: &str = "98765";
pub const RECORD_NAME: &str = "_acme-challenge.example.com";
pub const SESSION_COOKIE: &str = "CGISESSID=0123456789abcdef";

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

// ============ 页面模板 ============

/// Zone list page with one delete button per `(zone, zone_id)`.
pub fn zone_list_page(zones: &[(&str, &str)]) -> String {
    let rows: String = zones
        .iter()
        .map(|(zone, id)| {
            format!(
                r#"<tr><td><img src="/include/images/delete.png" alt="delete" title="delete" name="{zone}" value="{id}" onclick="delete_dom(this);"></td><td><span>{zone}</span></td></tr>"#
            )
        })
        .collect();
    format!(
        r#"<html><body><div id="dns_main"><table id="domains_table">{rows}</table></div></body></html>"#
    )
}

/// Zone editor page listing `(record_id, name)` rows, optionally with a status block.
pub fn record_table_page(rows: &[(&str, &str)], status: Option<&str>) -> String {
    let status = status
        .map(|s| format!(r#"<div id="dns_status">{s}</div>"#))
        .unwrap_or_default();
    let rows: String = rows
        .iter()
        .map(|(id, name)| {
            format!(
                r#"<tr class="dns_tr" id="{id}" title="{name}"><td class="hidden">{id}</td><td width="95%" class="dns_view">{name}</td><td><span class="rrlabel TXT">TXT</span></td><td>300</td></tr>"#
            )
        })
        .collect();
    format!(
        r#"<html><body>{status}<table class="generictable">{rows}</table></body></html>"#
    )
}

pub fn login_error_page() -> String {
    r#"<html><body><div id="dns_err">Incorrect username or password.</div></body></html>"#
        .to_string()
}

// ============ Mock 挂载 ============

/// GET `/` serves the zone list and sets the session cookie.
pub async fn mount_landing(server: &MockServer, zones: &[(&str, &str)]) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", format!("{SESSION_COOKIE}; path=/").as_str())
                .set_body_string(zone_list_page(zones)),
        )
        .mount(server)
        .await;
}

/// POST `/` with the session cookie and the given credentials.
pub async fn mount_login(server: &MockServer, username: &str, password: &str, body: String) {
    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("cookie", SESSION_COOKIE))
        .and(body_string_contains(format!("email={username}&pass={password}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// POST `/index.cgi` with the create form.
pub async fn mount_create(server: &MockServer, body: String) {
    Mock::given(method("POST"))
        .and(path("/index.cgi"))
        .and(body_string_contains("hosted_dns_editrecord=Submit"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// POST `/index.cgi` with the delete form for `record_id`.
pub async fn mount_delete(server: &MockServer, record_id: &str, body: String) {
    Mock::given(method("POST"))
        .and(path("/index.cgi"))
        .and(body_string_contains("hosted_dns_delconfirm=delete"))
        .and(body_string_contains(
            format!("hosted_dns_recordid={record_id}&").as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Client pointed at the mock server.
pub fn client_for(server: &MockServer) -> HeClient {
    let base_url = match Url::parse(&server.uri()) {
        Ok(url) => url,
        Err(e) => panic!("mock server uri should parse: {e}"),
    };
    match HeClient::with_base_url(base_url) {
        Ok(client) => client,
        Err(e) => panic!("client should build: {e}"),
    }
}
