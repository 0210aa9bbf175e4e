//! OAuth authorization URL construction
//!
//! Builds the browser redirect URL for the vendor's OAuth page. Pure string
//! formatting: no token resolution and no network call. The code returned to
//! the redirect target is resolved through
//! [`WecomClient::get_user_id_by_code`](crate::client::WecomClient::get_user_id_by_code).

/// Authorization endpoint of the vendor OAuth page.
const AUTHORIZE_ENDPOINT: &str = "https://open.weixin.qq.com/connect/oauth2/authorize";

/// Scope applied when the caller does not request one. Resolves the member
/// identity silently, without a consent screen.
const DEFAULT_SCOPE: &str = "snsapi_base";

/// Build the OAuth authorization redirect URL
///
/// Parameter order and the trailing `#wechat_redirect` fragment are
/// mandated by the vendor. All values are percent-encoded.
///
/// # Arguments
/// * `corp_id` - Tenant identifier, sent as `appid`
/// * `redirect_uri` - URL the browser returns to with the authorization code
/// * `state` - Opaque value echoed back on the redirect (CSRF protection)
/// * `scope` - Requested scope; `None` falls back to `snsapi_base`
#[must_use]
pub fn authorize_url(corp_id: &str, redirect_uri: &str, state: &str, scope: Option<&str>) -> String {
    let params = vec![
        ("appid".to_string(), corp_id.to_string()),
        ("redirect_uri".to_string(), redirect_uri.to_string()),
        ("response_type".to_string(), "code".to_string()),
        ("scope".to_string(), scope.unwrap_or(DEFAULT_SCOPE).to_string()),
        ("state".to_string(), state.to_string()),
    ];

    let query_string = params
        .iter()
        .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}#wechat_redirect", AUTHORIZE_ENDPOINT, query_string)
}
