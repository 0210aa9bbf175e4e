//! Token-gated client for vendor API operations
//!
//! Every operation follows the same shape: resolve the current access token
//! through the injected provider, build the target URL as
//! `api_prefix + path + "?access_token=" + token`, attach scalar query
//! parameters or a JSON body, and hand the request to the injected
//! transport. The vendor's JSON response is returned unmodified; failures
//! from token resolution or the transport propagate unchanged.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info, instrument};
use wecom_domain::{Result, WecomConfig, WecomError};

use crate::auth::AccessTokenProvider;
use crate::oauth;
use crate::transport::{ApiRequest, HttpTransport, ReqwestTransport};

/// Client for the vendor member-management and OAuth endpoints
///
/// Holds the injected configuration, token provider, and transport. The
/// client keeps no mutable state of its own; operations may be issued
/// concurrently without coordination.
pub struct WecomClient {
    config: WecomConfig,
    token_provider: Arc<dyn AccessTokenProvider>,
    transport: Arc<dyn HttpTransport>,
}

impl WecomClient {
    /// Create a client with the default HTTP transport
    ///
    /// # Arguments
    ///
    /// * `config` - Tenant identity and API prefix
    /// * `token_provider` - Host-owned token accessor
    ///
    /// # Errors
    ///
    /// Returns an error if the default transport cannot be constructed
    pub fn new(config: WecomConfig, token_provider: Arc<dyn AccessTokenProvider>) -> Result<Self> {
        let transport = ReqwestTransport::new()?;

        Ok(Self::with_transport(config, token_provider, Arc::new(transport)))
    }

    /// Create a client with an injected transport
    pub fn with_transport(
        config: WecomConfig,
        token_provider: Arc<dyn AccessTokenProvider>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self { config, token_provider, transport }
    }

    /// Access the injected configuration
    pub fn config(&self) -> &WecomConfig {
        &self.config
    }

    /// Fetch the list of source IPs the vendor delivers callbacks from
    ///
    /// # Errors
    ///
    /// Propagates token resolution and transport failures unchanged
    pub async fn get_callback_ip_list(&self) -> Result<Value> {
        self.get("getcallbackip", Vec::new()).await
    }

    /// Create a member record
    ///
    /// The record is forwarded verbatim; field constraints are the vendor's,
    /// not the client's.
    ///
    /// # Errors
    ///
    /// Propagates token resolution and transport failures unchanged
    pub async fn create_user<T: Serialize>(&self, user: &T) -> Result<Value> {
        self.post("user/create", user).await
    }

    /// Update a member record
    ///
    /// # Errors
    ///
    /// Propagates token resolution and transport failures unchanged
    pub async fn update_user<T: Serialize>(&self, user: &T) -> Result<Value> {
        self.post("user/update", user).await
    }

    /// Delete a single member by id
    ///
    /// The vendor exposes single and batch deletion as separate endpoints;
    /// both are available here under distinct names (see
    /// [`batch_delete_users`](Self::batch_delete_users)).
    ///
    /// # Errors
    ///
    /// Propagates token resolution and transport failures unchanged
    pub async fn delete_user(&self, userid: &str) -> Result<Value> {
        self.get("user/delete", vec![("userid".to_string(), userid.to_string())]).await
    }

    /// Delete a batch of members by id
    ///
    /// # Errors
    ///
    /// Propagates token resolution and transport failures unchanged
    pub async fn batch_delete_users(&self, userids: &[String]) -> Result<Value> {
        self.post("user/batchdelete", &json!({ "useridlist": userids })).await
    }

    /// Fetch a member record by id
    ///
    /// # Errors
    ///
    /// Propagates token resolution and transport failures unchanged
    pub async fn get_user(&self, userid: &str) -> Result<Value> {
        self.get("user/get", vec![("userid".to_string(), userid.to_string())]).await
    }

    /// List members of a department (summary fields)
    ///
    /// # Arguments
    ///
    /// * `department_id` - Department to list
    /// * `fetch_child` - Walk child departments recursively
    /// * `status` - Activation status filter; `0` means all
    ///
    /// # Errors
    ///
    /// Propagates token resolution and transport failures unchanged
    pub async fn get_department_users(
        &self,
        department_id: i64,
        fetch_child: bool,
        status: i64,
    ) -> Result<Value> {
        self.get("user/simplelist", department_query(department_id, fetch_child, status)).await
    }

    /// List members of a department (full records)
    ///
    /// Same parameters as [`get_department_users`](Self::get_department_users).
    ///
    /// # Errors
    ///
    /// Propagates token resolution and transport failures unchanged
    pub async fn get_department_users_detailed(
        &self,
        department_id: i64,
        fetch_child: bool,
        status: i64,
    ) -> Result<Value> {
        self.get("user/list", department_query(department_id, fetch_child, status)).await
    }

    /// Invite users, departments, or tags to register
    ///
    /// The invitation record (`user`/`party`/`tag` id lists) is forwarded
    /// verbatim.
    ///
    /// # Errors
    ///
    /// Propagates token resolution and transport failures unchanged
    pub async fn invite<T: Serialize>(&self, invitation: &T) -> Result<Value> {
        self.post("batch/invite", invitation).await
    }

    /// Resolve a member id from an OAuth authorization code
    ///
    /// Sends the configured agent id alongside the code, as the vendor
    /// requires for this lookup.
    ///
    /// # Errors
    ///
    /// Propagates token resolution and transport failures unchanged
    pub async fn get_user_id_by_code(&self, code: &str) -> Result<Value> {
        self.get(
            "user/getuserinfo",
            vec![
                ("code".to_string(), code.to_string()),
                ("agentid".to_string(), self.config.agent_id.clone()),
            ],
        )
        .await
    }

    /// Build the OAuth authorization redirect URL for this tenant
    ///
    /// Pure formatting: no token resolution and no network call. `scope`
    /// defaults to `snsapi_base` when `None`.
    #[must_use]
    pub fn authorize_url(&self, redirect_uri: &str, state: &str, scope: Option<&str>) -> String {
        oauth::authorize_url(&self.config.corp_id, redirect_uri, state, scope)
    }

    /// Build the token-gated URL for an operation path
    ///
    /// Token resolution happens here, before any request is constructed; a
    /// provider failure therefore never reaches the transport.
    async fn gated_url(&self, path: &str) -> Result<String> {
        let token = self.token_provider.access_token().await?;

        Ok(format!("{}{}?access_token={}", self.config.api_prefix, path, token.access_token))
    }

    /// Execute a GET operation
    #[instrument(skip(self, query), fields(path = %path))]
    async fn get(&self, path: &str, query: Vec<(String, String)>) -> Result<Value> {
        let url = self.gated_url(path).await?;

        debug!(url = %url, "GET request");

        let mut request = ApiRequest::get(url);
        request.query = query;

        let response = self.transport.execute(request).await?;

        info!(path = %path, "GET request successful");
        Ok(response)
    }

    /// Execute a POST operation with a JSON body
    #[instrument(skip(self, body), fields(path = %path))]
    async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Value> {
        let url = self.gated_url(path).await?;

        debug!(url = %url, "POST request");

        let body = serde_json::to_value(body)
            .map_err(|e| WecomError::Internal(format!("Failed to serialize body: {}", e)))?;

        let response = self.transport.execute(ApiRequest::post_json(url, body)).await?;

        info!(path = %path, "POST request successful");
        Ok(response)
    }
}

fn department_query(department_id: i64, fetch_child: bool, status: i64) -> Vec<(String, String)> {
    vec![
        ("department_id".to_string(), department_id.to_string()),
        ("fetch_child".to_string(), if fetch_child { "1" } else { "0" }.to_string()),
        ("status".to_string(), status.to_string()),
    ]
}
