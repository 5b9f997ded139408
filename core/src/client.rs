//! GetResponse API client: request assembly, dispatch, and resource methods.
//!
//! # Design
//! `GetResponseClient` holds an immutable `ClientConfig` and a `Transport`.
//! Every resource method maps its arguments to a `RequestSpec` and hands it
//! to `dispatch`, which builds the `HttpRequest` (`build_request`), executes
//! it exactly once, and decodes the body. There is no retry, no pagination
//! and no state carried between calls.

use std::fmt::Display;

use crate::config::{ClientConfig, ClientOptions};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, Transport};
use crate::query::build_query;
use crate::request::{Params, RequestSpec};
use crate::response::ApiResponse;
use crate::transport::UreqTransport;

/// Synchronous client for the GetResponse v3 API.
#[derive(Debug, Clone)]
pub struct GetResponseClient<T = UreqTransport> {
    config: ClientConfig,
    transport: T,
}

impl GetResponseClient<UreqTransport> {
    /// Create a client over the default HTTP transport. Fails if `api_key`
    /// is empty. No network activity happens here.
    pub fn new(api_key: impl Into<String>, options: ClientOptions) -> Result<Self, ApiError> {
        Ok(Self::from_config(ClientConfig::new(api_key, options)?))
    }

    pub fn from_config(config: ClientConfig) -> Self {
        Self::with_transport(config, UreqTransport::new())
    }
}

impl<T: Transport> GetResponseClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Assemble the HTTP request for `spec` without sending it.
    ///
    /// GET parameters go into the query string, POST parameters into a JSON
    /// body, DELETE sends neither.
    pub fn build_request(&self, spec: &RequestSpec) -> Result<HttpRequest, ApiError> {
        if spec.path.is_empty() {
            return Err(ApiError::InvalidApiMethod);
        }

        let url = format!("{}/{}", self.config.endpoint(), spec.path);
        let (url, body) = match spec.method {
            HttpMethod::Get if !spec.params.is_empty() => {
                (format!("{url}?{}", build_query(&spec.params)), None)
            }
            HttpMethod::Get | HttpMethod::Delete => (url, None),
            HttpMethod::Post => {
                let body = serde_json::to_string(&spec.params)
                    .map_err(|e| ApiError::Serialization(e.to_string()))?;
                (url, Some(body))
            }
        };

        Ok(HttpRequest {
            method: spec.method,
            url,
            headers: self.headers(),
            body,
            timeout: self.config.timeout(),
        })
    }

    fn headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![
            (
                "X-Auth-Token".to_string(),
                format!("api-key {}", self.config.api_key()),
            ),
            ("Content-Type".to_string(), "application/json".to_string()),
        ];
        if let Some(domain) = self.config.domain() {
            headers.push(("X-Domain".to_string(), domain.to_string()));
        }
        if let Some(app_id) = self.config.app_id() {
            headers.push(("X-APP-ID".to_string(), app_id.to_string()));
        }
        headers
    }

    /// Send `spec` and decode the response.
    ///
    /// An empty path yields `ApiResponse::invalid_api_method()` without any
    /// network call. Non-2xx responses are returned as `Ok` with their status;
    /// only transport failures are `Err`.
    pub fn dispatch(&self, spec: &RequestSpec) -> Result<ApiResponse, ApiError> {
        let request = match self.build_request(spec) {
            Ok(request) => request,
            Err(ApiError::InvalidApiMethod) => {
                tracing::debug!("empty resource path, returning synthetic error result");
                return Ok(ApiResponse::invalid_api_method());
            }
            Err(e) => return Err(e),
        };

        tracing::debug!(
            method = request.method.as_str(),
            url = %request.url,
            "dispatching request"
        );
        let response = self.transport.execute(&request).inspect_err(|e| {
            tracing::warn!(
                method = request.method.as_str(),
                url = %request.url,
                error = %e,
                "request failed"
            );
        })?;
        tracing::debug!(status = response.status, url = %request.url, "received response");

        Ok(ApiResponse::from_http(&response))
    }

    // --- accounts ---

    pub fn get_account(&self) -> Result<ApiResponse, ApiError> {
        self.dispatch(&RequestSpec::get_account())
    }

    pub fn get_billing_info(&self) -> Result<ApiResponse, ApiError> {
        self.dispatch(&RequestSpec::get_billing_info())
    }

    // --- campaigns ---

    pub fn get_campaigns(&self, params: Params) -> Result<ApiResponse, ApiError> {
        self.dispatch(&RequestSpec::get_campaigns(params))
    }

    pub fn get_campaign(&self, campaign_id: impl Display) -> Result<ApiResponse, ApiError> {
        self.dispatch(&RequestSpec::get_campaign(campaign_id))
    }

    pub fn create_campaign(&self, params: Params) -> Result<ApiResponse, ApiError> {
        self.dispatch(&RequestSpec::create_campaign(params))
    }

    // --- newsletters ---

    pub fn get_rss_newsletters(&self, params: Params) -> Result<ApiResponse, ApiError> {
        self.dispatch(&RequestSpec::get_rss_newsletters(params))
    }

    pub fn send_newsletter(&self, params: Params) -> Result<ApiResponse, ApiError> {
        self.dispatch(&RequestSpec::send_newsletter(params))
    }

    pub fn send_draft_newsletter(&self, params: Params) -> Result<ApiResponse, ApiError> {
        self.dispatch(&RequestSpec::send_draft_newsletter(params))
    }

    // --- contacts ---

    pub fn add_contact(&self, params: Params) -> Result<ApiResponse, ApiError> {
        self.dispatch(&RequestSpec::add_contact(params))
    }

    pub fn get_contact(&self, contact_id: impl Display) -> Result<ApiResponse, ApiError> {
        self.dispatch(&RequestSpec::get_contact(contact_id))
    }

    pub fn get_contacts(&self, params: Params) -> Result<ApiResponse, ApiError> {
        self.dispatch(&RequestSpec::get_contacts(params))
    }

    pub fn update_contact(
        &self,
        contact_id: impl Display,
        params: Params,
    ) -> Result<ApiResponse, ApiError> {
        self.dispatch(&RequestSpec::update_contact(contact_id, params))
    }

    pub fn delete_contact(&self, contact_id: impl Display) -> Result<ApiResponse, ApiError> {
        self.dispatch(&RequestSpec::delete_contact(contact_id))
    }

    pub fn get_contact_activities(
        &self,
        contact_id: impl Display,
    ) -> Result<ApiResponse, ApiError> {
        self.dispatch(&RequestSpec::get_contact_activities(contact_id))
    }

    // --- saved contact searches ---

    pub fn search_contacts(&self, params: Params) -> Result<ApiResponse, ApiError> {
        self.dispatch(&RequestSpec::search_contacts(params))
    }

    pub fn get_contacts_search(&self, search_id: impl Display) -> Result<ApiResponse, ApiError> {
        self.dispatch(&RequestSpec::get_contacts_search(search_id))
    }

    pub fn add_contacts_search(&self, params: Params) -> Result<ApiResponse, ApiError> {
        self.dispatch(&RequestSpec::add_contacts_search(params))
    }

    pub fn delete_contacts_search(&self, search_id: impl Display) -> Result<ApiResponse, ApiError> {
        self.dispatch(&RequestSpec::delete_contacts_search(search_id))
    }

    // --- custom fields ---

    pub fn get_custom_fields(&self, params: Params) -> Result<ApiResponse, ApiError> {
        self.dispatch(&RequestSpec::get_custom_fields(params))
    }

    pub fn create_custom_field(&self, params: Params) -> Result<ApiResponse, ApiError> {
        self.dispatch(&RequestSpec::create_custom_field(params))
    }

    pub fn get_custom_field(&self, custom_field_id: impl Display) -> Result<ApiResponse, ApiError> {
        self.dispatch(&RequestSpec::get_custom_field(custom_field_id))
    }

    // --- forms ---

    pub fn get_web_form(&self, web_form_id: impl Display) -> Result<ApiResponse, ApiError> {
        self.dispatch(&RequestSpec::get_web_form(web_form_id))
    }

    pub fn get_web_forms(&self, params: Params) -> Result<ApiResponse, ApiError> {
        self.dispatch(&RequestSpec::get_web_forms(params))
    }

    pub fn get_form(&self, form_id: impl Display) -> Result<ApiResponse, ApiError> {
        self.dispatch(&RequestSpec::get_form(form_id))
    }

    pub fn get_forms(&self, params: Params) -> Result<ApiResponse, ApiError> {
        self.dispatch(&RequestSpec::get_forms(params))
    }
}
