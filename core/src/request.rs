//! Resource-to-request mapping.
//!
//! # Design
//! Every API resource is a pure function from its arguments to a
//! `RequestSpec` (verb, path, parameters). Nothing here touches the
//! network, so the whole resource table can be checked without a client.
//! Identifiers are interpolated into the path verbatim.

use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::http::HttpMethod;

/// Request parameters: query string entries for reads, JSON body for writes.
pub type Params = serde_json::Map<String, Value>;

/// A resource call before it is turned into an HTTP request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub path: String,
    pub method: HttpMethod,
    pub params: Params,
}

/// Serialize any value into `Params`. The value must serialize to a JSON
/// object.
pub fn into_params<T: Serialize + ?Sized>(value: &T) -> Result<Params, ApiError> {
    match serde_json::to_value(value).map_err(|e| ApiError::Serialization(e.to_string()))? {
        Value::Object(map) => Ok(map),
        other => Err(ApiError::Serialization(format!(
            "request parameters must be a JSON object, got {other}"
        ))),
    }
}

impl RequestSpec {
    pub fn new(method: HttpMethod, path: impl Into<String>, params: Params) -> Self {
        Self {
            path: path.into(),
            method,
            params,
        }
    }

    /// GET without parameters.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path, Params::new())
    }

    /// GET with parameters encoded into the query string.
    pub fn query(path: impl Into<String>, params: Params) -> Self {
        Self::new(HttpMethod::Get, path, params)
    }

    /// POST with parameters sent as a JSON body.
    pub fn post(path: impl Into<String>, params: Params) -> Self {
        Self::new(HttpMethod::Post, path, params)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path, Params::new())
    }

    // --- accounts ---

    pub fn get_account() -> Self {
        Self::get("accounts")
    }

    pub fn get_billing_info() -> Self {
        Self::get("accounts/billing")
    }

    // --- campaigns ---

    pub fn get_campaigns(params: Params) -> Self {
        Self::query("campaigns", params)
    }

    pub fn get_campaign(campaign_id: impl Display) -> Self {
        Self::get(format!("campaigns/{campaign_id}"))
    }

    pub fn create_campaign(params: Params) -> Self {
        Self::post("campaigns", params)
    }

    // --- newsletters ---

    pub fn get_rss_newsletters(params: Params) -> Self {
        Self::query("rss-newsletters", params)
    }

    pub fn send_newsletter(params: Params) -> Self {
        Self::post("newsletters", params)
    }

    pub fn send_draft_newsletter(params: Params) -> Self {
        Self::post("newsletters/send-draft", params)
    }

    // --- contacts ---

    pub fn add_contact(params: Params) -> Self {
        Self::post("contacts", params)
    }

    pub fn get_contact(contact_id: impl Display) -> Self {
        Self::get(format!("contacts/{contact_id}"))
    }

    pub fn get_contacts(params: Params) -> Self {
        Self::query("contacts", params)
    }

    /// Update any field of a contact except its email.
    pub fn update_contact(contact_id: impl Display, params: Params) -> Self {
        Self::post(format!("contacts/{contact_id}"), params)
    }

    pub fn delete_contact(contact_id: impl Display) -> Self {
        Self::delete(format!("contacts/{contact_id}"))
    }

    pub fn get_contact_activities(contact_id: impl Display) -> Self {
        Self::get(format!("contacts/{contact_id}/activities"))
    }

    // --- saved contact searches ---

    pub fn search_contacts(params: Params) -> Self {
        Self::query("search-contacts", params)
    }

    pub fn get_contacts_search(search_id: impl Display) -> Self {
        Self::get(format!("search-contacts/{search_id}"))
    }

    // The trailing slash is what the API has always been called with.
    pub fn add_contacts_search(params: Params) -> Self {
        Self::post("search-contacts/", params)
    }

    pub fn delete_contacts_search(search_id: impl Display) -> Self {
        Self::delete(format!("search-contacts/{search_id}"))
    }

    // --- custom fields ---

    pub fn get_custom_fields(params: Params) -> Self {
        Self::query("custom-fields", params)
    }

    pub fn create_custom_field(params: Params) -> Self {
        Self::post("custom-fields", params)
    }

    pub fn get_custom_field(custom_field_id: impl Display) -> Self {
        Self::get(format!("custom-fields/{custom_field_id}"))
    }

    // --- forms ---

    pub fn get_web_form(web_form_id: impl Display) -> Self {
        Self::get(format!("webforms/{web_form_id}"))
    }

    pub fn get_web_forms(params: Params) -> Self {
        Self::query("webforms", params)
    }

    pub fn get_form(form_id: impl Display) -> Self {
        Self::get(format!("forms/{form_id}"))
    }

    pub fn get_forms(params: Params) -> Self {
        Self::query("forms", params)
    }
}
