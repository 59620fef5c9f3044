//! HTTP API Client
//!
//! Functions for communicating with the WaBulk REST API. Every call decodes
//! into the typed contracts from [`crate::api::types`] and fails with a
//! typed [`ApiError`] instead of letting loose JSON propagate.

use gloo_net::http::Request;

use crate::api::types::{
    ApiErrorBody, CreateListRequest, List, PlaceStatus, PlacesPage, StatusFilter,
    UpdateStatusRequest, UpdateTemplateRequest,
};
use crate::storage::{KeyValueStore, LocalStore, API_BASE_KEY};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "https://wabulk.pythonanywhere.com/api";

/// Errors surfaced by API calls
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// Request body could not be serialized
    #[error("Request build error: {0}")]
    Request(String),

    /// Request never reached the server or the connection dropped
    #[error("Network error: {0}")]
    Network(String),

    /// Response body did not match the expected contract
    #[error("Parse error: {0}")]
    Parse(String),

    /// Server answered non-2xx
    #[error("{message}")]
    Server {
        message: String,
        code: Option<String>,
    },
}

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = LocalStore
        .get(API_BASE_KEY)
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Decode the error body of a non-2xx response
async fn response_error(response: gloo_net::http::Response) -> ApiError {
    let body: ApiErrorBody = response.json().await.unwrap_or(ApiErrorBody {
        error: "Unknown error".to_string(),
        code: None,
    });
    ApiError::Server {
        message: body.error,
        code: body.code,
    }
}

/// Build the paginated places URL for a (list, status, search) query
///
/// `status` is omitted when the filter is `All`; `search` is omitted when
/// blank.
fn places_url(
    api_base: &str,
    list_id: u64,
    page: u32,
    per_page: u32,
    filter: StatusFilter,
    search: &str,
) -> String {
    let mut url = format!(
        "{}/lists/{}/places?page={}&per_page={}",
        api_base, list_id, page, per_page
    );

    if let Some(status) = filter.query_value() {
        url.push_str(&format!("&status={}", status));
    }
    if !search.is_empty() {
        url.push_str(&format!("&search={}", urlencoding::encode(search)));
    }

    url
}

// ============ API Functions ============

/// Fetch all lists
pub async fn fetch_lists() -> Result<Vec<List>, ApiError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/lists", api_base))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Create a new list with its uploaded places
pub async fn create_list(request: &CreateListRequest) -> Result<List, ApiError> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/lists", api_base))
        .json(request)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Fetch one page of places for a list
pub async fn fetch_places_page(
    list_id: u64,
    page: u32,
    per_page: u32,
    filter: StatusFilter,
    search: &str,
) -> Result<PlacesPage, ApiError> {
    let api_base = get_api_base();
    let url = places_url(&api_base, list_id, page, per_page, filter, search);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Update a list's message template, returning the updated list
pub async fn update_message_template(
    list_id: u64,
    message_template: &str,
) -> Result<List, ApiError> {
    let api_base = get_api_base();

    let response = Request::put(&format!("{}/lists/{}/message-template", api_base, list_id))
        .json(&UpdateTemplateRequest {
            message_template: message_template.to_string(),
        })
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Persist a place's status change
pub async fn update_place_status(place_id: u64, status: PlaceStatus) -> Result<(), ApiError> {
    let api_base = get_api_base();

    let response = Request::put(&format!("{}/places/{}/status", api_base, place_id))
        .json(&UpdateStatusRequest { status })
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_places_url_omits_unset_params() {
        let url = places_url("https://x.test/api", 3, 1, 12, StatusFilter::All, "");
        assert_eq!(url, "https://x.test/api/lists/3/places?page=1&per_page=12");
    }

    #[test]
    fn test_places_url_includes_status_and_search() {
        let url = places_url(
            "https://x.test/api",
            3,
            2,
            12,
            StatusFilter::NotConnected,
            "el nil cafe",
        );
        assert_eq!(
            url,
            "https://x.test/api/lists/3/places?page=2&per_page=12&status=not_connected&search=el%20nil%20cafe"
        );
    }
}
