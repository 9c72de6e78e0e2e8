// 3rd party crates
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{header, Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

// Current module imports
use super::auth::TokenSource;
use super::errors::ComputeError;
use super::types::{ErrorResponse, GceConfig};

/// Creates a reqwest client with the appropriate headers for the compute API.
///
/// Authorization is not part of the default headers: the token may change
/// during a run and is attached per request by [`send_json`].
pub(super) fn create_reqwest_client(config: &GceConfig) -> Result<Client, ComputeError> {
    // Create headers.
    let mut headers: HeaderMap = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    // Build the client.
    let client: Client = Client::builder()
        .default_headers(headers)
        .timeout(config.request_timeout)
        .build()
        .map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            ComputeError::Http(e)
        })?;

    Ok(client)
}

/// Authorization header for `token`, marked sensitive so it is never logged.
pub(super) fn bearer_header(token: &str) -> Result<HeaderValue, ComputeError> {
    let bearer_token: String = format!("Bearer {}", token);
    let mut auth_value: HeaderValue = HeaderValue::from_str(&bearer_token).map_err(|e| {
        error!("Invalid access token format: {}", e);
        ComputeError::InvalidHeaderValue(e)
    })?;
    auth_value.set_sensitive(true);
    Ok(auth_value)
}

/// Query parameters of a list call; empty values are left out.
pub(super) fn list_query<'a>(filter: &'a str, page_token: &'a str) -> Vec<(&'static str, &'a str)> {
    let mut query = Vec::new();
    if !filter.is_empty() {
        query.push(("filter", filter));
    }
    if !page_token.is_empty() {
        query.push(("pageToken", page_token));
    }
    query
}

/// Authorizes a request with a fresh token from `tokens`, sends it and
/// decodes a JSON body, mapping non-2xx answers to [`ComputeError::Api`].
pub(super) async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
    tokens: &dyn TokenSource,
    url: &str,
) -> Result<T, ComputeError> {
    let token: String = tokens.access_token().await?;
    let request: RequestBuilder = request.header(header::AUTHORIZATION, bearer_header(&token)?);

    debug!(url = %url, "Sending compute API request");

    let response: Response = request.send().await?;
    let status: StatusCode = response.status();

    if !status.is_success() {
        let body: String = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(api_error(status, &body));
    }

    let body: String = response.text().await?;
    serde_json::from_str(&body).map_err(|e| ComputeError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}

/// Builds an API error, preferring the message of a Google error envelope.
pub(super) fn api_error(status: StatusCode, body: &str) -> ComputeError {
    let message: String = match serde_json::from_str::<ErrorResponse>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
        _ if body.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
        _ => body.trim().to_string(),
    };
    ComputeError::Api { status, message }
}
