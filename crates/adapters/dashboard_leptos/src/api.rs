//! HTTP API client wrapping `gloo-net` for calls to `/api/websites`.

use gloo_net::http::{Request, Response};
use sitewatch_domain::form::NewWebsite;
use sitewatch_domain::id::WebsiteId;
use sitewatch_domain::website::WebsiteRecord;

const WEBSITES_URL: &str = "/api/websites";

/// Error returned by API client methods.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// Check the HTTP response status and extract an error if non-2xx.
fn check_response(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    Err(ApiError {
        message: sitewatch_domain::error::ApiError::Status(resp.status()).to_string(),
    })
}

/// Percent-encode one URL path segment (everything outside the unreserved set).
fn encode_path_segment(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    encoded
}

fn website_url(id: &WebsiteId) -> String {
    format!("{WEBSITES_URL}/{}", encode_path_segment(&id.to_string()))
}

/// Fetch every monitored website.
pub async fn fetch_websites() -> Result<Vec<WebsiteRecord>, ApiError> {
    let resp = check_response(Request::get(WEBSITES_URL).send().await?)?;
    let websites: Vec<WebsiteRecord> = resp.json().await?;
    Ok(websites)
}

/// Register a website via POST /api/websites. The response body is ignored.
pub async fn create_website(website: &NewWebsite) -> Result<(), ApiError> {
    check_response(Request::post(WEBSITES_URL).json(website)?.send().await?)?;
    Ok(())
}

/// Stop monitoring a website via DELETE /api/websites/{id}.
pub async fn delete_website(id: &WebsiteId) -> Result<(), ApiError> {
    check_response(Request::delete(&website_url(id)).send().await?)?;
    Ok(())
}

/// Trigger an immediate check via POST /api/websites/{id}/check.
pub async fn check_website(id: &WebsiteId) -> Result<(), ApiError> {
    let url = format!("{}/check", website_url(id));
    check_response(Request::post(&url).send().await?)?;
    Ok(())
}
