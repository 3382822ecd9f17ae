//! [`WebsiteApi`] implementation over reqwest.

use reqwest::{Client, Response, Url};

use sitewatch_app::ports::WebsiteApi;
use sitewatch_domain::error::SiteWatchError;
use sitewatch_domain::form::NewWebsite;
use sitewatch_domain::id::WebsiteId;
use sitewatch_domain::website::WebsiteRecord;

use crate::config::HttpApiConfig;
use crate::error::HttpError;

/// Client for the backend's `/api/websites` endpoints.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpWebsiteApi {
    client: Client,
    /// Backend origin, possibly with a path prefix.
    base: Url,
}

impl HttpWebsiteApi {
    /// Build a client for the backend described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidBaseUrl`] when the base URL is not an
    /// http(s) origin, or [`HttpError::Client`] when reqwest cannot build
    /// its client.
    pub fn new(config: &HttpApiConfig) -> Result<Self, HttpError> {
        let invalid = || HttpError::InvalidBaseUrl(config.base_url.clone());
        let base = Url::parse(config.base_url.trim()).map_err(|_| invalid())?;
        if !matches!(base.scheme(), "http" | "https") || base.cannot_be_a_base() {
            return Err(invalid());
        }

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(HttpError::Client)?;

        Ok(Self { client, base })
    }

    /// `<base>/api/<segments..>`, each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // Never fails: `new` rejects cannot-be-a-base URLs.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("api").extend(segments);
        }
        url
    }

    /// Full URL of the website collection.
    #[must_use]
    pub fn websites_url(&self) -> Url {
        self.endpoint(&["websites"])
    }

    fn website_url(&self, id: &WebsiteId) -> Url {
        let id = id.to_string();
        self.endpoint(&["websites", id.as_str()])
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, HttpError> {
        let resp = request.send().await.map_err(HttpError::Request)?;
        let status = resp.status();
        if !status.is_success() {
            tracing::debug!(%status, url = %resp.url(), "backend rejected request");
            return Err(HttpError::Status(status));
        }
        Ok(resp)
    }
}

impl WebsiteApi for HttpWebsiteApi {
    #[tracing::instrument(skip(self))]
    async fn list_websites(&self) -> Result<Vec<WebsiteRecord>, SiteWatchError> {
        let resp = self.send(self.client.get(self.websites_url())).await?;
        let websites: Vec<WebsiteRecord> = resp.json().await.map_err(HttpError::Decode)?;
        tracing::debug!(count = websites.len(), "fetched websites");
        Ok(websites)
    }

    #[tracing::instrument(skip(self, website), fields(url = %website.url))]
    async fn create_website(&self, website: &NewWebsite) -> Result<(), SiteWatchError> {
        self.send(self.client.post(self.websites_url()).json(website))
            .await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_website(&self, id: &WebsiteId) -> Result<(), SiteWatchError> {
        self.send(self.client.delete(self.website_url(id))).await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn check_website(&self, id: &WebsiteId) -> Result<(), SiteWatchError> {
        let id = id.to_string();
        let url = self.endpoint(&["websites", id.as_str(), "check"]);
        self.send(self.client.post(url)).await?;
        Ok(())
    }
}
