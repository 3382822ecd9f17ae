//! Website API port — the monitoring backend's REST surface.

use std::future::Future;

use sitewatch_domain::error::SiteWatchError;
use sitewatch_domain::form::NewWebsite;
use sitewatch_domain::id::WebsiteId;
use sitewatch_domain::website::WebsiteRecord;

/// Calls the backend exposes under `/api/websites`.
///
/// Any non-2xx answer or transport failure is reported as
/// [`SiteWatchError::Api`]; response bodies of mutations are not interpreted.
pub trait WebsiteApi {
    /// `GET /websites` — every monitored website, in backend order.
    fn list_websites(
        &self,
    ) -> impl Future<Output = Result<Vec<WebsiteRecord>, SiteWatchError>> + Send;

    /// `POST /websites` — start monitoring a new website.
    fn create_website(
        &self,
        website: &NewWebsite,
    ) -> impl Future<Output = Result<(), SiteWatchError>> + Send;

    /// `DELETE /websites/{id}` — stop monitoring a website.
    fn delete_website(
        &self,
        id: &WebsiteId,
    ) -> impl Future<Output = Result<(), SiteWatchError>> + Send;

    /// `POST /websites/{id}/check` — trigger an immediate check.
    fn check_website(
        &self,
        id: &WebsiteId,
    ) -> impl Future<Output = Result<(), SiteWatchError>> + Send;
}

impl<T: WebsiteApi + Send + Sync> WebsiteApi for std::sync::Arc<T> {
    fn list_websites(
        &self,
    ) -> impl Future<Output = Result<Vec<WebsiteRecord>, SiteWatchError>> + Send {
        (**self).list_websites()
    }

    fn create_website(
        &self,
        website: &NewWebsite,
    ) -> impl Future<Output = Result<(), SiteWatchError>> + Send {
        (**self).create_website(website)
    }

    fn delete_website(
        &self,
        id: &WebsiteId,
    ) -> impl Future<Output = Result<(), SiteWatchError>> + Send {
        (**self).delete_website(id)
    }

    fn check_website(
        &self,
        id: &WebsiteId,
    ) -> impl Future<Output = Result<(), SiteWatchError>> + Send {
        (**self).check_website(id)
    }
}
