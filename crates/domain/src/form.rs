//! Add-website form — raw user input and the creation request it produces.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Raw state of the add-website form, exactly as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddWebsiteForm {
    pub url: String,
    pub name: String,
    pub use_pki: bool,
    pub client_cert_path: String,
    pub client_key_path: String,
    pub custom_root_ca_path: String,
    pub skip_tls_verify: bool,
}

/// Body of `POST /api/websites`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWebsite {
    pub url: String,
    pub name: String,
    #[serde(rename = "usePKI")]
    pub use_pki: bool,
    /// Present only when `use_pki` is set.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub pki: Option<PkiSettings>,
}

/// Mutual-TLS settings sent along with a PKI-enabled website.
///
/// Paths are hints the backend resolves on its own filesystem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PkiSettings {
    pub client_cert_path: String,
    pub client_key_path: String,
    #[serde(rename = "customRootCAPath")]
    pub custom_root_ca_path: String,
    #[serde(rename = "skipTLSVerify")]
    pub skip_tls_verify: bool,
}

impl AddWebsiteForm {
    /// Trim and validate the form, producing the creation request.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingUrl`] when the URL is blank, and
    /// [`ValidationError::UnpairedClientCertificate`] when PKI is enabled
    /// with only one of the certificate and key paths filled in.
    pub fn into_request(self) -> Result<NewWebsite, ValidationError> {
        let url = self.url.trim().to_string();
        if url.is_empty() {
            return Err(ValidationError::MissingUrl);
        }

        let name = match self.name.trim() {
            "" => url.clone(),
            name => name.to_string(),
        };

        let pki = if self.use_pki {
            let settings = PkiSettings {
                client_cert_path: self.client_cert_path.trim().to_string(),
                client_key_path: self.client_key_path.trim().to_string(),
                custom_root_ca_path: self.custom_root_ca_path.trim().to_string(),
                skip_tls_verify: self.skip_tls_verify,
            };
            settings.validate()?;
            Some(settings)
        } else {
            None
        };

        Ok(NewWebsite {
            url,
            name,
            use_pki: self.use_pki,
            pki,
        })
    }
}

impl PkiSettings {
    /// Check that certificate and key are either both set or both empty.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnpairedClientCertificate`] on a mixed state.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.client_cert_path.is_empty() != self.client_key_path.is_empty() {
            return Err(ValidationError::UnpairedClientCertificate);
        }
        Ok(())
    }
}
