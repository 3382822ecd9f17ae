//! # sitewatch-adapter-http-reqwest
//!
//! HTTP adapter built on [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the `WebsiteApi` port against the backend's `/api/websites`
//!   endpoints (list, create, delete, check)
//! - Treat every non-2xx status uniformly as a failure
//! - Decode `WebsiteRecord` lists; ignore the bodies of mutation responses
//!
//! ## Dependency rule
//! Depends on `sitewatch-app` (for the port trait) and `sitewatch-domain`
//! (for wire types). Never leaks reqwest types past the port boundary.

pub mod client;
pub mod config;
pub mod error;

pub use client::HttpWebsiteApi;
pub use config::HttpApiConfig;
pub use error::HttpError;
