//! # sitewatch-domain
//!
//! Pure domain model for the sitewatch dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **websites** as reported by the monitoring backend
//! - Define the **add-website form** and the creation request it produces
//! - Group websites into the **board** the dashboard renders
//! - Sequence overlapping refreshes so stale responses are discarded
//! - Hold every user-facing label and notification text
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod action;
pub mod error;
pub mod id;
pub mod refresh;
pub mod time;

pub mod board;
pub mod form;
pub mod website;
