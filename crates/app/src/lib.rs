//! # sitewatch-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `WebsiteApi` — the monitoring backend's REST API (driven/outbound)
//!   - `DashboardView` — where the grouped board is rendered
//!   - `UserPrompt` — blocking notifications and confirmations
//! - Provide the `DashboardController` use-case service: periodic refresh,
//!   add / remove / check / check-all, reload after every mutation
//! - Orchestrate domain objects without knowing *how* HTTP or rendering works
//!
//! ## Dependency rule
//! Depends on `sitewatch-domain` only (plus `tokio` for the poll task).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
