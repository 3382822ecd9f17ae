//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod prompt;
pub mod view;
pub mod website_api;

pub use prompt::UserPrompt;
pub use view::DashboardView;
pub use website_api::WebsiteApi;
