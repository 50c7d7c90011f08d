//! Application state shared with request handlers.

use domain_users::{InMemoryUserRepository, UserService};

/// Shared application state.
///
/// Cloning is cheap: the user registry is reference-counted, so every clone
/// sees the same users.
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded from environment variables
    pub config: crate::config::Config,
    /// The process-wide user registry
    pub users: UserService<InMemoryUserRepository>,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        Self {
            config,
            users: UserService::new(InMemoryUserRepository::new()),
        }
    }
}
