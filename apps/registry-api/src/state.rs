//! Application state management

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
}
