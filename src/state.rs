use std::sync::Arc;

use crate::options;
use crate::settings::Settings;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) settings: Arc<Settings>,
    pub(crate) trust_proxy_headers: bool,
}

impl AppState {
    /// Normalize `settings` and freeze them for sharing across handlers.
    pub(crate) fn new(mut settings: Settings, trust_proxy_headers: bool) -> Self {
        options::update(&mut settings);
        Self {
            settings: Arc::new(settings),
            trust_proxy_headers,
        }
    }
}
