use leptos::logging::log;
use leptos::prelude::window;

pub const ERROR_DISMISS_MS: u32 = 5000;
pub const COPY_FEEDBACK_MS: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Upload,
    Chat,
    Download,
    ConvertToText,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Upload => "/upload",
            Endpoint::Chat => "/chat",
            Endpoint::Download => "/download",
            Endpoint::ConvertToText => "/convert-to-text",
        }
    }
}

/// Where the backend lives. The page is served by the backend itself, so
/// the default is the page origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn from_location() -> Self {
        match window().location().origin() {
            Ok(origin) => Self::new(origin),
            Err(e) => {
                log!("[WARN] [Config] Could not read window origin, using relative URLs: {:?}", e);
                Self::new("")
            }
        }
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}
