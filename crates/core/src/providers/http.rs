use reqwest::Client;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::models::settings::Settings;

/// Build the shared HTTP client from settings.
pub fn build_client(settings: &Settings) -> Client {
    let builder = Client::builder();
    #[cfg(not(target_arch = "wasm32"))]
    let builder = builder.timeout(Duration::from_secs(settings.request_timeout_secs));
    #[cfg(target_arch = "wasm32")]
    let _ = settings;
    builder.build().unwrap_or_else(|_| Client::new())
}
