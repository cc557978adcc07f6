use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use super::http::build_client;
use super::traits::OrderSource;
use crate::errors::CoreError;
use crate::models::order::OrderRecord;
use crate::models::settings::Settings;

const PROVIDER: &str = "OrderService";

/// Order source backed by the REST endpoint `GET {base}/orders`.
pub struct RestOrderSource {
    client: Client,
    base_url: String,
}

impl RestOrderSource {
    pub fn new(settings: &Settings) -> Self {
        Self {
            client: build_client(settings),
            base_url: settings.endpoint("/orders"),
        }
    }

    /// Full request URL. The query string is appended as given, without
    /// any further encoding.
    pub fn orders_url(&self, query: Option<&str>) -> String {
        match query {
            Some(q) if !q.is_empty() => format!("{}?{q}", self.base_url),
            _ => self.base_url.clone(),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl OrderSource for RestOrderSource {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn fetch_orders(&self, query: Option<&str>) -> Result<Vec<OrderRecord>, CoreError> {
        let url = self.orders_url(query);
        debug!("GET {url}");

        let orders: Vec<OrderRecord> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: PROVIDER.into(),
                message: format!("Failed to parse orders response: {e}"),
            })?;

        Ok(orders)
    }
}
