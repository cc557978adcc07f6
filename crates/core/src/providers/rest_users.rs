use async_trait::async_trait;
use reqwest::Client;

use super::http::build_client;
use super::traits::UserDirectory;
use crate::errors::CoreError;
use crate::models::settings::Settings;
use crate::models::user::UserRecord;

const PROVIDER: &str = "UserDirectory";

/// User directory backed by `GET {base}/users?email=` and `POST {base}/users`.
pub struct RestUserDirectory {
    client: Client,
    users_url: String,
}

impl RestUserDirectory {
    pub fn new(settings: &Settings) -> Self {
        Self {
            client: build_client(settings),
            users_url: settings.endpoint("/users"),
        }
    }

    pub fn users_url(&self) -> &str {
        &self.users_url
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl UserDirectory for RestUserDirectory {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, CoreError> {
        let users: Vec<UserRecord> = self
            .client
            .get(&self.users_url)
            .query(&[("email", email)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: PROVIDER.into(),
                message: format!("Failed to parse user lookup response: {e}"),
            })?;

        // The backend filters by email; keep only an exact match regardless.
        Ok(users.into_iter().find(|u| u.email == email))
    }

    async fn create_user(&self, user: &UserRecord) -> Result<UserRecord, CoreError> {
        let created: UserRecord = self
            .client
            .post(&self.users_url)
            .json(user)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: PROVIDER.into(),
                message: format!("Failed to parse created user: {e}"),
            })?;

        Ok(created)
    }
}
