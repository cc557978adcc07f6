use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::order::OrderRecord;
use crate::models::user::UserRecord;

/// Read access to the external order service.
///
/// The REST backend is one implementation; tests and embedders can supply
/// their own without touching the order screen logic.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait OrderSource: Send + Sync {
    /// Human-readable name of this source (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch orders. `None` is the unfiltered list; `Some(query)` is a
    /// prebuilt query string such as `id=7&asset_id=AAPL`, appended verbatim.
    async fn fetch_orders(&self, query: Option<&str>) -> Result<Vec<OrderRecord>, CoreError>;
}

/// The external user directory backing login and registration.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait UserDirectory: Send + Sync {
    fn name(&self) -> &str;

    /// Look up a user by exact email. `Ok(None)` if no such user exists.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, CoreError>;

    /// Create a user record and return it as stored by the directory.
    async fn create_user(&self, user: &UserRecord) -> Result<UserRecord, CoreError>;
}
