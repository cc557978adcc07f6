use serde::{Deserialize, Serialize};

/// Header and quick-stat cards of the logged-in dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardOverview {
    /// e.g. "Welcome back, Alice!"
    pub welcome: String,
    pub user_name: String,
    pub avatar_url: String,
    /// Shown when the avatar image is unavailable
    pub avatar_initial: String,
    pub asset_count: usize,
    /// Total allocation value, e.g. "$100,000"
    pub total_value: String,
    pub holdings_count: usize,
}
