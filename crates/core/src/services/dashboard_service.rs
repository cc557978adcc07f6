use crate::format::CurrencyFormat;
use crate::models::dashboard::DashboardOverview;
use crate::models::portfolio::PortfolioData;
use crate::services::auth_service::Session;

/// Builds the dashboard header and quick-stat cards.
#[derive(Debug, Clone, Default)]
pub struct DashboardService {
    currency: CurrencyFormat,
}

impl DashboardService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_currency(code: &str) -> Self {
        Self {
            currency: CurrencyFormat::for_code(code),
        }
    }

    /// `None` when nobody is logged in: the dashboard renders nothing.
    pub fn overview(&self, session: &Session, data: &PortfolioData) -> Option<DashboardOverview> {
        let user = session.user()?;
        Some(DashboardOverview {
            welcome: format!("Welcome back, {}!", user.name),
            user_name: user.name.clone(),
            avatar_url: user.avatar.clone(),
            avatar_initial: user.initial(),
            asset_count: data.assets.len(),
            total_value: self.currency.grouped(data.total_allocation_value()),
            holdings_count: data.holdings.len(),
        })
    }
}
