pub mod errors;
pub mod format;
pub mod models;
pub mod providers;
pub mod render;
pub mod security;
pub mod services;

use models::{
    chart::{ChartMode, ChartRender},
    dashboard::DashboardOverview,
    order::{OrderRecord, OrderScreenView, OrderTable},
    portfolio::PortfolioData,
    settings::Settings,
    user::{NewUser, SessionUser, UserRecord},
};
use providers::{
    rest_orders::RestOrderSource,
    rest_users::RestUserDirectory,
    traits::{OrderSource, UserDirectory},
};
use services::{
    auth_service::{AuthService, Session},
    chart_service::{ChartService, ChartView},
    dashboard_service::DashboardService,
    order_service::{OrderService, SearchOutcome},
};

use errors::CoreError;

/// Main entry point for the portfolio dashboard core library.
///
/// Owns the session, the chart view-state and the order screen, plus the
/// services that operate on them. The dashboard and its charts require a
/// logged-in user; the order screen does not.
#[must_use]
pub struct PortfolioDashboard {
    settings: Settings,
    data: PortfolioData,
    session: Session,
    chart_view: ChartView,
    chart_service: ChartService,
    dashboard_service: DashboardService,
    auth_service: AuthService,
    order_service: OrderService,
}

impl std::fmt::Debug for PortfolioDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioDashboard")
            .field("api_base_url", &self.settings.api_base_url)
            .field("user", &self.session.user().map(|u| &u.email))
            .field("chart_mode", &self.chart_view.mode())
            .field("orders", &self.order_service.rows().len())
            .finish()
    }
}

impl PortfolioDashboard {
    /// Create a dashboard talking to the REST backend named in `settings`.
    pub fn new(settings: Settings) -> Result<Self, CoreError> {
        settings.validate()?;
        let orders = Box::new(RestOrderSource::new(&settings));
        let users = Box::new(RestUserDirectory::new(&settings));
        Ok(Self::with_collaborators(settings, orders, users))
    }

    /// Create a dashboard with caller-supplied order and user backends.
    pub fn with_collaborators(
        settings: Settings,
        orders: Box<dyn OrderSource>,
        users: Box<dyn UserDirectory>,
    ) -> Self {
        let auth_service = AuthService::new(users, settings.password_hashing);
        let chart_service = ChartService::with_currency(&settings.currency);
        let dashboard_service = DashboardService::with_currency(&settings.currency);
        Self {
            settings,
            data: PortfolioData::sample(),
            session: Session::new(),
            chart_view: ChartView::new(),
            chart_service,
            dashboard_service,
            auth_service,
            order_service: OrderService::new(orders),
        }
    }

    /// Replace the built-in sample portfolio.
    pub fn with_portfolio_data(mut self, data: PortfolioData) -> Self {
        self.data = data;
        self
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn portfolio_data(&self) -> &PortfolioData {
        &self.data
    }

    // ── Session ─────────────────────────────────────────────────────

    pub async fn login(&mut self, email: &str, password: &str) -> Result<SessionUser, CoreError> {
        self.auth_service
            .login(&mut self.session, email, password)
            .await
    }

    pub fn logout(&mut self) {
        self.auth_service.logout(&mut self.session);
    }

    /// Register a new user. Does not log them in.
    pub async fn register(&self, new_user: NewUser) -> Result<UserRecord, CoreError> {
        self.auth_service.register(new_user).await
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&SessionUser> {
        self.session.user()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    // ── Dashboard & Charts ──────────────────────────────────────────

    /// Header and quick stats; `None` when logged out.
    #[must_use]
    pub fn overview(&self) -> Option<DashboardOverview> {
        self.dashboard_service.overview(&self.session, &self.data)
    }

    #[must_use]
    pub fn chart_mode(&self) -> ChartMode {
        self.chart_view.mode()
    }

    /// Apply a toggle-group selection; `None` keeps the current mode.
    /// Returns true if the mode changed.
    pub fn select_chart_mode(&mut self, selection: Option<ChartMode>) -> bool {
        self.chart_view.select_mode(selection)
    }

    /// Render the active chart view for the logged-in user.
    pub fn render_chart(&self) -> Result<ChartRender, CoreError> {
        self.session.require_user()?;
        Ok(self.chart_view.render(&self.chart_service, &self.data))
    }

    // ── Orders ──────────────────────────────────────────────────────

    /// Initial unfiltered order load; later calls are no-ops.
    pub async fn load_orders(&self) -> SearchOutcome {
        self.order_service.load_initial().await
    }

    pub async fn search_orders(&self, order_id: &str, asset_id: &str) -> SearchOutcome {
        self.order_service.search(order_id, asset_id).await
    }

    #[must_use]
    pub fn orders(&self) -> Vec<OrderRecord> {
        self.order_service.rows()
    }

    #[must_use]
    pub fn order_table(&self) -> OrderTable {
        self.order_service.table()
    }

    #[must_use]
    pub fn order_screen(&self) -> OrderScreenView {
        self.order_service.screen()
    }
}
