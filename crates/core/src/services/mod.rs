pub mod auth_service;
pub mod chart_service;
pub mod dashboard_service;
pub mod order_service;
