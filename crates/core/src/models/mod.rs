pub mod allocation;
pub mod asset;
pub mod chart;
pub mod dashboard;
pub mod holding;
pub mod order;
pub mod performance;
pub mod portfolio;
pub mod settings;
pub mod user;
pub mod value;
