use serde::{Deserialize, Serialize};

use super::allocation::AllocationEntry;
use super::asset::AssetClass;
use super::holding::Holding;
use super::performance::WeeklyPerformance;

/// The in-memory data object every chart view is rendered from.
///
/// Contains: the asset allocation (pie + summary), the holdings (table)
/// and the weekly performance series (bar chart).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioData {
    pub assets: Vec<AllocationEntry>,
    pub holdings: Vec<Holding>,
    pub performance: WeeklyPerformance,
}

impl PortfolioData {
    /// Built-in demonstration portfolio shown on the dashboard.
    pub fn sample() -> Self {
        Self {
            assets: vec![
                AllocationEntry::new("Stocks", 45_000.0, 45.0, "#2196F3"),
                AllocationEntry::new("Bonds", 30_000.0, 30.0, "#4CAF50"),
                AllocationEntry::new("Real Estate", 15_000.0, 15.0, "#FF9800"),
                AllocationEntry::new("Cash", 10_000.0, 10.0, "#9C27B0"),
            ],
            holdings: vec![
                sample_holding("AAPL", "Apple Inc.", 100, 150.00, 175.50, 17_550.0, 2_550.0, 17.0, AssetClass::Stocks),
                sample_holding("GOOGL", "Alphabet Inc.", 50, 2_800.00, 2_950.00, 147_500.0, 7_500.0, 5.36, AssetClass::Stocks),
                sample_holding("MSFT", "Microsoft Corp.", 75, 300.00, 325.00, 24_375.0, 1_875.0, 8.33, AssetClass::Stocks),
                sample_holding("BOND-ETF", "Vanguard Total Bond ETF", 200, 85.00, 87.50, 17_500.0, 500.0, 2.94, AssetClass::Bonds),
            ],
            performance: WeeklyPerformance {
                labels: (1..=8).map(|w| format!("Week {w}")).collect(),
                stocks: vec![2.1, 1.8, -0.5, 3.2, 1.5, -1.2, 2.8, 1.9],
                bonds: vec![0.3, 0.2, 0.4, 0.1, 0.3, 0.2, 0.4, 0.3],
                real_estate: vec![0.8, 1.2, 0.5, 1.8, 0.9, 0.6, 1.1, 0.8],
            },
        }
    }

    /// Sum of all allocation values (shown as "Total Value" on the dashboard).
    pub fn total_allocation_value(&self) -> f64 {
        self.assets.iter().map(|a| a.value).sum()
    }

    /// Find a holding by its ticker symbol (case-insensitive).
    pub fn holding(&self, symbol: &str) -> Option<&Holding> {
        self.holdings
            .iter()
            .find(|h| h.symbol.eq_ignore_ascii_case(symbol))
    }
}

impl Default for PortfolioData {
    fn default() -> Self {
        Self::sample()
    }
}

#[allow(clippy::too_many_arguments)]
fn sample_holding(
    symbol: &str,
    name: &str,
    quantity: u64,
    avg_price: f64,
    current_price: f64,
    market_value: f64,
    gain_loss: f64,
    gain_loss_percent: f64,
    asset_type: AssetClass,
) -> Holding {
    Holding {
        symbol: symbol.to_string(),
        name: name.to_string(),
        quantity,
        avg_price,
        current_price,
        market_value,
        gain_loss,
        gain_loss_percent,
        asset_type,
    }
}
