use serde::{Deserialize, Serialize};

use super::asset::AssetClass;

/// A single position in the portfolio.
///
/// `market_value`, `gain_loss` and `gain_loss_percent` are precomputed
/// inputs. Nothing enforces `market_value == quantity * current_price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Ticker symbol, unique within the portfolio (e.g., "AAPL")
    pub symbol: String,

    /// Human-readable name (e.g., "Apple Inc.")
    pub name: String,

    /// Number of units held
    pub quantity: u64,

    /// Average purchase price per unit
    pub avg_price: f64,

    /// Latest price per unit
    pub current_price: f64,

    /// Total value of the position
    pub market_value: f64,

    /// Absolute gain/loss of the position
    pub gain_loss: f64,

    /// Gain/loss as a percentage of cost
    pub gain_loss_percent: f64,

    pub asset_type: AssetClass,
}
