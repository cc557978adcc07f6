use serde::{Deserialize, Serialize};

/// One slice of the portfolio asset allocation.
///
/// `value` and `percentage` are supplied independently and are not
/// cross-checked: the percentage is displayed as stored, never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationEntry {
    /// Display name (e.g., "Stocks", "Real Estate")
    pub name: String,

    /// Value in the display currency
    pub value: f64,

    /// Share of the portfolio, 0–100
    pub percentage: f64,

    /// Display colour as a CSS hex string (e.g., "#2196F3")
    pub color: String,
}

impl AllocationEntry {
    pub fn new(
        name: impl Into<String>,
        value: f64,
        percentage: f64,
        color: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value,
            percentage,
            color: color.into(),
        }
    }
}
