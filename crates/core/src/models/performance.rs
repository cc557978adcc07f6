use serde::{Deserialize, Serialize};

/// Weekly performance deltas (in percent) per asset class.
///
/// The three series are indexed by `labels`. Their lengths are expected to
/// match but are not enforced; see [`WeeklyPerformance::is_aligned`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPerformance {
    pub labels: Vec<String>,
    pub stocks: Vec<f64>,
    pub bonds: Vec<f64>,
    pub real_estate: Vec<f64>,
}

impl WeeklyPerformance {
    /// True when every series has exactly one value per label.
    pub fn is_aligned(&self) -> bool {
        let n = self.labels.len();
        self.stocks.len() == n && self.bonds.len() == n && self.real_estate.len() == n
    }

    /// Number of weeks covered (the label count).
    pub fn weeks(&self) -> usize {
        self.labels.len()
    }
}
