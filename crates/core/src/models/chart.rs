use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Which view the portfolio chart card shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartMode {
    /// Pie allocation chart plus the summary panel
    #[default]
    Assets,
    /// Holdings table
    Holdings,
    /// Weekly performance bar chart
    Performance,
}

impl ChartMode {
    /// All modes, in toggle-group order.
    pub const ALL: [ChartMode; 3] = [ChartMode::Assets, ChartMode::Holdings, ChartMode::Performance];

    /// Button label shown in the toggle group.
    pub fn label(&self) -> &'static str {
        match self {
            ChartMode::Assets => "Assets",
            ChartMode::Holdings => "Holdings",
            ChartMode::Performance => "Performance",
        }
    }

    /// Value carried by the toggle button.
    pub fn toggle_value(&self) -> &'static str {
        match self {
            ChartMode::Assets => "pie",
            ChartMode::Holdings => "table",
            ChartMode::Performance => "bar",
        }
    }
}

impl std::fmt::Display for ChartMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ChartMode {
    type Err = CoreError;

    /// Accepts either the toggle value (`pie`) or the label (`Assets`), case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ChartMode::ALL
            .into_iter()
            .find(|m| {
                m.toggle_value().eq_ignore_ascii_case(needle) || m.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| CoreError::ValidationError(format!("Unknown chart mode: '{needle}'")))
    }
}

/// Visual marker for a gain/loss figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GainLossMarker {
    Positive,
    Negative,
}

impl GainLossMarker {
    /// Zero counts as positive.
    pub fn for_value(gain_loss: f64) -> Self {
        if gain_loss >= 0.0 {
            GainLossMarker::Positive
        } else {
            GainLossMarker::Negative
        }
    }
}

// ── Pie (Assets) ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: String,
    /// e.g. "Stocks: $45,000 (45%)"
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

/// One line of the portfolio summary panel under the pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryLine {
    /// e.g. "Stocks:"
    pub label: String,
    /// e.g. "$45,000.00 (45%)"
    pub value: String,
}

// ── Table (Holdings) ────────────────────────────────────────────────

pub const HOLDINGS_COLUMNS: [&str; 8] = [
    "Symbol",
    "Name",
    "Quantity",
    "Avg Price",
    "Current Price",
    "Market Value",
    "Gain/Loss",
    "Type",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingRow {
    pub symbol: String,
    pub name: String,
    pub quantity: String,
    pub avg_price: String,
    pub current_price: String,
    pub market_value: String,
    /// e.g. "$2,550.00 (17.00%)"
    pub gain_loss: String,
    pub marker: GainLossMarker,
    pub asset_type: String,
}

impl HoldingRow {
    /// Cells in [`HOLDINGS_COLUMNS`] order.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.symbol.clone(),
            self.name.clone(),
            self.quantity.clone(),
            self.avg_price.clone(),
            self.current_price.clone(),
            self.market_value.clone(),
            self.gain_loss.clone(),
            self.asset_type.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingsTable {
    pub columns: Vec<String>,
    pub rows: Vec<HoldingRow>,
}

// ── Bar (Performance) ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: String,
    pub border_color: String,
}

impl BarDataset {
    /// Tooltip for the bar at `index`, e.g. "Stocks: 2.10%".
    pub fn tooltip(&self, index: usize) -> Option<String> {
        self.data
            .get(index)
            .map(|v| format!("{}: {v:.2}%", self.label))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<BarDataset>,
    pub x_axis_title: String,
    pub y_axis_title: String,
}

// ── Rendered view ───────────────────────────────────────────────────

/// Exactly one view per chart mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartRender {
    Allocation {
        pie: PieChart,
        summary: Vec<SummaryLine>,
    },
    Holdings(HoldingsTable),
    Performance(BarChart),
}

impl ChartRender {
    /// The mode that produced this view.
    pub fn mode(&self) -> ChartMode {
        match self {
            ChartRender::Allocation { .. } => ChartMode::Assets,
            ChartRender::Holdings(_) => ChartMode::Holdings,
            ChartRender::Performance(_) => ChartMode::Performance,
        }
    }

    /// The summary panel, present only in the allocation view.
    pub fn summary(&self) -> Option<&[SummaryLine]> {
        match self {
            ChartRender::Allocation { summary, .. } => Some(summary),
            _ => None,
        }
    }
}
