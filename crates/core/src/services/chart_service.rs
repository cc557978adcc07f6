use log::debug;

use crate::format::CurrencyFormat;
use crate::models::chart::{
    BarChart, BarDataset, ChartMode, ChartRender, GainLossMarker, HoldingRow, HoldingsTable,
    PieChart, PieSlice, SummaryLine, HOLDINGS_COLUMNS,
};
use crate::models::portfolio::PortfolioData;

const PIE_TITLE: &str = "Portfolio Asset Allocation";
const BAR_TITLE: &str = "Weekly Performance by Asset Type (%)";

/// Builds the three chart views from portfolio data.
///
/// The core computes every label and formatted figure; the frontend only
/// draws what it is handed.
#[derive(Debug, Clone, Default)]
pub struct ChartService {
    currency: CurrencyFormat,
}

impl ChartService {
    /// Amounts in US dollars.
    pub fn new() -> Self {
        Self::default()
    }

    /// Amounts in the currency named by an ISO 4217 code such as `"EUR"`.
    pub fn with_currency(code: &str) -> Self {
        Self {
            currency: CurrencyFormat::for_code(code),
        }
    }

    /// Render the view for `mode`. Exactly one view is produced per call.
    pub fn render(&self, mode: ChartMode, data: &PortfolioData) -> ChartRender {
        match mode {
            ChartMode::Assets => ChartRender::Allocation {
                pie: self.allocation_pie(data),
                summary: self.allocation_summary(data),
            },
            ChartMode::Holdings => ChartRender::Holdings(self.holdings_table(data)),
            ChartMode::Performance => ChartRender::Performance(self.performance_bars(data)),
        }
    }

    /// Pie chart of the asset allocation, sized by value.
    pub fn allocation_pie(&self, data: &PortfolioData) -> PieChart {
        let slices = data
            .assets
            .iter()
            .map(|asset| PieSlice {
                label: asset.name.clone(),
                value: asset.value,
                color: asset.color.clone(),
                tooltip: format!(
                    "{}: {} ({}%)",
                    asset.name,
                    self.currency.grouped(asset.value),
                    asset.percentage
                ),
            })
            .collect();

        PieChart {
            title: PIE_TITLE.to_string(),
            slices,
        }
    }

    /// Summary panel lines: formatted value next to the stored percentage.
    pub fn allocation_summary(&self, data: &PortfolioData) -> Vec<SummaryLine> {
        data.assets
            .iter()
            .map(|asset| SummaryLine {
                label: format!("{}:", asset.name),
                value: format!("{} ({}%)", self.currency.amount(asset.value), asset.percentage),
            })
            .collect()
    }

    pub fn holdings_table(&self, data: &PortfolioData) -> HoldingsTable {
        let rows = data
            .holdings
            .iter()
            .map(|h| HoldingRow {
                symbol: h.symbol.clone(),
                name: h.name.clone(),
                quantity: h.quantity.to_string(),
                avg_price: self.currency.amount(h.avg_price),
                current_price: self.currency.amount(h.current_price),
                market_value: self.currency.amount(h.market_value),
                gain_loss: self.currency.gain_loss(h.gain_loss, h.gain_loss_percent),
                marker: GainLossMarker::for_value(h.gain_loss),
                asset_type: h.asset_type.to_string(),
            })
            .collect();

        HoldingsTable {
            columns: HOLDINGS_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    /// Grouped bar chart of weekly performance, one dataset per asset class.
    pub fn performance_bars(&self, data: &PortfolioData) -> BarChart {
        let weekly = &data.performance;
        if !weekly.is_aligned() {
            debug!(
                "Weekly performance series lengths differ from {} labels; bars are paired by position",
                weekly.weeks()
            );
        }

        let dataset = |label: &str, values: &[f64], fill: &str, border: &str| BarDataset {
            label: label.to_string(),
            data: values.to_vec(),
            background_color: fill.to_string(),
            border_color: border.to_string(),
        };

        BarChart {
            title: BAR_TITLE.to_string(),
            labels: weekly.labels.clone(),
            datasets: vec![
                dataset("Stocks", weekly.stocks.as_slice(), "#2196F3", "#1976D2"),
                dataset("Bonds", weekly.bonds.as_slice(), "#4CAF50", "#388E3C"),
                dataset("Real Estate", weekly.real_estate.as_slice(), "#FF9800", "#F57C00"),
            ],
            x_axis_title: "Week".to_string(),
            y_axis_title: "Performance (%)".to_string(),
        }
    }
}

/// View-state of the chart card: which of the three views is showing.
///
/// A flat selector; every mode is reachable from every other in one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChartView {
    mode: ChartMode,
}

impl ChartView {
    /// Starts on the allocation (pie) view.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ChartMode {
        self.mode
    }

    /// Apply a toggle-group selection.
    ///
    /// `None` is what a toggle group reports when the active button is
    /// clicked again; it keeps the current mode. Returns true if the mode
    /// actually changed.
    pub fn select_mode(&mut self, selection: Option<ChartMode>) -> bool {
        let Some(mode) = selection else {
            return false;
        };
        if mode == self.mode {
            return false;
        }
        debug!("Chart mode {} -> {}", self.mode, mode);
        self.mode = mode;
        true
    }

    pub fn render(&self, service: &ChartService, data: &PortfolioData) -> ChartRender {
        service.render(self.mode, data)
    }
}
