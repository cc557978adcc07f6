use crate::models::chart::{BarChart, ChartRender, GainLossMarker, HoldingsTable, PieChart, SummaryLine};
use crate::models::dashboard::DashboardOverview;
use crate::models::order::{OrderScreenView, OrderTable, OrderTableBody};

const COLUMN_GAP: &str = "  ";

/// Render the active chart view.
pub fn render_chart(view: &ChartRender) -> String {
    match view {
        ChartRender::Allocation { pie, summary } => {
            let mut out = render_pie(pie);
            out.push('\n');
            out.push_str(&render_summary(summary));
            out
        }
        ChartRender::Holdings(table) => render_holdings(table),
        ChartRender::Performance(bars) => render_bars(bars),
    }
}

fn render_pie(pie: &PieChart) -> String {
    let mut out = format!("{}\n", pie.title);
    for slice in &pie.slices {
        out.push_str(&format!("  {} [{}]\n", slice.tooltip, slice.color));
    }
    out
}

fn render_summary(lines: &[SummaryLine]) -> String {
    let width = lines.iter().map(|l| l.label.chars().count()).max().unwrap_or(0);
    let mut out = String::from("Portfolio Summary\n");
    for line in lines {
        out.push_str(&format!("  {}{COLUMN_GAP}{}\n", pad(&line.label, width), line.value));
    }
    out
}

/// Holdings table; gains are prefixed `+`, losses `-`.
pub fn render_holdings(table: &HoldingsTable) -> String {
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| {
            let mut cells = row.cells();
            let marker = match row.marker {
                GainLossMarker::Positive => '+',
                GainLossMarker::Negative => '-',
            };
            cells[6] = format!("{marker} {}", cells[6]);
            cells
        })
        .collect();
    render_grid(&table.columns, &rows)
}

/// One line per week, one column per dataset.
pub fn render_bars(chart: &BarChart) -> String {
    let mut columns = vec!["Week".to_string()];
    columns.extend(chart.datasets.iter().map(|d| d.label.clone()));

    let rows: Vec<Vec<String>> = chart
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let mut cells = vec![label.clone()];
            cells.extend(
                chart
                    .datasets
                    .iter()
                    .map(|d| d.data.get(i).map(|v| format!("{v:.2}%")).unwrap_or_default()),
            );
            cells
        })
        .collect();

    format!("{}\n{}", chart.title, render_grid(&columns, &rows))
}

/// Order table; an empty result is one centred row spanning every column.
pub fn render_order_table(table: &OrderTable) -> String {
    match &table.body {
        OrderTableBody::Rows(rows) => render_grid(&table.columns, rows),
        OrderTableBody::Placeholder { text, .. } => {
            let header = render_grid(&table.columns, &[]);
            let width = header.lines().next().map(|l| l.chars().count()).unwrap_or(0);
            format!("{header}{}\n", center(text, width))
        }
    }
}

pub fn render_order_screen(screen: &OrderScreenView) -> String {
    let mut out = format!("[{}]\n\n{}\n", screen.active_tab.label(), screen.heading);
    if screen.search_visible {
        out.push_str("Search: <Order Id> <Security/Asset Id>\n");
    }
    out.push('\n');
    out.push_str(&render_order_table(&screen.table));
    out
}

pub fn render_dashboard(overview: &DashboardOverview) -> String {
    format!(
        "{}\nAssets: {}{COLUMN_GAP}Total Value: {}{COLUMN_GAP}Holdings: {}\n",
        overview.welcome, overview.asset_count, overview.total_value, overview.holdings_count
    )
}

/// Left-aligned grid with a header rule. Column widths fit the widest cell.
fn render_grid(columns: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| pad(c, *w))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP)
            .trim_end()
            .to_string()
    };

    let header = line(columns);
    let rule_width = widths.iter().sum::<usize>() + COLUMN_GAP.len() * widths.len().saturating_sub(1);
    let mut out = format!("{header}\n{}\n", "-".repeat(rule_width));
    for row in rows {
        out.push_str(&line(row.as_slice()));
        out.push('\n');
    }
    out
}

fn pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    format!("{s}{}", " ".repeat(width.saturating_sub(len)))
}

fn center(s: &str, width: usize) -> String {
    let len = s.chars().count();
    let left = width.saturating_sub(len) / 2;
    format!("{}{s}", " ".repeat(left))
}
