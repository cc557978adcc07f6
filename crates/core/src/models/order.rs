use serde::{Deserialize, Serialize};

use super::value::{null_as_default, FieldValue};

/// Column headers of the transaction history table, in display order.
pub const ORDER_COLUMNS: [&str; 9] = [
    "ID",
    "Asset ID",
    "Asset Name",
    "Order Ref No",
    "Transaction Type",
    "Order Status",
    "Order Value",
    "Created On",
    "Created By",
];

/// Text of the single row shown when a result set is empty.
pub const EMPTY_ORDERS_TEXT: &str = "No data available";

/// One row returned by the external order service.
///
/// The service owns these records; the dashboard only displays them.
/// Missing or `null` fields fall back to empty values instead of failing
/// the whole result set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderRecord {
    pub id: FieldValue,
    pub asset_id: FieldValue,
    #[serde(deserialize_with = "null_as_default")]
    pub asset_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub order_ref_no: String,
    #[serde(deserialize_with = "null_as_default")]
    pub txn_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub order_status: bool,
    pub order_value: FieldValue,
    #[serde(deserialize_with = "null_as_default")]
    pub created_on: String,
    pub created_by: FieldValue,
}

impl OrderRecord {
    /// "Active" for a live order, "Inactive" otherwise.
    pub fn status_label(&self) -> &'static str {
        if self.order_status {
            "Active"
        } else {
            "Inactive"
        }
    }

    /// Cells in [`ORDER_COLUMNS`] order.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.asset_id.to_string(),
            self.asset_name.clone(),
            self.order_ref_no.clone(),
            self.txn_type.clone(),
            self.status_label().to_string(),
            self.order_value.to_string(),
            self.created_on.clone(),
            self.created_by.to_string(),
        ]
    }
}

/// Body of the order table: either data rows or the empty-state row.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderTableBody {
    Rows(Vec<Vec<String>>),
    /// One cell spanning `colspan` columns.
    Placeholder { text: String, colspan: usize },
}

/// Render-ready transaction history table.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderTable {
    pub columns: Vec<String>,
    pub body: OrderTableBody,
}

impl OrderTable {
    pub fn from_records(records: &[OrderRecord]) -> Self {
        let columns: Vec<String> = ORDER_COLUMNS.iter().map(|c| c.to_string()).collect();
        let body = if records.is_empty() {
            OrderTableBody::Placeholder {
                text: EMPTY_ORDERS_TEXT.to_string(),
                colspan: columns.len(),
            }
        } else {
            OrderTableBody::Rows(records.iter().map(OrderRecord::cells).collect())
        };
        Self { columns, body }
    }

    /// Number of body rows as displayed (the placeholder counts as one).
    pub fn row_count(&self) -> usize {
        match &self.body {
            OrderTableBody::Rows(rows) => rows.len(),
            OrderTableBody::Placeholder { .. } => 1,
        }
    }

    pub fn is_empty_state(&self) -> bool {
        matches!(self.body, OrderTableBody::Placeholder { .. })
    }
}

/// Heading above the order table.
pub const ORDER_SCREEN_HEADING: &str = "Transaction History";

/// Tabs of the order screen. Only the order list exists today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderTab {
    #[default]
    Orders,
}

impl OrderTab {
    pub fn label(&self) -> &'static str {
        match self {
            OrderTab::Orders => "Orders",
        }
    }

    /// Whether the search inputs are shown on this tab.
    pub fn has_search(&self) -> bool {
        matches!(self, OrderTab::Orders)
    }
}

/// Everything the order screen displays.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderScreenView {
    pub heading: String,
    pub active_tab: OrderTab,
    pub search_visible: bool,
    pub table: OrderTable,
}
