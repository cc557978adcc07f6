use log::{debug, error, info};
use std::sync::Mutex;

use crate::errors::CoreError;
use crate::models::order::{
    OrderRecord, OrderScreenView, OrderTab, OrderTable, ORDER_SCREEN_HEADING,
};
use crate::providers::traits::OrderSource;

/// Compose the order search query string from the two filter inputs.
///
/// Both inputs are trimmed. Returns `None` when both are empty (no request
/// should be made). Values are inserted as typed, without URL-encoding.
pub fn build_query(order_id: &str, asset_id: &str) -> Option<String> {
    let order_id = order_id.trim();
    let asset_id = asset_id.trim();

    let mut parts = Vec::with_capacity(2);
    if !order_id.is_empty() {
        parts.push(format!("id={order_id}"));
    }
    if !asset_id.is_empty() {
        parts.push(format!("asset_id={asset_id}"));
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("&"))
    }
}

/// What happened to a load or search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// No request was issued (empty filters, or initial load already done).
    Skipped,
    /// The response replaced the displayed rows.
    Applied { rows: usize },
    /// A newer response was already displayed; this one was dropped.
    Stale,
    /// The request failed; the displayed rows are unchanged.
    Failed,
}

/// Displayed order rows plus request sequencing.
///
/// Every request gets a sequence number from [`OrderBoard::begin_request`].
/// A response is applied only if it is newer than the last applied one, so
/// a slow response to an old search never overwrites a newer result.
#[derive(Debug, Default)]
pub struct OrderBoard {
    rows: Vec<OrderRecord>,
    issued_seq: u64,
    applied_seq: u64,
}

impl OrderBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[OrderRecord] {
        &self.rows
    }

    /// Reserve the next sequence number for an outgoing request.
    pub fn begin_request(&mut self) -> u64 {
        self.issued_seq += 1;
        self.issued_seq
    }

    /// Sequence number of the response currently displayed (0 = none yet).
    pub fn applied_seq(&self) -> u64 {
        self.applied_seq
    }

    /// Apply the result of request `seq`.
    pub fn apply_response(
        &mut self,
        seq: u64,
        result: Result<Vec<OrderRecord>, CoreError>,
    ) -> SearchOutcome {
        match result {
            Ok(rows) if seq > self.applied_seq => {
                let count = rows.len();
                self.rows = rows;
                self.applied_seq = seq;
                SearchOutcome::Applied { rows: count }
            }
            Ok(_) => {
                debug!(
                    "Dropping stale order response #{seq} (showing #{})",
                    self.applied_seq
                );
                SearchOutcome::Stale
            }
            Err(e) => {
                error!("Error fetching orders (request #{seq}): {e}");
                SearchOutcome::Failed
            }
        }
    }
}

/// The order search screen: initial load, filtered search, table view.
///
/// State sits behind a mutex that is never held across an `.await`, so
/// searches may overlap; sequencing in [`OrderBoard`] decides which
/// response is shown.
pub struct OrderService {
    source: Box<dyn OrderSource>,
    board: Mutex<OrderBoard>,
    initial_load_started: Mutex<bool>,
}

impl OrderService {
    pub fn new(source: Box<dyn OrderSource>) -> Self {
        Self {
            source,
            board: Mutex::new(OrderBoard::new()),
            initial_load_started: Mutex::new(false),
        }
    }

    /// Unfiltered load, issued only the first time the screen is shown.
    pub async fn load_initial(&self) -> SearchOutcome {
        {
            let mut started = self
                .initial_load_started
                .lock()
                .unwrap_or_else(|e| e.into_inner());
            if *started {
                return SearchOutcome::Skipped;
            }
            *started = true;
        }
        info!("Loading orders from {}", self.source.name());
        self.fetch(None).await
    }

    /// Search by order id and/or asset id. With both empty nothing is sent
    /// and the current rows stay on screen.
    pub async fn search(&self, order_id: &str, asset_id: &str) -> SearchOutcome {
        match build_query(order_id, asset_id) {
            Some(query) => self.fetch(Some(query)).await,
            None => {
                debug!("Order search skipped: no filters given");
                SearchOutcome::Skipped
            }
        }
    }

    /// Re-issue the unfiltered read regardless of earlier loads.
    pub async fn reload(&self) -> SearchOutcome {
        self.fetch(None).await
    }

    async fn fetch(&self, query: Option<String>) -> SearchOutcome {
        let seq = self.lock_board().begin_request();
        let result = self.source.fetch_orders(query.as_deref()).await;
        self.lock_board().apply_response(seq, result)
    }

    /// Snapshot of the displayed rows.
    pub fn rows(&self) -> Vec<OrderRecord> {
        self.lock_board().rows().to_vec()
    }

    pub fn table(&self) -> OrderTable {
        OrderTable::from_records(self.lock_board().rows())
    }

    pub fn screen(&self) -> OrderScreenView {
        let tab = OrderTab::default();
        OrderScreenView {
            heading: ORDER_SCREEN_HEADING.to_string(),
            active_tab: tab,
            search_visible: tab.has_search(),
            table: self.table(),
        }
    }

    fn lock_board(&self) -> std::sync::MutexGuard<'_, OrderBoard> {
        self.board.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: i64) -> OrderRecord {
        OrderRecord {
            id: id.into(),
            ..Default::default()
        }
    }

    #[test]
    fn query_composition() {
        assert_eq!(build_query("", ""), None);
        assert_eq!(build_query("   ", "\t"), None);
        assert_eq!(build_query("7", "").as_deref(), Some("id=7"));
        assert_eq!(build_query("", "AAPL").as_deref(), Some("asset_id=AAPL"));
        assert_eq!(build_query("7", "AAPL").as_deref(), Some("id=7&asset_id=AAPL"));
        assert_eq!(build_query(" 7 ", " AAPL ").as_deref(), Some("id=7&asset_id=AAPL"));
    }

    #[test]
    fn query_values_are_not_encoded() {
        assert_eq!(build_query("a b", "").as_deref(), Some("id=a b"));
    }

    #[test]
    fn newer_response_wins_over_late_older_one() {
        let mut board = OrderBoard::new();
        let first = board.begin_request();
        let second = board.begin_request();

        assert_eq!(
            board.apply_response(second, Ok(vec![order(2)])),
            SearchOutcome::Applied { rows: 1 }
        );
        assert_eq!(board.apply_response(first, Ok(vec![order(1), order(3)])), SearchOutcome::Stale);
        assert_eq!(board.rows(), &[order(2)]);
        assert_eq!(board.applied_seq(), second);
    }

    #[test]
    fn failure_keeps_previous_rows() {
        let mut board = OrderBoard::new();
        let seq = board.begin_request();
        board.apply_response(seq, Ok(vec![order(1)]));

        let seq = board.begin_request();
        let outcome = board.apply_response(seq, Err(CoreError::Network("refused".into())));
        assert_eq!(outcome, SearchOutcome::Failed);
        assert_eq!(board.rows(), &[order(1)]);
    }

    #[test]
    fn empty_response_replaces_rows() {
        let mut board = OrderBoard::new();
        let seq = board.begin_request();
        board.apply_response(seq, Ok(vec![order(1)]));
        let seq = board.begin_request();
        assert_eq!(
            board.apply_response(seq, Ok(vec![])),
            SearchOutcome::Applied { rows: 0 }
        );
        assert!(board.rows().is_empty());
    }
}
