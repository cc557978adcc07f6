// ═══════════════════════════════════════════════════════════════════
// Provider Tests — REST URL building, trait objects, network failures
// ═══════════════════════════════════════════════════════════════════

use async_trait::async_trait;

use portfolio_dashboard_core::errors::CoreError;
use portfolio_dashboard_core::models::order::OrderRecord;
use portfolio_dashboard_core::models::value::FieldValue;
use portfolio_dashboard_core::models::settings::Settings;
use portfolio_dashboard_core::models::user::UserRecord;
use portfolio_dashboard_core::providers::rest_orders::RestOrderSource;
use portfolio_dashboard_core::providers::rest_users::RestUserDirectory;
use portfolio_dashboard_core::providers::traits::{OrderSource, UserDirectory};

// ═══════════════════════════════════════════════════════════════════
// Test Helpers — Mock Sources
// ═══════════════════════════════════════════════════════════════════

struct StaticOrders(Vec<OrderRecord>);

#[async_trait]
impl OrderSource for StaticOrders {
    fn name(&self) -> &str {
        "Static"
    }

    async fn fetch_orders(&self, _query: Option<&str>) -> Result<Vec<OrderRecord>, CoreError> {
        Ok(self.0.clone())
    }
}

struct EmptyDirectory;

#[async_trait]
impl UserDirectory for EmptyDirectory {
    fn name(&self) -> &str {
        "Empty"
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<UserRecord>, CoreError> {
        Ok(None)
    }

    async fn create_user(&self, user: &UserRecord) -> Result<UserRecord, CoreError> {
        Ok(user.clone())
    }
}

fn settings(base: &str) -> Settings {
    Settings {
        api_base_url: base.to_string(),
        ..Settings::default()
    }
}

// ═══════════════════════════════════════════════════════════════════
// RestOrderSource
// ═══════════════════════════════════════════════════════════════════

mod rest_orders {
    use super::*;

    #[test]
    fn unfiltered_url() {
        let source = RestOrderSource::new(&Settings::default());
        assert_eq!(source.orders_url(None), "http://localhost:3001/orders");
        assert_eq!(source.orders_url(Some("")), "http://localhost:3001/orders");
    }

    #[test]
    fn query_is_appended_verbatim() {
        let source = RestOrderSource::new(&Settings::default());
        assert_eq!(
            source.orders_url(Some("id=7")),
            "http://localhost:3001/orders?id=7"
        );
        assert_eq!(
            source.orders_url(Some("asset_id=AAPL")),
            "http://localhost:3001/orders?asset_id=AAPL"
        );
        assert_eq!(
            source.orders_url(Some("id=7&asset_id=AAPL")),
            "http://localhost:3001/orders?id=7&asset_id=AAPL"
        );
    }

    #[test]
    fn trailing_slash_in_base_url() {
        let source = RestOrderSource::new(&settings("http://api.local:8080/"));
        assert_eq!(source.orders_url(None), "http://api.local:8080/orders");
    }

    #[test]
    fn name() {
        assert_eq!(RestOrderSource::new(&Settings::default()).name(), "OrderService");
    }

    #[tokio::test]
    async fn unreachable_backend_is_network_error() {
        // Port 9 (discard) is not listening on test machines.
        let source = RestOrderSource::new(&settings("http://127.0.0.1:9"));
        let result = source.fetch_orders(Some("id=1")).await;
        assert!(matches!(result, Err(CoreError::Network(_))));
    }

    #[tokio::test]
    async fn network_error_redacts_query() {
        let source = RestOrderSource::new(&settings("http://127.0.0.1:9"));
        let Err(CoreError::Network(msg)) = source.fetch_orders(Some("id=secret-order")).await else {
            panic!("expected a network error");
        };
        assert!(!msg.contains("secret-order"));
    }
}

// ═══════════════════════════════════════════════════════════════════
// RestUserDirectory
// ═══════════════════════════════════════════════════════════════════

mod rest_users {
    use super::*;

    #[test]
    fn users_url() {
        let dir = RestUserDirectory::new(&Settings::default());
        assert_eq!(dir.users_url(), "http://localhost:3001/users");
        assert_eq!(dir.name(), "UserDirectory");
    }

    #[tokio::test]
    async fn unreachable_backend_fails_lookup() {
        let dir = RestUserDirectory::new(&settings("http://127.0.0.1:9"));
        let result = dir.find_by_email("a@x.com").await;
        assert!(matches!(result, Err(CoreError::Network(_))));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Trait objects
// ═══════════════════════════════════════════════════════════════════

mod trait_objects {
    use super::*;

    #[tokio::test]
    async fn boxed_order_source() {
        let order = OrderRecord {
            id: FieldValue::Integer(1),
            ..Default::default()
        };
        let source: Box<dyn OrderSource> = Box::new(StaticOrders(vec![order.clone()]));
        assert_eq!(source.fetch_orders(None).await.unwrap(), vec![order]);
    }

    #[tokio::test]
    async fn boxed_user_directory() {
        let dir: Box<dyn UserDirectory> = Box::new(EmptyDirectory);
        assert!(dir.find_by_email("nobody@x.com").await.unwrap().is_none());
    }

    #[test]
    fn sources_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestOrderSource>();
        assert_send_sync::<RestUserDirectory>();
        assert_send_sync::<Box<dyn OrderSource>>();
        assert_send_sync::<Box<dyn UserDirectory>>();
    }
}
