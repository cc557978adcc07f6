pub mod http;
pub mod traits;

// REST implementations
pub mod rest_orders;
pub mod rest_users;
