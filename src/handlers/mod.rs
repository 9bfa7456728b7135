//! HTTP handlers for the contract service.

pub mod app;
pub mod contract;
pub mod health;

pub use app::index;
pub use contract::generate_contract;
pub use health::health_check;
