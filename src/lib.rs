//! Khipu payment relay
//!
//! Creates payments with the Khipu API and accepts its signed webhook
//! notifications.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::payments;
pub use modules::webhooks;
