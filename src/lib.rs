//! delivery-mode – JMS delivery modes and the header codes they map to.
//!
//! This crate exports
//!  * `core`     – the `DeliveryMode` enum and its conversion errors
//!  * `protocol` – raw `JMSDeliveryMode` header values
//!  * `config`   – TOML-driven default delivery mode
//!  * `logging`  – tracing subscriber setup for the binary

// ───────────────────────────────────────────────────────────
// Public modules
// ───────────────────────────────────────────────────────────
pub mod config;
pub mod core;
pub mod logging;
pub mod protocol;

// ───────────────────────────────────────────────────────────
// Re-exports
// ───────────────────────────────────────────────────────────
pub use config::{load_config, resolve_config, Config};
pub use crate::core::delivery_mode::DeliveryMode;
pub use crate::core::error::DeliveryModeError;
