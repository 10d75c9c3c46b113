pub mod delivery_mode;
pub mod error;
