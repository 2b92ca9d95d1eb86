//! Shared foundation types.

pub mod error;
pub mod time;

pub use error::{CloseOutError, MarketError};
