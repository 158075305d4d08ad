//! Wires the capture loop to a classifier and the overlay reducer.

pub mod collecting;
pub mod config;
pub mod error;
pub mod observer;

pub use collecting::CollectingLoop;
pub use config::CollectConfig;
pub use error::ConfigError;
pub use observer::CollectingObserver;
