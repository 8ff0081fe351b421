//! # Pattern Playground
//!
//! Two small behavioral patterns, each in its own module:
//!
//! ## Observer Pattern (`weather`)
//! - `WeatherData` is the subject holding the latest `Measurement`
//! - `CurrentConditionsDisplay` and `StatisticsDisplay` are observers
//! - Observers are identified by an `ObserverId` token, not by their state
//!
//! ## Strategy Pattern (`duck`)
//! - `Duck` delegates flying and quacking to boxed behavior objects
//! - Behaviors can be swapped at runtime
//! - `mallard_duck()` / `model_duck()` are preset factories
//!
//! The library never prints. Rendered display text is returned to the
//! caller; the demo binaries route it to the terminal:
//!
//! ```bash
//! cargo run --bin weather_station
//! cargo run --bin duck_simulator -- playground.toml
//! ```

pub mod config;
pub mod duck;
pub mod error;
pub mod logging;
pub mod weather;

pub use config::PlaygroundConfig;
pub use error::{ConfigError, MeasurementError};
