//! Observer pattern: a weather station and its displays.

mod display;
mod measurement;
mod observer;
mod subject;

pub use display::{CurrentConditionsDisplay, StatisticsDisplay, TemperatureStats};
pub use measurement::{Measurement, NonFinitePolicy};
pub use observer::{
    lock_observer, DisplayElement, Notification, Observer, ObserverId, SharedObserver,
};
pub use subject::WeatherData;
