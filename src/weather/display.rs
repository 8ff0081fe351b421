use std::sync::{Arc, Mutex};

use super::measurement::Measurement;
use super::observer::{DisplayElement, Observer, ObserverId};
use super::subject::WeatherData;

// ============================================================================
// Current conditions
// ============================================================================

/// Shows the latest temperature and humidity. Pressure is ignored.
#[derive(Debug, Clone)]
pub struct CurrentConditionsDisplay {
    id: ObserverId,
    temperature: f32,
    humidity: f32,
}

impl CurrentConditionsDisplay {
    pub fn new() -> Self {
        Self {
            id: ObserverId::new(),
            temperature: 0.0,
            humidity: 0.0,
        }
    }

    /// Creates a display and registers it with `weather`.
    pub fn register(weather: &mut WeatherData) -> Arc<Mutex<Self>> {
        let display = Arc::new(Mutex::new(Self::new()));
        weather.register_observer(display.clone());
        display
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn humidity(&self) -> f32 {
        self.humidity
    }

    /// e.g. `80.0 / 65%`
    pub fn summary(&self) -> String {
        format!("{:.1} / {:.0}%", self.temperature, self.humidity)
    }
}

impl Default for CurrentConditionsDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayElement for CurrentConditionsDisplay {
    fn display(&self) -> String {
        format!("Current conditions: {}", self.summary())
    }
}

impl Observer for CurrentConditionsDisplay {
    fn id(&self) -> ObserverId {
        self.id
    }

    fn update(&mut self, measurement: &Measurement) {
        self.temperature = measurement.temperature;
        self.humidity = measurement.humidity;
    }
}

// ============================================================================
// Statistics
// ============================================================================

/// Temperature extremes seen so far.
///
/// `average` is the midpoint of `min` and `max`, not the mean of every
/// reading. Keep it that way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureStats {
    pub min: f32,
    pub max: f32,
    pub average: f32,
}

impl TemperatureStats {
    pub fn seeded(temperature: f32) -> Self {
        Self {
            min: temperature,
            max: temperature,
            average: temperature,
        }
    }

    pub fn record(&mut self, temperature: f32) {
        self.min = self.min.min(temperature);
        self.max = self.max.max(temperature);
        // min + max can exceed f32::MAX.
        self.average = ((f64::from(self.min) + f64::from(self.max)) / 2.0) as f32;
    }
}

#[derive(Debug, Clone)]
pub struct StatisticsDisplay {
    id: ObserverId,
    stats: Option<TemperatureStats>,
}

impl StatisticsDisplay {
    /// `seed` is the temperature the statistics start from. With `None`
    /// the first update seeds them.
    pub fn new(seed: Option<f32>) -> Self {
        Self {
            id: ObserverId::new(),
            stats: seed.map(TemperatureStats::seeded),
        }
    }

    /// Creates a display seeded from the subject's current reading, if it
    /// has one, and registers it.
    pub fn register(weather: &mut WeatherData) -> Arc<Mutex<Self>> {
        let seed = (weather.readings() > 0).then(|| weather.measurement().temperature);
        let display = Arc::new(Mutex::new(Self::new(seed)));
        weather.register_observer(display.clone());
        display
    }

    pub fn stats(&self) -> Option<TemperatureStats> {
        self.stats
    }
}

impl DisplayElement for StatisticsDisplay {
    fn display(&self) -> String {
        match self.stats {
            Some(stats) => format!(
                "Minimum temperature: {:.1} F degrees\n\
                 Average temperature: {:.1} F degrees\n\
                 Max temperature: {:.1} F degrees",
                stats.min, stats.average, stats.max
            ),
            None => "No temperature readings yet".to_string(),
        }
    }
}

impl Observer for StatisticsDisplay {
    fn id(&self) -> ObserverId {
        self.id
    }

    fn update(&mut self, measurement: &Measurement) {
        match self.stats.as_mut() {
            Some(stats) => stats.record(measurement.temperature),
            None => self.stats = Some(TemperatureStats::seeded(measurement.temperature)),
        }
    }
}
