use serde::Deserialize;

use crate::error::MeasurementError;

/// One reading from the weather station.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Measurement {
    pub temperature: f32,
    pub humidity: f32,
    pub pressure: f32,
}

impl Measurement {
    pub fn new(temperature: f32, humidity: f32, pressure: f32) -> Self {
        Self {
            temperature,
            humidity,
            pressure,
        }
    }

    /// Returns the first non-finite field, in declaration order.
    pub fn check_finite(&self) -> Result<(), MeasurementError> {
        let fields = [
            ("temperature", self.temperature),
            ("humidity", self.humidity),
            ("pressure", self.pressure),
        ];
        match fields.into_iter().find(|(_, value)| !value.is_finite()) {
            Some((field, value)) => Err(MeasurementError::non_finite(field, value)),
            None => Ok(()),
        }
    }
}

/// What `WeatherData` does with NaN or infinite input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonFinitePolicy {
    #[default]
    Reject,
    PassThrough,
}

impl NonFinitePolicy {
    pub fn admit(self, measurement: &Measurement) -> Result<(), MeasurementError> {
        match self {
            NonFinitePolicy::Reject => measurement.check_finite(),
            NonFinitePolicy::PassThrough => Ok(()),
        }
    }
}
