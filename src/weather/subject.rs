use tracing::{debug, trace, warn};

use super::measurement::{Measurement, NonFinitePolicy};
use super::observer::{
    lock_observer, DisplayElement, Notification, Observer, ObserverId, SharedObserver,
};
use crate::error::MeasurementError;

struct Registration {
    id: ObserverId,
    observer: SharedObserver,
}

/// The subject: holds the latest measurement and notifies observers in
/// registration order whenever it changes.
pub struct WeatherData {
    observers: Vec<Registration>,
    measurement: Measurement,
    readings: u64,
    policy: NonFinitePolicy,
}

impl WeatherData {
    pub fn new() -> Self {
        Self::with_policy(NonFinitePolicy::default())
    }

    pub fn with_policy(policy: NonFinitePolicy) -> Self {
        Self {
            observers: Vec::new(),
            measurement: Measurement::default(),
            readings: 0,
            policy,
        }
    }

    /// Appends an observer. Registering the same observer twice notifies it twice.
    pub fn register_observer(&mut self, observer: SharedObserver) -> ObserverId {
        let id = lock_observer(&observer).id();
        debug!(observer = %id, position = self.observers.len(), "registering observer");
        self.observers.push(Registration { id, observer });
        id
    }

    /// Removes the registrant with this id. Unknown ids are ignored.
    pub fn remove_observer(&mut self, id: &ObserverId) -> bool {
        match self.observers.iter().position(|r| r.id == *id) {
            Some(index) => {
                self.observers.remove(index);
                debug!(observer = %id, "removed observer");
                true
            }
            None => {
                debug!(observer = %id, "remove ignored, observer not registered");
                false
            }
        }
    }

    pub fn is_registered(&self, id: &ObserverId) -> bool {
        self.observers.iter().any(|r| r.id == *id)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn measurement(&self) -> Measurement {
        self.measurement
    }

    /// Number of measurements accepted since construction.
    pub fn readings(&self) -> u64 {
        self.readings
    }

    pub fn policy(&self) -> NonFinitePolicy {
        self.policy
    }

    /// Replaces the measurement and notifies every observer.
    ///
    /// A rejected measurement leaves the subject and its observers untouched.
    pub fn set_measurements(
        &mut self,
        temperature: f32,
        humidity: f32,
        pressure: f32,
    ) -> Result<Vec<Notification>, MeasurementError> {
        let measurement = Measurement::new(temperature, humidity, pressure);
        if let Err(err) = self.policy.admit(&measurement) {
            warn!(%err, "measurement rejected");
            return Err(err);
        }

        self.measurement = measurement;
        self.readings += 1;
        Ok(self.measurements_changed())
    }

    fn measurements_changed(&self) -> Vec<Notification> {
        self.notify_observers()
    }

    /// Re-broadcasts the current measurement without changing it.
    pub fn notify_observers(&self) -> Vec<Notification> {
        self.observers
            .iter()
            .map(|registration| {
                let mut observer = lock_observer(&registration.observer);
                observer.update(&self.measurement);
                trace!(observer = %registration.id, "notified observer");
                Notification {
                    observer: registration.id,
                    rendered: observer.display(),
                }
            })
            .collect()
    }
}

impl Default for WeatherData {
    fn default() -> Self {
        Self::new()
    }
}
