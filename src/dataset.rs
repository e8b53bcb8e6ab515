use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;
use rand::Rng;

use crate::signals;

/// Timestamp layout shared by the CSV writer and the console preview.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The three simulated sensors, in dataset order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sensor {
    Temperature,
    Illuminance,
    Occupancy,
}

impl Sensor {
    pub const ALL: [Sensor; 3] = [Sensor::Temperature, Sensor::Illuminance, Sensor::Occupancy];

    pub const fn id(self) -> &'static str {
        match self {
            Sensor::Temperature => "sensor_temp_01",
            Sensor::Illuminance => "sensor_luz_01",
            Sensor::Occupancy => "sensor_ocup_01",
        }
    }

    fn sample(self, ts: NaiveDateTime, rng: &mut impl Rng) -> f64 {
        match self {
            Sensor::Temperature => signals::temperature(ts, rng),
            Sensor::Illuminance => signals::illuminance(ts, rng),
            Sensor::Occupancy => signals::occupancy(ts, rng),
        }
    }
}

/// One observation from one simulated sensor. Immutable once generated.
#[derive(Clone, Debug, PartialEq)]
pub struct Reading {
    pub timestamp: NaiveDateTime,
    pub sensor: Sensor,
    pub value: f64,
}

impl Display for Reading {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}  {:<16} {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.sensor.id(),
            self.value
        )
    }
}

/// One tagged series per sensor over the shared timeline, concatenated in
/// [`Sensor::ALL`] order. Series are not interleaved, and RNG draws are
/// series-major: the whole temperature series is sampled before illuminance.
pub fn assemble(timestamps: &[NaiveDateTime], rng: &mut impl Rng) -> Vec<Reading> {
    let mut readings = Vec::with_capacity(timestamps.len() * Sensor::ALL.len());
    for sensor in Sensor::ALL {
        readings.extend(timestamps.iter().map(|&timestamp| Reading {
            timestamp,
            sensor,
            value: sensor.sample(timestamp, rng),
        }));
    }
    readings
}
