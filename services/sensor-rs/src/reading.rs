use rand::Rng;
use serde::Serialize;

use crate::clock::Clock;

pub const SENSOR_IDS: [&str; 3] = ["sensor-1", "sensor-2", "sensor-3"];

/// Sensing modality of every simulated reading.
pub const SENSOR_TYPE: &str = "ultrasonic";

/// Distances in cm. Smaller means a car is close to the sensor.
pub const DISTANCES_CM: [u32; 5] = [20, 25, 35, 60, 120];

pub const MQ135_MIN: f64 = 100.0;
pub const MQ135_MAX: f64 = 450.0;

/// One simulated sensor observation, built fresh for every send.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub sensor_id: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub distance: u32,
    /// Approximate MQ-135 air quality number.
    pub mq135: f64,
    pub timestamp: i64,
}

impl Reading {
    pub fn generate<R: Rng>(rng: &mut R, clock: &dyn Clock) -> Self {
        let sensor_id = SENSOR_IDS[rng.random_range(0..SENSOR_IDS.len())];
        let distance = DISTANCES_CM[rng.random_range(0..DISTANCES_CM.len())];

        Self {
            sensor_id: sensor_id.to_string(),
            kind: SENSOR_TYPE,
            distance,
            mq135: rng.random_range(MQ135_MIN..=MQ135_MAX),
            timestamp: clock.now_millis(),
        }
    }
}
