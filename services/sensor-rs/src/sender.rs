use std::fmt;

use rand::Rng;
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::error::DeliveryError;
use crate::reading::Reading;
use crate::transport::Transport;

/// Result of a single send attempt.
///
/// Any HTTP response counts as delivered, whatever its status.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Delivered { reading: Reading, status: StatusCode },
    Failed { reading: Reading, error: DeliveryError },
}

impl Outcome {
    pub fn reading(&self) -> &Reading {
        match self {
            Outcome::Delivered { reading, .. } | Outcome::Failed { reading, .. } => reading,
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, Outcome::Delivered { .. })
    }
}

/// Console line for the outcome.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Delivered { reading, status } => {
                let payload = serde_json::to_string(reading).map_err(|_| fmt::Error)?;
                write!(f, "sent {} -> {}", payload, status.as_u16())
            }
            Outcome::Failed { error, .. } => write!(f, "error: {}", error),
        }
    }
}

/// Builds readings and posts them to one endpoint.
pub struct Sender<T, C = SystemClock> {
    transport: T,
    clock: C,
    endpoint: String,
}

impl<T: Transport, C: Clock> Sender<T, C> {
    pub fn new(transport: T, clock: C, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            clock,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Generates one reading and makes one delivery attempt.
    ///
    /// Never fails: delivery errors are printed and returned as [`Outcome::Failed`].
    pub async fn send_sample(&self) -> Outcome {
        let reading = Reading::generate(&mut rand::rng(), &self.clock);
        self.deliver(reading).await
    }

    /// Same as [`Sender::send_sample`] with a caller-supplied random source.
    pub async fn send_sample_with<R: Rng>(&self, rng: &mut R) -> Outcome {
        let reading = Reading::generate(rng, &self.clock);
        self.deliver(reading).await
    }

    async fn deliver(&self, reading: Reading) -> Outcome {
        let outcome = match self.transport.post_reading(&self.endpoint, &reading).await {
            Ok(status) => {
                debug!(sensor_id = %reading.sensor_id, status = status.as_u16(), "reading sent");
                Outcome::Delivered { reading, status }
            }
            Err(error) => {
                warn!(endpoint = %self.endpoint, %error, "delivery failed");
                Outcome::Failed { reading, error }
            }
        };
        println!("{}", outcome);
        outcome
    }
}
