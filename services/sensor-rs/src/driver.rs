use tokio::time::{sleep, Duration};
use tracing::info;

use crate::clock::Clock;
use crate::sender::Sender;
use crate::transport::Transport;

/// Runs send → sleep, either forever or for a fixed number of iterations.
pub struct Driver<T, C> {
    sender: Sender<T, C>,
    interval: Duration,
    iterations: Option<u64>,
}

impl<T: Transport, C: Clock> Driver<T, C> {
    pub fn new(sender: Sender<T, C>, interval: Duration, iterations: Option<u64>) -> Self {
        Self {
            sender,
            interval,
            iterations,
        }
    }

    /// Returns the number of completed iterations. Without a limit it never returns.
    pub async fn run(&self) -> u64 {
        let mut completed = 0u64;
        loop {
            if self.iterations.is_some_and(|limit| completed >= limit) {
                info!(completed, "iteration limit reached");
                return completed;
            }
            self.sender.send_sample().await;
            completed += 1;
            sleep(self.interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SystemClock;
    use crate::error::DeliveryError;
    use crate::reading::Reading;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::sync::Mutex;
    use tokio::time::Instant;

    /// Records when each request started.
    #[derive(Default)]
    struct Recorder {
        starts: Mutex<Vec<Instant>>,
        fail: bool,
    }

    #[async_trait]
    impl Transport for Recorder {
        async fn post_reading(&self, _url: &str, _reading: &Reading) -> Result<StatusCode, DeliveryError> {
            self.starts.lock().unwrap().push(Instant::now());
            if self.fail {
                Err(DeliveryError::Timeout("deadline elapsed".to_string()))
            } else {
                Ok(StatusCode::OK)
            }
        }
    }

    fn driver(transport: Recorder, iterations: Option<u64>) -> Driver<Recorder, SystemClock> {
        let sender = Sender::new(transport, SystemClock, "http://localhost:4000/api/sensor/road-1");
        Driver::new(sender, Duration::from_millis(1500), iterations)
    }

    #[tokio::test(start_paused = true)]
    async fn iterations_are_paced_by_interval() {
        let driver = driver(Recorder::default(), Some(4));
        let begin = Instant::now();

        assert_eq!(driver.run().await, 4);

        let elapsed = begin.elapsed();
        assert!(elapsed >= Duration::from_millis(6000) && elapsed < Duration::from_millis(6010), "{elapsed:?}");
        let starts = driver.sender.transport().starts.lock().unwrap().clone();
        assert_eq!(starts.len(), 4);
        for pair in starts.windows(2) {
            let gap = pair[1] - pair[0];
            assert!(gap >= Duration::from_millis(1500) && gap < Duration::from_millis(1505), "{gap:?}");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn failures_do_not_stop_the_loop() {
        let recorder = Recorder {
            fail: true,
            ..Recorder::default()
        };
        let driver = driver(recorder, Some(3));

        assert_eq!(driver.run().await, 3);
        assert_eq!(driver.sender.transport().starts.lock().unwrap().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_iterations_sends_nothing() {
        let driver = driver(Recorder::default(), Some(0));
        assert_eq!(driver.run().await, 0);
        assert!(driver.sender.transport().starts.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn unlimited_keeps_going() {
        let driver = driver(Recorder::default(), None);
        let ran = tokio::time::timeout(Duration::from_millis(30_700), driver.run()).await;

        assert!(ran.is_err());
        // sends at 0s, 1.5s, ..., 30s
        assert_eq!(driver.sender.transport().starts.lock().unwrap().len(), 21);
    }
}
