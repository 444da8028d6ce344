use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::error::{DeliveryError, Error};
use crate::reading::Reading;

/// Delivers one reading and reports the HTTP status it got back.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_reading(&self, url: &str, reading: &Reading) -> Result<StatusCode, DeliveryError>;
}

/// `reqwest`-backed transport. The timeout covers the whole request.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_reading(&self, url: &str, reading: &Reading) -> Result<StatusCode, DeliveryError> {
        // body is never read, only the status matters
        let resp = self.client.post(url).json(reading).send().await?;
        Ok(resp.status())
    }
}
