use crate::error::ConnectorError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Connection-establishment budget the service documents for its clients.
const OPEN_TIMEOUT: Duration = Duration::from_secs(90);
/// Response-read budget.
const READ_TIMEOUT: Duration = Duration::from_secs(300);

/// Seam between the protocol layer and the network.
///
/// Implementations exchange raw envelope documents; fault handling and
/// extraction happen above this seam so tests can script responses without
/// a socket.
#[async_trait]
pub trait SoapTransport: Send + Sync {
    /// Posts one envelope and returns the raw response body.
    ///
    /// A fault document is a successful call at this level; only transport
    /// problems are errors here.
    async fn call(&self, action: &str, envelope: &str) -> Result<String, ConnectorError>;
}

/// reqwest-backed transport used outside tests.
pub struct HttpTransport {
    endpoint: String,
    client: Client,
}

impl HttpTransport {
    pub fn new(endpoint: &str) -> Result<Self, ConnectorError> {
        let client = Client::builder()
            .connect_timeout(OPEN_TIMEOUT)
            .read_timeout(READ_TIMEOUT)
            .build()
            .map_err(|err| ConnectorError::TransportFailure(err.to_string()))?;

        Ok(HttpTransport {
            endpoint: endpoint.to_string(),
            client,
        })
    }
}

#[async_trait]
impl SoapTransport for HttpTransport {
    async fn call(&self, action: &str, envelope: &str) -> Result<String, ConnectorError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "text/xml; charset=utf-8")
            .header("SOAPAction", action)
            .body(envelope.to_string())
            .send()
            .await
            .map_err(classify)?;

        // Fault responses arrive with an error status but a usable body;
        // the document layer classifies them.
        response.text().await.map_err(classify)
    }
}

fn classify(err: reqwest::Error) -> ConnectorError {
    if err.is_timeout() {
        ConnectorError::TransportTimeout(err.to_string())
    } else {
        ConnectorError::TransportFailure(err.to_string())
    }
}
