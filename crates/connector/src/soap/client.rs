use crate::{
    error::ConnectorError,
    soap::{
        auth, envelope,
        transport::{HttpTransport, SoapTransport},
    },
};
use tracing::debug;

/// One configured connection to the mktows endpoint.
///
/// A client is built once per sync session and passed by reference to the
/// sources that need it; there is no process-wide instance. The session owns
/// its cursor state exclusively and is not designed for concurrent reentry.
pub struct SoapClient {
    user_id: String,
    encryption_key: String,
    transport: Box<dyn SoapTransport>,
}

impl SoapClient {
    pub fn new(endpoint: &str, user_id: &str, encryption_key: &str) -> Result<Self, ConnectorError> {
        Ok(SoapClient::with_transport(
            Box::new(HttpTransport::new(endpoint)?),
            user_id,
            encryption_key,
        ))
    }

    pub fn with_transport(
        transport: Box<dyn SoapTransport>,
        user_id: &str,
        encryption_key: &str,
    ) -> Self {
        SoapClient {
            user_id: user_id.to_string(),
            encryption_key: encryption_key.to_string(),
            transport,
        }
    }

    /// Issues one operation call.
    ///
    /// The authentication header is computed fresh inside every call; the
    /// service invalidates signatures after a short window and rejects reuse
    /// outright, so freshness is part of this method's contract.
    pub async fn call(&self, operation: &str, body: &str) -> Result<String, ConnectorError> {
        let header = auth::sign(&self.user_id, &self.encryption_key);
        let document = envelope::render(operation, &self.user_id, &header, body);
        debug!(operation, "issuing mktows call");
        self.transport.call(operation, &document).await
    }
}
