use reqwest::Client;
use tracing::debug;

use crate::gateway::{GatewayError, TransactionGateway};
use crate::models::{TransactionRequest, TransactionResponse};

/// Path the transaction processor exposes for submissions.
const TRANSACTION_PATH: &str = "/atm/transaction";

/// HTTP implementation of the transaction gateway.
pub struct HttpTransactionGateway {
    client: Client,
    endpoint: String
}

impl HttpTransactionGateway {
    /// Points the gateway at a processor base URL such as
    /// `http://localhost:8080`.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), TRANSACTION_PATH)
        }
    }
}

impl TransactionGateway for HttpTransactionGateway {
    async fn submit(&self, request: &TransactionRequest) -> Result<TransactionResponse, GatewayError> {
        debug!("POST {} [{:?}]", self.endpoint, request.transaction_type);

        let response = self.client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|error| GatewayError::transport(&error))?;

        //NOTE: The processor reports declines in-band through responseCode,
        //      so the HTTP status line is not consulted here.
        response.json::<TransactionResponse>()
            .await
            .map_err(|error| GatewayError::decode(&error))
    }
}
