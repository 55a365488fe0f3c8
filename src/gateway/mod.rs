mod errors;
mod http_gateway;

use crate::models::{TransactionRequest, TransactionResponse};

pub use errors::GatewayError;
pub use http_gateway::HttpTransactionGateway;

/// Transport boundary for the one outbound call a submission makes.
pub trait TransactionGateway {
    /// Delivers the request and decodes the processor's response.
    ///
    /// # Errors
    /// Returns `GatewayError` when the request cannot be delivered or the
    /// response body cannot be decoded. Declines are not errors; they come
    /// back as a normal response carrying a non-approval code.
    async fn submit(&self, request: &TransactionRequest) -> Result<TransactionResponse, GatewayError>;
}
