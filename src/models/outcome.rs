use rust_decimal::Decimal;

use crate::models::TransactionResponse;

/// Response code the processor uses for an approved transaction.
pub const APPROVAL_CODE: &str = "00";

/// Terminal result of one submission attempt.
///
/// All three variants are handled paths rather than program errors: a
/// decline and a transport fault both end in a rendered result and a
/// re-enabled form, never in a crash or a retry.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The processor approved the transaction.
    Success {
        message: String,
        balance: Decimal,
        amount: Option<Decimal>,
        transaction_id: Option<String>,
        code: String
    },
    /// The processor understood the request and declined it.
    BusinessFailure {
        code: String,
        message: String
    },
    /// The call never produced a readable response.
    TransportFailure {
        message: String
    }
}

impl Outcome {
    /// Classifies a fully-formed processor response by its response code.
    pub fn from_response(response: TransactionResponse) -> Self {
        if response.response_code == APPROVAL_CODE {
            Self::Success {
                message: response.response_message,
                balance: response.balance.unwrap_or(Decimal::ZERO),
                amount: response.amount,
                transaction_id: response.transaction_id,
                code: response.response_code
            }
        } else {
            Self::BusinessFailure {
                code: response.response_code,
                message: response.response_message
            }
        }
    }
}
