mod errors;
mod outcome;
mod transaction;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use errors::UnknownTransactionType;
pub use outcome::{Outcome, APPROVAL_CODE};
pub use transaction::{FormSnapshot, TransactionRequest, TransactionResponse, TERMINAL_ID};

/// Transaction types this kiosk can submit.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Withdrawal,
    Balance
}

impl FromStr for TransactionType {
    type Err = UnknownTransactionType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_uppercase().as_str() {
            "WITHDRAWAL" => Ok(Self::Withdrawal),
            "BALANCE" => Ok(Self::Balance),
            other => Err(UnknownTransactionType(other.to_string()))
        }
    }
}
