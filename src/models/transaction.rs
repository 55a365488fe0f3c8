use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TransactionType;

/// Terminal identifier stamped on every request this kiosk issues.
pub const TERMINAL_ID: &str = "ATM00001";

/// Read-only copy of the form taken at submit time.
///
/// `amount` holds whatever the amount field currently contains, visible or
/// not; whether it reaches the wire is decided when the request is built.
#[derive(Debug, Clone)]
pub struct FormSnapshot {
    pub pan: String,
    pub account_number: String,
    pub pin: String,
    pub transaction_type: TransactionType,
    pub amount: Option<Decimal>
}

/// Wire request for one submission attempt.
///
/// Built fresh from a snapshot per attempt and discarded once the call
/// completes. `amount` is `Some` if and only if the type is a withdrawal;
/// balance inquiries always send `null`, even when the hidden field still
/// holds a stale value from an earlier withdrawal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub pan: String,
    pub account_number: String,
    pub pin: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: Option<Decimal>,
    pub terminal_id: String
}

impl TransactionRequest {
    /// Builds a request from the current form values.
    pub fn from_snapshot(snapshot: &FormSnapshot) -> Self {
        let amount = match snapshot.transaction_type {
            TransactionType::Withdrawal => snapshot.amount,
            TransactionType::Balance => None
        };

        Self {
            pan: snapshot.pan.clone(),
            account_number: snapshot.account_number.clone(),
            pin: snapshot.pin.clone(),
            transaction_type: snapshot.transaction_type,
            amount,
            terminal_id: TERMINAL_ID.to_string()
        }
    }
}

/// Wire response from the transaction processor.
///
/// Declines typically omit `balance`, `amount`, and `transactionId`, so all
/// three are optional on the way in even though an approval always carries
/// a balance.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub response_code: String,
    pub response_message: String,
    #[serde(default)]
    pub balance: Option<Decimal>,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub transaction_id: Option<String>
}
