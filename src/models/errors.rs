use thiserror::Error;

#[derive(Debug, Error)]
#[error("Unknown transaction type '{0}', expected WITHDRAWAL or BALANCE")]
pub struct UnknownTransactionType(pub String);
