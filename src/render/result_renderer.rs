use chrono::{DateTime, Local};

use crate::models::Outcome;
use crate::render::{DisplayModel, OutcomeCategory};

const BUSINESS_FAILURE_HEADLINE: &str = "Transaction Failed";
const TRANSPORT_FAILURE_HEADLINE: &str = "Connection Error";

/// Maps a submission outcome into the display model the view renders.
pub struct ResultRenderer;

impl ResultRenderer {
    /// Pure mapping from outcome, elapsed time, and completion timestamp to
    /// a display model. Nothing is retained between calls.
    ///
    /// Line order is fixed: approvals list balance, amount (when the
    /// response carried one), transaction ID, time, elapsed, and code;
    /// declines list the processor's message before the timing lines and
    /// code; transport faults list the error and timing lines with no code,
    /// since none was received.
    pub fn render(outcome: &Outcome, elapsed_seconds: f64, timestamp: DateTime<Local>) -> DisplayModel {
        match outcome {
            Outcome::Success { message, balance, amount, transaction_id, code } => {
                let mut lines = vec![format!("Balance: ${balance:.2}")];

                if let Some(amount) = amount {
                    lines.push(format!("Amount: ${amount:.2}"));
                }

                lines.push(format!("Transaction ID: {}", transaction_id.as_deref().unwrap_or("N/A")));
                lines.push(Self::time_line(timestamp));
                lines.push(Self::elapsed_line(elapsed_seconds));
                lines.push(format!("Code: {code}"));

                DisplayModel {
                    category: OutcomeCategory::Success,
                    headline: message.clone(),
                    detail_lines: lines
                }
            }
            Outcome::BusinessFailure { code, message } => DisplayModel {
                category: OutcomeCategory::Failure,
                headline: BUSINESS_FAILURE_HEADLINE.to_string(),
                detail_lines: vec![
                    message.clone(),
                    Self::time_line(timestamp),
                    Self::elapsed_line(elapsed_seconds),
                    format!("Code: {code}")
                ]
            },
            Outcome::TransportFailure { message } => DisplayModel {
                category: OutcomeCategory::Failure,
                headline: TRANSPORT_FAILURE_HEADLINE.to_string(),
                detail_lines: vec![
                    format!("Error: {message}"),
                    Self::time_line(timestamp),
                    Self::elapsed_line(elapsed_seconds)
                ]
            }
        }
    }

    fn time_line(timestamp: DateTime<Local>) -> String {
        format!("Time: {}", timestamp.format("%H:%M:%S"))
    }

    fn elapsed_line(elapsed_seconds: f64) -> String {
        format!("Elapsed: {elapsed_seconds:.2}s")
    }
}
