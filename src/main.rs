mod clock;
mod coordinator;
mod form;
mod gateway;
mod models;
mod render;
mod view;

use std::io::{stderr, stdin, stdout, Write};
use std::process::exit;
use std::str::FromStr;

use anyhow::Result;
use rust_decimal::Decimal;
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::clock::SystemClock;
use crate::coordinator::SubmissionCoordinator;
use crate::form::FormController;
use crate::gateway::HttpTransactionGateway;
use crate::models::{FormSnapshot, TransactionType};
use crate::view::ConsoleView;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

#[tokio::main]
async fn main() -> Result<()> {
    //NOTE: Two optional positional arguments keep the kiosk deployable without
    //      a config file; clap would be overkill for this surface.
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        eprintln!("Usage: atm-kiosk-terminal [backend_url] [log_level:optional]");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let backend_url = args.get(1).map(String::as_str).unwrap_or(DEFAULT_BACKEND_URL);
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let gateway = HttpTransactionGateway::new(backend_url);
    let mut coordinator = SubmissionCoordinator::new(gateway, ConsoleView::new(), SystemClock);

    println!("ATM kiosk connected to {backend_url}");

    loop {
        let Some(pan) = prompt("PAN (blank to exit): ")? else { break };

        if pan.is_empty() {
            break;
        }

        let Some(account_number) = prompt("Account number: ")? else { break };
        let Some(pin) = prompt("PIN: ")? else { break };
        let Some(raw_type) = prompt("Type [WITHDRAWAL/BALANCE]: ")? else { break };

        let transaction_type = match TransactionType::from_str(&raw_type) {
            Ok(parsed) => parsed,
            Err(error) => {
                eprintln!("{error}");
                continue;
            }
        };

        FormController::on_type_changed(coordinator.view_mut(), transaction_type);

        let amount = if coordinator.view().amount_visible() {
            let Some(raw_amount) = prompt("Amount: ")? else { break };

            if raw_amount.is_empty() && coordinator.view().amount_required() {
                eprintln!("Amount is required for withdrawals");
                continue;
            }

            match Decimal::from_str(&raw_amount) {
                Ok(parsed) => Some(parsed),
                Err(error) => {
                    eprintln!("Invalid amount '{raw_amount}': {error}");
                    continue;
                }
            }
        } else {
            None
        };

        let snapshot = FormSnapshot {
            pan,
            account_number,
            pin,
            transaction_type,
            amount
        };

        // The submit event only dispatches while the control is enabled,
        // mirroring a disabled button on a real kiosk screen.
        if coordinator.view().submit_enabled() {
            coordinator.submit(snapshot).await;
        }

        debug!("Form ready again in state [{:?}]", coordinator.state());
    }

    Ok(())
}

/// Reads one trimmed line after printing a prompt; `None` means the session
/// ended at EOF.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}");
    stdout().flush()?;

    let mut line = String::new();

    if stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: The kiosk screen owns stdout, so logging goes to stderr.
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
