use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::Result;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn run_kiosk(backend_url: &str, input: &[u8]) -> Result<String> {
    let binary_path = env!("CARGO_BIN_EXE_atm-kiosk-terminal");

    let mut child = Command::new(binary_path)
        .arg(backend_url)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    child.stdin.as_mut().expect("stdin piped").write_all(input)?;

    let output = child.wait_with_output()?;

    assert!(output.status.success());

    Ok(String::from_utf8(output.stdout)?)
}

#[tokio::test(flavor = "multi_thread")]
async fn test_kiosk_runs_balance_inquiry_end_to_end() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/atm/transaction"))
        .and(body_partial_json(json!({
            "type": "BALANCE",
            "amount": null,
            "terminalId": "ATM00001"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "responseCode": "00",
            "responseMessage": "OK",
            "balance": 120.50
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let stdout = tokio::task::spawn_blocking(move || {
        run_kiosk(&uri, b"4111111111111111\n1234567890\n1234\nBALANCE\n\n")
    }).await??;

    assert!(stdout.contains("Processing transaction..."));
    assert!(stdout.contains("[OK] OK"));
    assert!(stdout.contains("Balance: $120.50"));
    assert!(stdout.contains("Transaction ID: N/A"));

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_kiosk_runs_withdrawal_end_to_end() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/atm/transaction"))
        .and(body_partial_json(json!({
            "type": "WITHDRAWAL",
            "amount": 50.0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "responseCode": "00",
            "responseMessage": "Approved",
            "balance": 70.00,
            "amount": 50.00,
            "transactionId": "T1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let stdout = tokio::task::spawn_blocking(move || {
        run_kiosk(&uri, b"4111111111111111\n1234567890\n1234\nWITHDRAWAL\n50\n\n")
    }).await??;

    assert!(stdout.contains("[OK] Approved"));
    assert!(stdout.contains("Amount: $50.00"));
    assert!(stdout.contains("Transaction ID: T1"));

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_kiosk_renders_decline_and_stays_usable() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/atm/transaction"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "responseCode": "51",
            "responseMessage": "Insufficient Funds"
        })))
        .expect(2)
        .mount(&server)
        .await;

    // Two submissions in one session; the form must be re-enabled after the
    // first decline for the second to go out.
    let input = b"4111111111111111\n1234567890\n1234\nWITHDRAWAL\n500\n\
                  4111111111111111\n1234567890\n1234\nWITHDRAWAL\n500\n\n";

    let uri = server.uri();
    let stdout = tokio::task::spawn_blocking(move || run_kiosk(&uri, input)).await??;

    assert_eq!(stdout.matches("[FAILED] Transaction Failed").count(), 2);
    assert_eq!(stdout.matches("Code: 51").count(), 2);

    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_kiosk_reports_unreachable_processor_as_connection_error() -> Result<()> {
    // Claim a port, then free it so the connection is refused. A non-pooled
    // server is required here: pooled servers keep listening after drop.
    let server = MockServer::builder().start().await;
    let uri = server.uri();
    drop(server);

    let stdout = tokio::task::spawn_blocking(move || {
        run_kiosk(&uri, b"4111111111111111\n1234567890\n1234\nBALANCE\n\n")
    }).await??;

    assert!(stdout.contains("[FAILED] Connection Error"));
    assert!(!stdout.contains("Code:"));

    Ok(())
}
