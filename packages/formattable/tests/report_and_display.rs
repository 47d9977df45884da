//! Display, source chain and serialized report of constructed errors

use formattable_error::{err, logging, Arg, ErrorKind, ErrorReport, FormattableError};
use std::error::Error as _;

fn layered() -> FormattableError {
    let io = Arg::error(std::io::Error::other("connection reset"));
    let fetch = err!(ErrorKind::Io, "fetch of %s failed", "/v1/keys", io);
    err!(ErrorKind::Internal, "key rotation aborted", fetch)
}

#[test]
fn test_display_uses_message() {
    let e = err!(ErrorKind::Validation, "Test %s.", "message");
    assert_eq!(e.to_string(), "Test message.");
}

#[test]
fn test_display_falls_back_to_kind() {
    assert_eq!(err!(ErrorKind::NotFound).to_string(), "Not found");
    assert_eq!(err!(ErrorKind::Generic).to_string(), "Error");
}

#[test]
fn test_alternate_display_prints_chain() {
    logging::init_test();

    let e = layered();
    assert_eq!(e.to_string(), "key rotation aborted");
    assert_eq!(
        format!("{e:#}"),
        "key rotation aborted\nCaused by: fetch of /v1/keys failed\nCaused by: connection reset"
    );
    logging::log_error(&e);
}

#[test]
fn test_source_follows_cause() {
    let e = layered();

    let source = e.source().unwrap();
    assert_eq!(source.to_string(), "fetch of /v1/keys failed");
    assert_eq!(source.source().unwrap().to_string(), "connection reset");
    assert_eq!(e.root_cause().to_string(), "connection reset");

    let messages: Vec<String> = e.chain().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        ["key rotation aborted", "fetch of /v1/keys failed", "connection reset"]
    );
}

#[test]
fn test_root_cause_without_cause_is_self() {
    let e = err!(ErrorKind::Generic, "alone");
    assert_eq!(e.root_cause().to_string(), "alone");
    assert_eq!(e.chain().count(), 1);
}

#[test]
fn test_report_contents() {
    let e = layered();
    let report = e.report();

    assert_eq!(report.kind, ErrorKind::Internal);
    assert_eq!(report.message, "key rotation aborted");
    assert_eq!(report.code, 0);
    assert!(report.location.contains("report_and_display.rs"));
    assert_eq!(
        report.causes,
        ["fetch of /v1/keys failed", "connection reset"]
    );
}

#[test]
fn test_report_serializes() {
    let e = err!(ErrorKind::Other("Quota".to_string()), "limit %d reached", 10);
    let report = ErrorReport::from(&e);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["message"], "limit 10 reached");
    assert_eq!(json["code"], 0);
    assert_eq!(json["kind"]["Other"], "Quota");
    assert!(json.get("causes").is_none());

    let parsed: ErrorReport = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, report);
}

#[cfg(feature = "full-backtrace")]
#[test]
fn test_backtrace_captured() {
    let e = err!(ErrorKind::Internal, "with trace");
    assert!(!e.backtrace().frames().is_empty());
}

#[test]
fn test_error_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<FormattableError>();

    let e = layered();
    let handle = std::thread::spawn(move || e.message().to_string());
    assert_eq!(handle.join().unwrap(), "key rotation aborted");
}
