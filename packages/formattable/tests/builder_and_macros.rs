//! Tests for the typed builder, the construction macros and the extension traits

use formattable_error::{
    bail, ensure, err, Arg, ErrorKind, FormatError, FormattableError, OptionExt, ResultExt,
    SharedError,
};
use std::sync::Arc;

#[test]
fn test_builder_empty() {
    let err = FormattableError::builder(ErrorKind::Generic).build();

    assert_eq!(err.message(), "");
    assert_eq!(err.code(), 0);
    assert!(err.cause().is_none());
}

#[test]
fn test_builder_message_and_values() {
    let err = FormattableError::builder(ErrorKind::Validation)
        .message("field %s must be at most %d characters")
        .arg("name")
        .arg(32)
        .build();

    assert_eq!(err.message(), "field name must be at most 32 characters");
    assert_eq!(err.kind(), &ErrorKind::Validation);
}

#[test]
fn test_builder_args_iterator() {
    let err = FormattableError::builder(ErrorKind::Generic)
        .message("%s/%s/%s")
        .args(["a", "b", "c"])
        .build();

    assert_eq!(err.message(), "a/b/c");
}

#[test]
fn test_builder_lone_message_not_formatted() {
    let err = FormattableError::builder(ErrorKind::Generic)
        .message("disk 100% full")
        .cause(std::io::Error::other("ENOSPC"))
        .build();

    assert_eq!(err.message(), "disk 100% full");
    assert_eq!(err.cause().unwrap().to_string(), "ENOSPC");
}

#[test]
fn test_builder_never_sniffs_cause_from_values() {
    let io: SharedError = Arc::new(std::io::Error::other("socket closed"));
    let err = FormattableError::builder(ErrorKind::Generic)
        .message("request failed: %s")
        .arg(Arg::from(&io))
        .build();

    assert!(err.cause().is_none());
    assert_eq!(err.message(), "request failed: socket closed");
}

#[test]
fn test_builder_cause_arc_keeps_reference() {
    let io: SharedError = Arc::new(std::io::Error::other("socket closed"));
    let err = FormattableError::builder(ErrorKind::Io)
        .message("X %s")
        .arg("Y")
        .cause_arc(Arc::clone(&io))
        .build();

    assert_eq!(err.message(), "X Y");
    assert!(Arc::ptr_eq(err.cause().unwrap(), &io));
}

#[test]
fn test_builder_try_build() {
    let result = FormattableError::builder(ErrorKind::Generic)
        .message("%2$s")
        .arg("only one")
        .try_build();

    assert_eq!(
        result.unwrap_err(),
        FormatError::MissingArgument { needed: 2, given: 1 }
    );

    let lenient = FormattableError::builder(ErrorKind::Generic)
        .message("%2$s")
        .arg("only one")
        .build();
    assert_eq!(lenient.message(), "%2$s");
}

#[test]
fn test_err_macro_forms() {
    let e = err!(ErrorKind::Generic);
    assert_eq!(e.message(), "");
    assert!(e.cause().is_none());

    let e = err!(ErrorKind::Generic, "X");
    assert_eq!(e.message(), "X");

    let e = err!(ErrorKind::Generic, "X %s", "Y");
    assert_eq!(e.message(), "X Y");

    let previous = Arg::error(std::io::Error::other("root"));
    let e = err!(ErrorKind::Generic, previous);
    assert_eq!(e.message(), "");
    assert_eq!(e.cause().unwrap().to_string(), "root");

    let previous = Arg::error(std::io::Error::other("root"));
    let e = err!(ErrorKind::Generic, "X", previous);
    assert_eq!(e.message(), "X");
    assert!(e.cause().is_some());

    let previous = Arg::error(std::io::Error::other("root"));
    let e = err!(ErrorKind::Generic, "X %s", "Y", previous,);
    assert_eq!(e.message(), "X Y");
    assert!(e.cause().is_some());
}

#[test]
fn test_err_macro_mixed_values() {
    let e = err!(
        ErrorKind::Timeout,
        "%s timed out after %.1f s (%d retries, fatal: %s)",
        "upload",
        2.5,
        3_u8,
        true
    );
    assert_eq!(e.message(), "upload timed out after 2.5 s (3 retries, fatal: 1)");
}

fn check_port(port: u32) -> formattable_error::Result<u32> {
    ensure!(port > 0, ErrorKind::Validation, "port must be positive, got %d", port);
    if port > 65535 {
        bail!(ErrorKind::Validation, "port %d out of range", port);
    }
    Ok(port)
}

#[test]
fn test_bail_and_ensure() {
    assert_eq!(check_port(8080).unwrap(), 8080);

    let e = check_port(0).unwrap_err();
    assert_eq!(e.message(), "port must be positive, got 0");

    let e = check_port(70000).unwrap_err();
    assert_eq!(e.message(), "port 70000 out of range");
    assert_eq!(e.kind(), &ErrorKind::Validation);
}

#[test]
fn test_result_ext_chains_original_error() {
    let parsed: Result<u16, _> = "http".parse::<u16>();
    let e = parsed
        .or_raise(
            ErrorKind::Configuration,
            [Arg::from("invalid port %s"), Arg::from("http")],
        )
        .unwrap_err();

    assert_eq!(e.message(), "invalid port http");
    assert_eq!(
        e.cause().unwrap().to_string(),
        "invalid digit found in string"
    );
}

#[test]
fn test_result_ext_passes_ok_through() {
    let value = "80"
        .parse::<u16>()
        .or_raise_with(ErrorKind::Configuration, || -> Vec<Arg> {
            panic!("arguments must not be built on success")
        })
        .unwrap();
    assert_eq!(value, 80);
}

#[test]
fn test_result_ext_lazy_arguments() {
    let e = std::fs::read_to_string("/definitely/not/here.toml")
        .or_raise_with(ErrorKind::Io, || {
            vec![Arg::from("cannot read %s"), Arg::from("here.toml")]
        })
        .unwrap_err();

    assert_eq!(e.message(), "cannot read here.toml");
    assert!(e.cause().is_some());
}

#[test]
fn test_option_ext() {
    let missing: Option<&str> = None;
    let e = missing
        .or_raise(ErrorKind::NotFound, [Arg::from("no user %d"), Arg::from(7)])
        .unwrap_err();

    assert_eq!(e.message(), "no user 7");
    assert!(e.cause().is_none());
    assert_eq!(Some(3).or_raise(ErrorKind::NotFound, Vec::<Arg>::new()).unwrap(), 3);
}
