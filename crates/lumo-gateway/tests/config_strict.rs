#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use lumo_gateway::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
gateway:
  listen: "0.0.0.0:8000"
  max_body_byte: 4096 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.gateway.listen, "0.0.0.0:8000");
    assert_eq!(cfg.gateway.max_body_bytes, 65536);
}

#[test]
fn ok_full_config() {
    let ok = r#"
version: 1
gateway:
  listen: "127.0.0.1:9100"
  max_body_bytes: 2048
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.gateway.listen_addr().unwrap().port(), 9100);
    assert_eq!(cfg.gateway.max_body_bytes, 2048);
}

#[test]
fn reject_unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert!(err.to_string().contains("unsupported config version"));
}

#[test]
fn reject_bad_listen_addr() {
    let bad = r#"
version: 1
gateway:
  listen: "localhost"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("gateway.listen"));
}

#[test]
fn reject_body_limit_out_of_range() {
    let bad = r#"
version: 1
gateway:
  max_body_bytes: 10
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("max_body_bytes"));
}

#[test]
fn missing_explicit_file_is_an_error() {
    let err = config::load_or_default(Some("does/not/exist.yaml")).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INTERNAL");
}
