//! Gate decision table over payload vectors.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use serde::Deserialize;
use serde_json::Value;

use lumo_gateway::policy::{self, GateDecision};

#[derive(Debug, Deserialize)]
struct GateCase {
    description: String,
    data: Value,
    expect: String,
    #[serde(default)]
    marker: Option<String>,
}

fn load(name: &str) -> Vec<GateCase> {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}

#[test]
fn gate_vectors() {
    for case in load("gate_cases.json") {
        let payload = match case.data {
            Value::Object(m) => m,
            other => panic!("vector data must be an object: {other}"),
        };

        match (policy::check(&payload), case.expect.as_str()) {
            (GateDecision::Pass, "allow") => {}
            (GateDecision::Reject { msg, marker, .. }, "reject") => {
                assert_eq!(msg, "PII blocked", "vector={}", case.description);
                if let Some(expected) = &case.marker {
                    assert_eq!(marker, expected, "vector={}", case.description);
                }
            }
            (got, want) => panic!("vector={} want={want} got={got:?}", case.description),
        }
    }
}
