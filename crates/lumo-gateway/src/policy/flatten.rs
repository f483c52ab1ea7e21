//! Flattened text of a request payload.
//!
//! The whole payload is written out as one dictionary-literal dump
//! (`{'key': 'value', 'list': [1, True, None]}`) and lowercased. The gate scans
//! this text as a single haystack, so keys, values and nesting are all fair
//! game for a match.
//!
//! Strings are quoted and escaped like a Python `repr`: backslash and the
//! active quote get a backslash, `\t` `\n` `\r` use their short forms, other
//! control characters become `\xhh`, and non-printable code points become
//! `\xhh`, `\uhhhh` or `\Uhhhhhhhh`. Escapes are part of the haystack, so
//! `"\x0c" + "redit_card"` scans as `\x0credit_card`.

use std::fmt::Write;

use serde_json::Value;

use lumo_core::protocol::Payload;

/// Lowercase flattened text of `payload`, in body order.
pub fn flatten(payload: &Payload) -> String {
    let mut out = String::new();
    write_map(payload, &mut out);
    out.to_lowercase()
}

fn write_map(map: &Payload, out: &mut String) {
    out.push('{');
    for (i, (k, v)) in map.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_str(k, out);
        out.push_str(": ");
        write_value(v, out);
    }
    out.push('}');
}

fn write_value(v: &Value, out: &mut String) {
    match v {
        Value::Null => out.push_str("None"),
        Value::Bool(b) => out.push_str(if *b { "True" } else { "False" }),
        Value::Number(n) => {
            let _ = write!(out, "{n}");
        }
        Value::String(s) => write_str(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => write_map(map, out),
    }
}

fn write_str(s: &str, out: &mut String) {
    // Single quotes unless the text has a single quote and no double quote.
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c < ' ' || c == '\u{7f}' => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c if c.is_ascii() || is_printable(c) => out.push(c),
            c => {
                let cp = c as u32;
                let _ = match cp {
                    0..=0xff => write!(out, "\\x{cp:02x}"),
                    0x100..=0xffff => write!(out, "\\u{cp:04x}"),
                    _ => write!(out, "\\U{cp:08x}"),
                };
            }
        }
    }
    out.push(quote);
}

/// Printable in the `repr` sense: not a control, format, private-use,
/// unassigned, line/paragraph separator or non-space blank.
///
/// `str::escape_debug` escapes exactly those categories; grapheme extenders
/// are only escaped at the start of the string, hence the leading `a`.
fn is_printable(c: char) -> bool {
    let probe: String = ['a', c].iter().collect();
    probe.escape_debug().count() == 2
}
