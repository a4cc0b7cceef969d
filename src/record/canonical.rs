//! Presentation format rendering.
//!
//! [`render`] turns a validated [`RecordValue`] into the RDATA text a zone file expects. The
//! same string is returned to API clients and stored as the record's value, so the output for
//! a given value must never change between calls.

use crate::record::variants::{Caa, Https, Mx, Sshfp, SshfpAlgorithm, SshfpHash};
use crate::record::RecordValue;

/// Render the presentation format of `value`.
#[must_use]
pub fn render(value: &RecordValue) -> String {
    match value {
        RecordValue::A(addr) => addr.to_string(),
        RecordValue::Aaaa(addr) => addr.to_string(),
        RecordValue::Cname(cname) => cname.target().to_string(),
        RecordValue::Mx(mx) => render_mx(mx),
        RecordValue::Https(https) => render_https(https),
        RecordValue::Caa(caa) => render_caa(caa),
        RecordValue::Sshfp(sshfp) => render_sshfp(sshfp),
        RecordValue::Txt(txt) => txt.text().to_string(),
    }
}

fn render_mx(mx: &Mx) -> String {
    format!("{} {}", mx.priority(), mx.host())
}

fn render_https(https: &Https) -> String {
    let mut tokens = vec![https.priority().to_string(), https.hostname().to_string()];
    // Parameter order is fixed: alpn, port, ech.
    if let Some(alpn) = https.alpn() {
        tokens.push(format!("alpn={alpn}"));
    }
    if let Some(port) = https.port() {
        tokens.push(format!("port={port}"));
    }
    if let Some(ech) = https.ech() {
        tokens.push(format!("ech={ech}"));
    }
    tokens.join(" ")
}

fn render_caa(caa: &Caa) -> String {
    format!(
        "{} {} \"{}\"",
        caa.flags(),
        caa.tag().as_str(),
        escape_quoted(caa.value())
    )
}

/// Escape `value` for use inside a double quoted character-string. Backslashes must be
/// escaped before quotes.
fn escape_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn render_sshfp(sshfp: &Sshfp) -> String {
    format!(
        "{} {} {}",
        algorithm_code(sshfp.algorithm()),
        hash_code(sshfp.hash_type()),
        sshfp.fingerprint()
    )
}

/// IANA SSHFP public key algorithm number.
fn algorithm_code(algorithm: SshfpAlgorithm) -> u8 {
    match algorithm {
        SshfpAlgorithm::Rsa => 1,
        SshfpAlgorithm::Ed25519 => 4,
        SshfpAlgorithm::Ed448 => 6,
    }
}

/// IANA SSHFP fingerprint type number.
fn hash_code(hash: SshfpHash) -> u8 {
    match hash {
        SshfpHash::Sha1 => 1,
        SshfpHash::Sha256 => 2,
    }
}
