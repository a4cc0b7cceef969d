//! Typed payloads for the record types that carry more than a bare address.
//!
//! Every payload is constructed through a `new` function that validates all of its fields
//! before returning; fields are private so a payload can't be observed in an invalid state.
//! Validation stops at the first failing field.

use crate::record::validate::{self, ValidationError};

/// Longest name accepted for domain-like fields.
pub const MAX_NAME_LEN: usize = 255;

/// Target of a `CNAME` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cname {
    target: String,
}

impl Cname {
    /// # Errors
    ///
    /// Returns a [`ValidationError`] unless `target` is a 3 to 255 character domain name.
    pub fn new(target: String) -> Result<Self, ValidationError> {
        Ok(Self {
            target: validate::domain("record_val", target, 3, MAX_NAME_LEN)?,
        })
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }
}

/// Mail exchanger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mx {
    priority: u16,
    host: String,
}

impl Mx {
    /// Build an `MX` payload. `host` is only length checked, it is not required to look like
    /// a domain name.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for an out of range priority or an overlong host.
    pub fn new(priority: i64, host: String) -> Result<Self, ValidationError> {
        Ok(Self {
            priority: validate::uint16("record_val.priority", priority)?,
            host: validate::bounded_str("record_val.host", host, 0, MAX_NAME_LEN)?,
        })
    }

    #[must_use]
    pub fn priority(&self) -> u16 {
        self.priority
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }
}

/// Service binding (`HTTPS`, RFC 9460). Only the `alpn`, `port` and `ech` parameters are
/// supported, each optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Https {
    priority: u16,
    hostname: String,
    alpn: Option<String>,
    port: Option<u16>,
    ech: Option<String>,
}

impl Https {
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for the first field that fails its constraint. Absent
    /// optional parameters are never checked.
    pub fn new(
        priority: i64,
        hostname: String,
        alpn: Option<String>,
        port: Option<i64>,
        ech: Option<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            priority: validate::uint16("record_val.priority", priority)?,
            hostname: validate::domain("record_val.hostname", hostname, 1, MAX_NAME_LEN)?,
            alpn: alpn
                .map(|a| validate::bounded_str("record_val.alpn", a, 1, MAX_NAME_LEN))
                .transpose()?,
            port: port
                .map(|p| validate::uint16("record_val.port", p))
                .transpose()?,
            ech: ech
                .map(|e| validate::base64("record_val.ech", e))
                .transpose()?,
        })
    }

    #[must_use]
    pub fn priority(&self) -> u16 {
        self.priority
    }

    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    #[must_use]
    pub fn alpn(&self) -> Option<&str> {
        self.alpn.as_deref()
    }

    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    #[must_use]
    pub fn ech(&self) -> Option<&str> {
        self.ech.as_deref()
    }
}

/// Property tag of a `CAA` record (RFC 8659, RFC 9495).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaaTag {
    Issue,
    IssueWild,
    IssueMail,
    Iodef,
}

impl CaaTag {
    pub const KEYWORDS: &'static [(&'static str, Self)] = &[
        ("issue", Self::Issue),
        ("issuewild", Self::IssueWild),
        ("issuemail", Self::IssueMail),
        ("iodef", Self::Iodef),
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Issue => "issue",
            Self::IssueWild => "issuewild",
            Self::IssueMail => "issuemail",
            Self::Iodef => "iodef",
        }
    }
}

/// Certification authority authorization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caa {
    flags: u8,
    tag: CaaTag,
    value: String,
}

impl Caa {
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for out of range flags, an unknown tag, or a value longer
    /// than 256 characters.
    pub fn new(flags: i64, tag: &str, value: String) -> Result<Self, ValidationError> {
        Ok(Self {
            flags: validate::uint8("record_val.flags", flags)?,
            tag: validate::keyword("record_val.tag", tag, CaaTag::KEYWORDS)?,
            value: validate::bounded_str("record_val.value", value, 0, 256)?,
        })
    }

    #[must_use]
    pub fn flags(&self) -> u8 {
        self.flags
    }

    #[must_use]
    pub fn tag(&self) -> CaaTag {
        self.tag
    }

    /// The unescaped property value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Fingerprint digest of an `SSHFP` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SshfpHash {
    Sha1,
    Sha256,
}

impl SshfpHash {
    pub const KEYWORDS: &'static [(&'static str, Self)] =
        &[("SHA-1", Self::Sha1), ("SHA-256", Self::Sha256)];
}

/// Public key algorithm of an `SSHFP` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SshfpAlgorithm {
    Rsa,
    Ed25519,
    Ed448,
}

impl SshfpAlgorithm {
    pub const KEYWORDS: &'static [(&'static str, Self)] = &[
        ("RSA", Self::Rsa),
        ("Ed25519", Self::Ed25519),
        ("Ed448", Self::Ed448),
    ];
}

/// SSH host key fingerprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sshfp {
    hash_type: SshfpHash,
    algorithm: SshfpAlgorithm,
    fingerprint: String,
}

impl Sshfp {
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for an unknown hash type or algorithm, or a fingerprint
    /// that isn't 40 to 64 upper case hex digits.
    pub fn new(
        hash_type: &str,
        algorithm: &str,
        fingerprint: String,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            hash_type: validate::keyword("record_val.hash_type", hash_type, SshfpHash::KEYWORDS)?,
            algorithm: validate::keyword(
                "record_val.algorithm",
                algorithm,
                SshfpAlgorithm::KEYWORDS,
            )?,
            fingerprint: validate::uppercase_hex("record_val.fingerprint", fingerprint, 40, 64)?,
        })
    }

    #[must_use]
    pub fn hash_type(&self) -> SshfpHash {
        self.hash_type
    }

    #[must_use]
    pub fn algorithm(&self) -> SshfpAlgorithm {
        self.algorithm
    }

    #[must_use]
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

/// Free-form text. No quoting or escaping is applied anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Txt {
    text: String,
}

impl Txt {
    /// # Errors
    ///
    /// Returns a [`ValidationError`] unless `text` is 1 to 256 characters.
    pub fn new(text: String) -> Result<Self, ValidationError> {
        Ok(Self {
            text: validate::bounded_str("record_val", text, 1, 256)?,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}
