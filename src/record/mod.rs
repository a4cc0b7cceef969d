//! Typed DNS record model.
//!
//! A [`Record`] pairs a zone apex and a subdomain label with exactly one [`RecordValue`]. The
//! value is a closed union over the supported record types; the [`RecordType`] tag is derived
//! from the variant and can never disagree with the payload.
//!
//! Building any of these types validates it, see [`validate`] for the field level checks.
//! Turning a value into presentation format text is the job of [`canonical::render`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

pub mod canonical;
pub mod validate;
pub mod variants;

pub use validate::ValidationError;
pub use variants::{Caa, CaaTag, Cname, Https, Mx, Sshfp, SshfpAlgorithm, SshfpHash, Txt};

/// DNS record type tag, as it appears on the wire model and in the store's `type` column.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
#[allow(clippy::module_name_repetitions)]
pub enum RecordType {
    A,
    Aaaa,
    Cname,
    Mx,
    Https,
    Caa,
    Sshfp,
    Txt,
}

impl RecordType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Https => "HTTPS",
            Self::Caa => "CAA",
            Self::Sshfp => "SSHFP",
            Self::Txt => "TXT",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The typed value of a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum RecordValue {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Cname(Cname),
    Mx(Mx),
    Https(Https),
    Caa(Caa),
    Sshfp(Sshfp),
    Txt(Txt),
}

impl RecordValue {
    #[must_use]
    pub fn record_type(&self) -> RecordType {
        match self {
            Self::A(_) => RecordType::A,
            Self::Aaaa(_) => RecordType::Aaaa,
            Self::Cname(_) => RecordType::Cname,
            Self::Mx(_) => RecordType::Mx,
            Self::Https(_) => RecordType::Https,
            Self::Caa(_) => RecordType::Caa,
            Self::Sshfp(_) => RecordType::Sshfp,
            Self::Txt(_) => RecordType::Txt,
        }
    }
}

/// A record value placed at `subdomain` under the zone `apex`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    apex: String,
    subdomain: String,
    value: RecordValue,
}

impl Record {
    /// Wrap an already validated `value`, checking the envelope fields.
    ///
    /// `apex` must be a 3 to 255 character domain name. `subdomain` is only length checked
    /// (1 to 255 characters); `@` conventionally denotes the apex itself.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for the `apex` or `subdomain` field.
    pub fn new(
        apex: String,
        subdomain: String,
        value: RecordValue,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            apex: validate::domain("apex", apex, 3, variants::MAX_NAME_LEN)?,
            subdomain: validate::bounded_str("subdomain", subdomain, 1, variants::MAX_NAME_LEN)?,
            value,
        })
    }

    #[must_use]
    pub fn apex(&self) -> &str {
        &self.apex
    }

    #[must_use]
    pub fn subdomain(&self) -> &str {
        &self.subdomain
    }

    #[must_use]
    pub fn value(&self) -> &RecordValue {
        &self.value
    }

    #[must_use]
    pub fn record_type(&self) -> RecordType {
        self.value.record_type()
    }
}
