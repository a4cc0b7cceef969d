use crate::record::{Caa, Cname, Https, Mx, Record, RecordValue, Sshfp, Txt, ValidationError};
use crate::record::validate;
use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr, PickFirst};

/// Body of `PUT /dns/` and `DELETE /dns/`.
#[derive(Deserialize, Debug, Clone)]
pub(super) struct RecordRequest {
    pub apex: String,
    pub subdomain: String,
    pub record: RecordPayload,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "record_type", content = "record_val", rename_all = "UPPERCASE")]
pub(super) enum RecordPayload {
    A(String),
    Aaaa(String),
    Cname(String),
    Mx(MxVal),
    Https(HttpsVal),
    Caa(CaaVal),
    Sshfp(SshfpVal),
    Txt(String),
}

// Integers may arrive as JSON numbers or as decimal strings.

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub(super) struct MxVal {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub priority: i64,
    pub host: String,
}

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub(super) struct HttpsVal {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub priority: i64,
    pub hostname: String,
    #[serde(default)]
    pub alpn: Option<String>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub port: Option<i64>,
    #[serde(default)]
    pub ech: Option<String>,
}

/// Also accepted as a `[flags, tag, value]` array.
#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub(super) struct CaaVal {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub flags: i64,
    pub tag: String,
    pub value: String,
}

#[derive(Deserialize, Debug, Clone)]
pub(super) struct SshfpVal {
    pub hash_type: String,
    pub algorithm: String,
    pub fingerprint: String,
}

impl RecordPayload {
    fn into_value(self) -> Result<RecordValue, ValidationError> {
        Ok(match self {
            Self::A(addr) => RecordValue::A(validate::ipv4("record_val", &addr)?),
            Self::Aaaa(addr) => RecordValue::Aaaa(validate::ipv6("record_val", &addr)?),
            Self::Cname(target) => RecordValue::Cname(Cname::new(target)?),
            Self::Mx(v) => RecordValue::Mx(Mx::new(v.priority, v.host)?),
            Self::Https(v) => {
                RecordValue::Https(Https::new(v.priority, v.hostname, v.alpn, v.port, v.ech)?)
            }
            Self::Caa(v) => RecordValue::Caa(Caa::new(v.flags, &v.tag, v.value)?),
            Self::Sshfp(v) => {
                RecordValue::Sshfp(Sshfp::new(&v.hash_type, &v.algorithm, v.fingerprint)?)
            }
            Self::Txt(text) => RecordValue::Txt(Txt::new(text)?),
        })
    }
}

impl RecordRequest {
    /// Validate the request into a [`Record`]. The record value is checked first, then `apex`
    /// and `subdomain`; the first failure is returned.
    pub fn into_record(self) -> Result<Record, ValidationError> {
        let value = self.record.into_value()?;
        Record::new(self.apex, self.subdomain, value)
    }
}
