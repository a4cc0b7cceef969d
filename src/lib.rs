//! Record Crab
//!
//! A small DNS record provisioning service. Clients describe a resource record as JSON; the
//! record is checked against the rules of its type, rendered to the presentation format text
//! a zone file expects, and tracked in a deduplicated store keyed by
//! `(apex, subdomain, type, value)`.
//!
//! Supported record types are `A`, `AAAA`, `CNAME`, `MX`, `HTTPS` ([RFC-9460]), `CAA`
//! ([RFC-8659]), `SSHFP` ([RFC-4255]) and `TXT`.
//!
//! [RFC-9460]: https://www.rfc-editor.org/rfc/rfc9460
//! [RFC-8659]: https://www.rfc-editor.org/rfc/rfc8659
//! [RFC-4255]: https://www.rfc-editor.org/rfc/rfc4255
//!
#![warn(clippy::pedantic)]

pub mod api;
pub mod config;
pub mod error;
pub mod record;
pub mod store;

use crate::store::{file, memory};
pub use api::new as new_http;
pub use config::{Config, SharedConfig};
pub use file::FileRecordStore;
pub use memory::InMemoryRecordStore;
pub use record::{Record, RecordType, RecordValue};
