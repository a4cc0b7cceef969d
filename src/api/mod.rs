//! HTTP API for provisioning DNS records.
//!
//! # API Endpoints
//!
//! ## `/` (GET)
//!
//!   Returns HTTP 307 (Temporary Redirect) to the configured
//!   [`Config::root_redirect`][`crate::config::Config::root_redirect`].
//!
//! ## `/healthcheck` (GET)
//!
//!   Returns HTTP 200 (OK) and the JSON body `{"ok":"healthy"}` when the service is operational.
//!
//! ## `/dns/` (PUT)
//!
//!   Expects a JSON request body of the form:
//!
//!   ```json
//!   {
//!     "apex": "example.com",
//!     "subdomain": "@",
//!     "record": { "record_type": "A", "record_val": "4.3.2.1" }
//!   }
//!   ```
//!
//!   `record_type` is one of `A`, `AAAA`, `CNAME`, `MX`, `HTTPS`, `CAA`, `SSHFP` or `TXT`.
//!   The shape of `record_val` depends on it:
//!
//!   | `record_type` | `record_val` |
//!   |---|---|
//!   | `A`, `AAAA`, `CNAME`, `TXT` | string |
//!   | `MX` | `{"priority": 10, "host": "mx.example.com"}` |
//!   | `HTTPS` | `{"priority": 1, "hostname": ".", "alpn": "h2,h3", "port": 443, "ech": "<base64>"}`, the last three optional |
//!   | `CAA` | `{"flags": 0, "tag": "issue", "value": "letsencrypt.org"}` or `[0, "issue", "letsencrypt.org"]` |
//!   | `SSHFP` | `{"hash_type": "SHA-256", "algorithm": "Ed25519", "fingerprint": "<hex>"}` |
//!
//!   The record is validated and rendered to presentation format, and the resulting
//!   `(apex, subdomain, record_type, value)` tuple is added to the
//!   [record store][crate::store]. Returns HTTP 200 (OK) with a `text/plain` body holding the
//!   rendered value, e.g. `4.3.2.1` or `0 issue "letsencrypt.org"`. Submitting a record that
//!   is already stored succeeds with the same response.
//!
//!   The body deliberately omits `apex` and `subdomain`: it is byte-for-byte the `value`
//!   column written to the store. The full tuple is logged at `info`.
//!
//! ## `/dns/` (DELETE)
//!
//!   Expects the same request body as `PUT`. Removes the exactly matching tuple and returns
//!   HTTP 200 (OK) with a `text/plain` body of `Affected: 1`, or `Affected: 0` if no such
//!   record was stored.
//!
//! # Errors
//!
//! Invalid records are rejected with HTTP 422 (Unprocessable Entity) and a JSON body naming
//! the offending field:
//!
//! ```json
//! { "error": "invalid record_val.priority: must be between 0 and 65535", "field": "record_val.priority" }
//! ```
//!
//! Unsupported record types and bodies of the wrong shape also return HTTP 422, malformed
//! JSON returns HTTP 400, and a missing JSON content type returns HTTP 415.

mod api_error;
mod model;
mod routes;
pub mod server;

pub use server::new;
