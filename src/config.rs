use crate::error::Error;
use crate::store::{DynRecordStore, FileRecordStore, InMemoryRecordStore};
use ipnetwork::IpNetwork;
use lazy_static::lazy_static;
use serde::Deserialize;
use serde_with::{serde_as, DurationSeconds};
use std::fs::File;
use std::io::BufReader;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

pub type SharedConfig = Arc<Config>;

pub const DEFAULT_ROOT_REDIRECT: &str = "https://pyjam.as/portal";

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub api_bind_addr: SocketAddr,
    #[serde_as(as = "DurationSeconds<u64>")]
    pub api_timeout: Duration,
    pub store_state_path: Option<String>,
    #[serde(default = "default_root_redirect")]
    pub root_redirect: String,
}

fn default_root_redirect() -> String {
    DEFAULT_ROOT_REDIRECT.to_string()
}

lazy_static! {
    // NOTE(XXX): Once the "ip" feature has stabilized we can use Ipv6Addr.is_unique_local[0].
    //            Presently this feature is unstable so we home-roll. See also RFC 4193[1].
    // [0]: https://doc.rust-lang.org/std/net/struct.Ipv6Addr.html#method.is_unique_local
    // [1]: https://www.rfc-editor.org/rfc/rfc4193.html
    static ref IPV6_UNIQUE_LOCAL_NETWORK: IpNetwork = IpNetwork::from_str("fc00::/7").unwrap();
}

impl Config {
    /// Load and check a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IO`] or [`Error::InvalidJSON`] if the file can't be read or parsed, and
    /// [`Error::InsecureAPIBind`] if the API would listen on a public address.
    pub fn try_from_file(p: impl AsRef<Path>) -> Result<Self, Error> {
        let f = File::open(p)?;
        let reader = BufReader::new(f);
        let conf: Config = serde_json::from_reader(reader)?;
        conf.bind_addr_is_secure()?;
        Ok(conf)
    }

    /// Open the record store selected by [`Config::store_state_path`]: a
    /// [`FileRecordStore`] when a path is set, otherwise an empty [`InMemoryRecordStore`].
    ///
    /// # Errors
    ///
    /// Returns an error if the state file can't be created, read or parsed.
    pub async fn record_store(&self) -> Result<DynRecordStore, Error> {
        let store: DynRecordStore = match &self.store_state_path {
            Some(path) => Arc::new(RwLock::new(FileRecordStore::try_from_file(path).await?)),
            None => {
                tracing::warn!("no store_state_path configured, records will not persist");
                Arc::new(RwLock::new(InMemoryRecordStore::default()))
            }
        };
        Ok(store)
    }

    fn bind_addr_is_secure(&self) -> Result<(), Error> {
        match self.api_bind_addr {
            SocketAddr::V4(v4_addr) => {
                let ip = v4_addr.ip();
                if !ip.is_loopback() && !ip.is_private() {
                    return Err(Error::InsecureAPIBind(IpAddr::V4(*ip)));
                }
                Ok(())
            }
            SocketAddr::V6(v6_addr) => {
                let ip = v6_addr.ip();
                if !ip.is_loopback() && !IPV6_UNIQUE_LOCAL_NETWORK.contains(IpAddr::V6(*ip)) {
                    return Err(Error::InsecureAPIBind(IpAddr::V6(*ip)));
                }
                Ok(())
            }
        }
    }
}
