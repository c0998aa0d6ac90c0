//! Static host record storage.
//!
//! Records map a hostname to an IPv4 address and are persisted one per line in a flat file
//! of the form read by dnsmasq's `addn-hosts` option:
//!
//! ```text
//! 192.168.1.10 printer.lan
//! 192.168.1.11 nas.lan
//! ```
//!
//! [`file::FileHostStore`] re-reads the file for every operation; there is no in-memory copy
//! of the records to go stale when the file is edited by hand.

use crate::error::Error;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

pub mod file;

#[allow(clippy::module_name_repetitions)]
pub use file::FileHostStore;

/// `DynHostStore` is a type alias for a [`HostStore`] shared by request handlers that
/// coordinate through an [`Arc`] and a [`RwLock`]. Handlers hold the write lock across an
/// existence check and the mutation that depends on it, so mutations are serialized.
#[allow(clippy::module_name_repetitions)]
pub type DynHostStore = Arc<RwLock<dyn HostStore + Send + Sync>>;

/// A single hostname to IP mapping.
#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
pub struct HostRecord {
    pub host: String,
    pub ip: String,
}

impl HostRecord {
    pub fn new(host: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ip: ip.into(),
        }
    }

    /// Parse a `<ip> <hostname>` line. Returns `None` for a line without a hostname field.
    pub fn from_line(line: &str) -> Option<Self> {
        let mut fields = line.split(' ');
        let ip = fields.next()?;
        let host = fields.next().filter(|h| !h.is_empty())?;
        Some(Self::new(host, ip))
    }

    /// The hostname field of a raw store line, if it has one.
    pub(crate) fn hostname_field(line: &str) -> Option<&str> {
        line.split(' ').nth(1)
    }

    pub fn to_line(&self) -> String {
        format!("{} {}\n", self.ip, self.host)
    }
}

/// An async trait describing storage of [`HostRecord`]s.
#[async_trait::async_trait]
pub trait HostStore {
    /// List every record in store order.
    async fn list(&self) -> Result<Vec<HostRecord>, Error>;

    /// Add a record after all existing records.
    async fn append(&mut self, record: &HostRecord) -> Result<(), Error>;

    /// Remove every record with the given hostname. Removing an absent hostname is a no-op.
    async fn delete(&mut self, hostname: &str) -> Result<(), Error>;

    /// Check whether a record with the given hostname is present.
    async fn exists(&self, hostname: &str) -> Result<bool, Error>;
}
