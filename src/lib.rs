//! Client-side NFS statistics collected from procfs.
//!
//! `NfsClient` parses `net/rpc/nfs` into a point-in-time [`Snapshot`] at
//! construction; metric reads are answered from that snapshot without
//! touching the file again. A polling host calls [`NfsClient::regenerate`]
//! once per interval to replace the snapshot wholesale.
//!
//! Every operation degrades silently: unreadable files, truncated lines and
//! non-numeric fields all read as zero, with a `warn!` at the failure site.
//! Nothing here returns an error to the caller.
//!
//! Reads take `&self` and refresh takes `&mut self`, so a store shared
//! across threads needs its own `RwLock`; there is no internal locking.

mod keys;
mod mounts;
mod snapshot;
mod stats;
mod tcp;

pub use keys::{MetricKey, NFS_OPERATIONS, metric_keys};
pub use snapshot::Snapshot;

use std::path::PathBuf;

pub struct NfsClient {
    root: PathBuf,
    snapshot: Snapshot,
}

impl NfsClient {
    /// Creates a store rooted at `/proc` and parses the initial snapshot.
    pub fn new() -> Self {
        Self::with_root("/proc")
    }

    /// Creates a store rooted at an alternate procfs mount.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let snapshot = Snapshot::load(&root);

        Self { root, snapshot }
    }

    /// Re-parses the kernel stats file, replacing the snapshot wholesale.
    pub fn regenerate(&mut self) {
        self.snapshot = Snapshot::load(&self.root);
    }

    /// Reads every metric in the catalog, in catalog order.
    ///
    /// `port` is the NFS server port used for connection counting,
    /// typically 2049.
    pub fn gather(&self, port: u16) -> Vec<(&'static MetricKey, u64)> {
        metric_keys()
            .iter()
            .map(|key| {
                let value = match (key.protocol, key.stat) {
                    (None, "num_connections") => self.num_connections(port) as u64,
                    (None, _) => self.mounts() as u64,
                    (Some("rpc"), stat) => self.rpc_metric(stat),
                    (Some(protocol), stat) => self.nfs_metric(protocol, stat),
                };

                (key, value)
            })
            .collect()
    }
}

impl Default for NfsClient {
    fn default() -> Self {
        Self::new()
    }
}
