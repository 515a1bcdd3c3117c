use std::fs;

use tracing::warn;

use crate::NfsClient;

impl NfsClient {
    /// Counts mount-table entries whose filesystem type token is exactly
    /// `nfs`. `nfs4`-typed mounts are deliberately not counted; the match
    /// is the space-delimited `" nfs "` substring only. Reads `mounts` at
    /// call time, not from the snapshot. An unreadable table counts as
    /// zero.
    pub fn mounts(&self) -> usize {
        let path = self.root.join("mounts");
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                warn!(message = "read mount table failed", ?path, ?err);
                return 0;
            }
        };

        content
            .lines()
            .filter(|line| line.contains(" nfs "))
            .count()
    }
}
