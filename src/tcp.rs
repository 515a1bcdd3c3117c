use std::fs;

use tracing::warn;

use crate::NfsClient;

impl NfsClient {
    /// Counts entries of the live TCP socket table bound to `port` on
    /// either end, by matching the table's 4-hex-digit port notation
    /// (2049 matches `":0801"`). Reads `net/tcp` at call time, not from
    /// the snapshot. An unreadable table counts as zero.
    pub fn num_connections(&self, port: u16) -> usize {
        let path = self.root.join("net/tcp");
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                warn!(message = "read tcp table failed", ?path, ?err);
                return 0;
            }
        };

        let needle = format!(":{port:04x}");
        content
            .lines()
            .filter(|line| line.contains(&needle))
            .count()
    }
}
