use crate::NfsClient;
use crate::keys::{nfs_stat_position, rpc_stat_position};

/// Best-effort numeric parse: a missing field or anything that is not a
/// base-10 integer reads as zero.
pub(crate) fn parse_field(field: Option<&str>) -> u64 {
    field.and_then(|value| value.parse().ok()).unwrap_or(0)
}

impl NfsClient {
    /// Reads one NFS operation counter, e.g. `("nfsv3", "getattr")`, from
    /// the current snapshot. An unknown protocol or operation, a line
    /// shorter than the expected layout and a non-numeric field all read
    /// as zero.
    pub fn nfs_metric(&self, protocol: &str, stat: &str) -> u64 {
        let Some(position) = nfs_stat_position(stat) else {
            return 0;
        };

        let fields = self.snapshot.fields(protocol);
        parse_field(fields.get(position).map(String::as_str))
    }

    /// Reads one counter from the `rpc` line, e.g. `"retransmissions"`.
    pub fn rpc_metric(&self, stat: &str) -> u64 {
        let Some(position) = rpc_stat_position(stat) else {
            return 0;
        };

        let fields = self.snapshot.fields("rpc");
        parse_field(fields.get(position).map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::tempdir;

    fn write_stats(root: &Path, content: &str) {
        std::fs::create_dir_all(root.join("net/rpc")).unwrap();
        std::fs::write(root.join("net/rpc/nfs"), content).unwrap();
    }

    #[test]
    fn nfs_metric_reads_by_position() {
        let tmpdir = tempdir().unwrap();
        let root = tmpdir.path();
        // field 0 is the line name, so getattr (position 3) is the token "3"
        write_stats(
            root,
            "proc3 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22\n",
        );

        let client = NfsClient::with_root(root);
        assert_eq!(client.nfs_metric("nfsv3", "getattr"), 3);
        assert_eq!(client.nfs_metric("nfsv3", "mkdir"), 11);
        // positions 12-13 are skipped, remove sits at 14
        assert_eq!(client.nfs_metric("nfsv3", "remove"), 14);
        assert_eq!(client.nfs_metric("nfsv3", "pathconf"), 22);
    }

    #[test]
    fn absent_protocol_reads_as_zero() {
        let tmpdir = tempdir().unwrap();
        let root = tmpdir.path();
        write_stats(root, "proc3 1 2 3 4 5\n");

        let client = NfsClient::with_root(root);
        assert_eq!(client.nfs_metric("nfsv2", "getattr"), 0);
        assert_eq!(client.nfs_metric("nfsv4", "read"), 0);
        assert_eq!(client.rpc_metric("calls"), 0);
    }

    #[test]
    fn truncated_line_reads_as_zero() {
        let tmpdir = tempdir().unwrap();
        let root = tmpdir.path();
        write_stats(root, "proc4 1 2 3 4\n");

        let client = NfsClient::with_root(root);
        assert_eq!(client.nfs_metric("nfsv4", "getattr"), 3);
        // write is position 9, past the end of this line
        assert_eq!(client.nfs_metric("nfsv4", "write"), 0);
    }

    #[test]
    fn non_numeric_field_reads_as_zero() {
        let tmpdir = tempdir().unwrap();
        let root = tmpdir.path();
        write_stats(root, "rpc abc 374636 1218815394\n");

        let client = NfsClient::with_root(root);
        assert_eq!(client.rpc_metric("calls"), 0);
        assert_eq!(client.rpc_metric("retransmissions"), 374636);
        assert_eq!(client.rpc_metric("authrefresh"), 1218815394);
    }

    #[test]
    fn unknown_stat_name_reads_as_zero() {
        let tmpdir = tempdir().unwrap();
        let root = tmpdir.path();
        write_stats(
            root,
            "proc3 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22\n",
        );

        let client = NfsClient::with_root(root);
        assert_eq!(client.nfs_metric("nfsv3", "commit"), 0);
        assert_eq!(client.rpc_metric("badcalls"), 0);
    }

    #[test]
    fn regenerate_replaces_the_snapshot() {
        let tmpdir = tempdir().unwrap();
        let root = tmpdir.path();
        write_stats(root, "rpc 100 200 300\n");

        let mut client = NfsClient::with_root(root);
        assert_eq!(client.rpc_metric("calls"), 100);

        write_stats(root, "rpc 101 200 300\n");
        // the snapshot is a cache, stale until refreshed
        assert_eq!(client.rpc_metric("calls"), 100);

        client.regenerate();
        assert_eq!(client.rpc_metric("calls"), 101);
    }

    #[test]
    fn regenerate_drops_vanished_families() {
        let tmpdir = tempdir().unwrap();
        let root = tmpdir.path();
        write_stats(root, "rpc 100 200 300\nproc3 1 2 3 4\n");

        let mut client = NfsClient::with_root(root);
        assert_eq!(client.nfs_metric("nfsv3", "getattr"), 3);

        write_stats(root, "rpc 100 200 300\n");
        client.regenerate();
        assert_eq!(client.nfs_metric("nfsv3", "getattr"), 0);
    }

    #[test]
    fn parse_field_policy() {
        assert_eq!(parse_field(Some("42")), 42);
        assert_eq!(parse_field(Some("")), 0);
        assert_eq!(parse_field(Some("-1")), 0);
        assert_eq!(parse_field(Some("4.2")), 0);
        assert_eq!(parse_field(None), 0);
    }
}
