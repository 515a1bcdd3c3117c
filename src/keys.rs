use std::sync::LazyLock;

/// The fixed NFS operation vocabulary, in catalog order. v2, v3 and v4
/// expose the same operation set at the same line positions.
pub const NFS_OPERATIONS: [&str; 18] = [
    "getattr",
    "setattr",
    "lookup",
    "access",
    "readlink",
    "read",
    "write",
    "create",
    "mkdir",
    "remove",
    "rmdir",
    "rename",
    "link",
    "readdir",
    "readdirplus",
    "fsstat",
    "fsinfo",
    "pathconf",
];

const NFS_PROTOCOLS: [&str; 3] = ["nfsv2", "nfsv3", "nfsv4"];

/// One reportable metric: a bare counter (`num_connections`, `num_mounts`)
/// or a (protocol family, statistic) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MetricKey {
    pub protocol: Option<&'static str>,
    pub stat: &'static str,
}

impl MetricKey {
    const fn simple(stat: &'static str) -> Self {
        Self {
            protocol: None,
            stat,
        }
    }

    const fn compound(protocol: &'static str, stat: &'static str) -> Self {
        Self {
            protocol: Some(protocol),
            stat,
        }
    }
}

static METRIC_KEYS: LazyLock<Vec<MetricKey>> = LazyLock::new(|| {
    let mut keys = vec![
        MetricKey::simple("num_connections"),
        MetricKey::simple("num_mounts"),
        MetricKey::compound("rpc", "calls"),
        MetricKey::compound("rpc", "retransmissions"),
        MetricKey::compound("rpc", "authrefresh"),
    ];

    for protocol in NFS_PROTOCOLS {
        for stat in NFS_OPERATIONS {
            keys.push(MetricKey::compound(protocol, stat));
        }
    }

    keys
});

/// The full catalog of 59 metric keys, built once and never mutated. It is
/// a function of the static tables only, independent of what the kernel
/// actually reported.
pub fn metric_keys() -> &'static [MetricKey] {
    METRIC_KEYS.as_slice()
}

/// Field position of an NFS operation within a `proc2`/`proc3`/`proc4`
/// line, the line name counting as field 0. Fields 12 and 13 exist in the
/// line but are not exposed, hence the gap after mkdir. An unknown
/// operation yields `None` and the caller reads it as zero.
pub(crate) fn nfs_stat_position(stat: &str) -> Option<usize> {
    let position = match stat {
        "getattr" => 3,
        "setattr" => 4,
        "lookup" => 5,
        "access" => 6,
        "readlink" => 7,
        "read" => 8,
        "write" => 9,
        "create" => 10,
        "mkdir" => 11,
        "remove" => 14,
        "rmdir" => 15,
        "rename" => 16,
        "link" => 17,
        "readdir" => 18,
        "readdirplus" => 19,
        "fsstat" => 20,
        "fsinfo" => 21,
        "pathconf" => 22,
        _ => return None,
    };

    Some(position)
}

/// Field position of a statistic within the `rpc` line.
pub(crate) fn rpc_stat_position(stat: &str) -> Option<usize> {
    let position = match stat {
        "calls" => 1,
        "retransmissions" => 2,
        "authrefresh" => 3,
        _ => return None,
    };

    Some(position)
}
