use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::warn;

/// Maps the first token of a stats line to the protocol family key the
/// snapshot is queried by. Unknown line names collapse to the empty key,
/// which no getter ever looks up.
fn family_key(line_name: &str) -> &'static str {
    match line_name {
        "net" => "net",
        "rpc" => "rpc",
        "proc2" => "nfsv2",
        "proc3" => "nfsv3",
        "proc4" => "nfsv4",
        _ => "",
    }
}

/// Point-in-time parse of `net/rpc/nfs`: one raw field vector per protocol
/// family, fields kept verbatim as strings. Replaced wholesale on refresh,
/// never merged.
#[derive(Debug, Default)]
pub struct Snapshot {
    data: HashMap<&'static str, Vec<String>>,
}

impl Snapshot {
    /// Parses `<root>/net/rpc/nfs`. An unreadable file yields an empty
    /// snapshot and every lookup against it reads as zero.
    pub(crate) fn load(root: &Path) -> Self {
        let path = root.join("net/rpc/nfs");
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                warn!(message = "read nfs stats failed", ?path, ?err);
                return Self::default();
            }
        };

        let mut data = HashMap::new();
        for line in content.lines() {
            // kernel lines are single-space separated; the line name stays
            // in the vector at index 0 and the position tables count it
            let fields = line.split(' ').map(str::to_owned).collect::<Vec<_>>();
            let name = fields.first().map(String::as_str).unwrap_or("");
            data.insert(family_key(name), fields);
        }

        Self { data }
    }

    /// The raw fields stored for a protocol family, empty if the family
    /// was absent from the stats file at parse time.
    pub fn fields(&self, protocol: &str) -> &[String] {
        self.data.get(protocol).map(Vec::as_slice).unwrap_or(&[])
    }
}
