use std::collections::BTreeMap;

use rowpress_core::{DataMap, Row};

/// Collapse structurally identical rows within each table.
///
/// Surviving rows are reordered by their stable fingerprint, so identical
/// input collections always produce identical output. Applied once as the
/// last step of a flatten call; the pass is idempotent.
pub fn deduplicate(map: DataMap) -> DataMap {
    let mut out = DataMap::new();
    for (table, rows) in map.into_tables() {
        let mut buckets: BTreeMap<u64, Vec<Row>> = BTreeMap::new();
        for row in rows {
            let bucket = buckets.entry(row.fingerprint()).or_default();
            // fingerprints may collide; only structural equality collapses
            if !bucket.contains(&row) {
                bucket.push(row);
            }
        }
        for rows in buckets.into_values() {
            for row in rows {
                out.push(table, row);
            }
        }
    }
    out
}
