// Folds flat ffuf results into a directory tree

use crate::error::{Result, TreeError};
use crate::model::{DirectoryTree, LeafAnnotation, ScanRecord, TreeNode};
use serde_json::Value;
use tracing::debug;

/// Only results fetched over TLS are placed in the tree
pub const SECURE_SCHEME: &str = "https://";

/// Split a URL into its path segments, dropping scheme and authority.
///
/// Returns `None` for anything that isn't `https://`. Empty segments are kept,
/// so `https://host/api/` yields `["api", ""]`.
pub fn path_segments(url: &str) -> Option<Vec<&str>> {
    if !url.starts_with(SECURE_SCHEME) {
        return None;
    }
    Some(url.split('/').skip(3).collect())
}

/// Accumulates scan records into a tree.
///
/// The builder owns the root exclusively until `finish` hands it off.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    root: TreeNode,
    group_by_host: bool,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key the tree by each record's `host` before its path
    pub fn with_group_by_host(mut self, enabled: bool) -> Self {
        self.group_by_host = enabled;
        self
    }

    /// Decode a raw ffuf JSON report and fold every usable result.
    ///
    /// The whole document is decoded before the tree is touched, so on error
    /// nothing has been added.
    pub fn build_from_slice(&mut self, input: &[u8]) -> Result<()> {
        let document: Value = serde_json::from_slice(input)?;
        let results = document
            .get("results")
            .and_then(Value::as_array)
            .ok_or(TreeError::MissingResults)?;

        debug!(results = results.len(), "decoded scan output");

        for record in results.iter().filter_map(ScanRecord::from_value) {
            self.add_record(&record);
        }

        debug!(nodes = self.root.descendant_count(), "directory tree built");
        Ok(())
    }

    /// Fold one record into the tree. Records that don't fit are ignored.
    pub fn add_record(&mut self, record: &ScanRecord) {
        let Some(segments) = path_segments(&record.url) else {
            return;
        };
        let Some((last, parents)) = segments.split_last() else {
            return;
        };

        let mut current = if self.group_by_host {
            match record.host.as_deref() {
                Some(host) => self.root.child_entry(host),
                None => return,
            }
        } else {
            &mut self.root
        };

        for segment in parents {
            current = current.child_entry(segment);
        }

        // Last record for a path wins; children already under it stay
        current.child_entry(last).annotation = Some(LeafAnnotation::from(record));
    }

    pub fn finish(self) -> DirectoryTree {
        DirectoryTree::new(self.root)
    }
}
