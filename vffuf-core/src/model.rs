use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One entry from the `results` array of an ffuf JSON report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRecord {
    pub url: String,
    pub host: Option<String>,
    pub status: i64,
    pub length: i64,
}

impl ScanRecord {
    pub fn new(url: impl Into<String>, status: i64, length: i64) -> Self {
        Self {
            url: url.into(),
            host: None,
            status,
            length,
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Leniently decode a result entry.
    ///
    /// Returns `None` when the entry is not an object or has no string `url`.
    /// A missing or non-numeric `status`/`length` decodes as 0 and fractional
    /// numbers are truncated.
    pub fn from_value(value: &Value) -> Option<Self> {
        let entry = value.as_object()?;
        let url = entry.get("url")?.as_str()?;

        Some(Self {
            url: url.to_string(),
            host: entry.get("host").and_then(Value::as_str).map(String::from),
            status: numeric_field(entry, "status"),
            length: numeric_field(entry, "length"),
        })
    }
}

fn numeric_field(entry: &Map<String, Value>, key: &str) -> i64 {
    entry
        .get(key)
        .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
        .unwrap_or(0)
}

/// Status and length recorded for a fully discovered path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafAnnotation {
    pub status: String,
    pub length: String,
}

impl From<&ScanRecord> for LeafAnnotation {
    fn from(record: &ScanRecord) -> Self {
        Self {
            status: record.status.to_string(),
            length: record.length.to_string(),
        }
    }
}

/// A path segment in the directory tree.
///
/// A node can be a discovered path (annotated), an intermediate directory
/// (children only), or both when a path and one of its descendants were hit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    pub annotation: Option<LeafAnnotation>,
    pub children: BTreeMap<String, TreeNode>,
}

impl TreeNode {
    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        self.children.get(name)
    }

    /// Get the named child, creating an empty one if needed
    pub fn child_entry(&mut self, name: &str) -> &mut TreeNode {
        self.children.entry(name.to_string()).or_default()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes below this one
    pub fn descendant_count(&self) -> usize {
        let mut count = 0;
        let mut pending: Vec<&TreeNode> = vec![self];
        while let Some(node) = pending.pop() {
            count += node.children.len();
            pending.extend(node.children.values());
        }
        count
    }
}

// Tear down iteratively so a very deep path can't overflow the stack
impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut pending: Vec<TreeNode> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

/// A finished tree, handed from the builder to the renderer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryTree {
    root: TreeNode,
}

impl DirectoryTree {
    pub fn new(root: TreeNode) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Follow `path` segment by segment from the root
    pub fn get(&self, path: &[&str]) -> Option<&TreeNode> {
        path.iter()
            .try_fold(&self.root, |node, segment| node.child(segment))
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.root.descendant_count()
    }
}
