// Tree rendering for terminal output

use crate::model::{DirectoryTree, TreeNode};
use colored::{Color, Colorize};
use std::io::{self, Write};

pub const BRANCH: &str = "├── ";
pub const LAST_BRANCH: &str = "└── ";
pub const DEFAULT_INDENT: &str = "    ";

/// Branch connector for a child, depending on whether it is the last sibling
pub fn branch_glyph(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}

/// HTTP status class used to pick a line color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    Redirect,
    ClientError,
    ServerError,
    Other,
}

impl StatusClass {
    pub fn from_code(code: i64) -> Self {
        match code {
            200..=299 => StatusClass::Success,
            300..=399 => StatusClass::Redirect,
            400..=499 => StatusClass::ClientError,
            500..=599 => StatusClass::ServerError,
            _ => StatusClass::Other,
        }
    }

    /// Classify a status as stored on a leaf annotation
    pub fn from_status(status: &str) -> Self {
        status
            .trim()
            .parse::<i64>()
            .map(Self::from_code)
            .unwrap_or(StatusClass::Other)
    }

    pub fn color(self) -> Option<Color> {
        match self {
            StatusClass::Success => Some(Color::Green),
            StatusClass::Redirect => Some(Color::Yellow),
            StatusClass::ClientError => Some(Color::Red),
            StatusClass::ServerError => Some(Color::Magenta),
            StatusClass::Other => None,
        }
    }
}

/// Renders a `DirectoryTree` as indented box-drawing text.
///
/// Children are visited in byte-wise sorted order, so output only depends on
/// the tree's contents.
#[derive(Debug, Clone)]
pub struct TreeRenderer {
    indent: String,
    colorize: bool,
}

impl Default for TreeRenderer {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
            colorize: true,
        }
    }
}

impl TreeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, enabled: bool) -> Self {
        self.colorize = enabled;
        self
    }

    /// Indent unit repeated once per depth level
    pub fn with_indent(mut self, indent: &str) -> Self {
        self.indent = indent.to_string();
        self
    }

    /// Render the whole tree into a `String`
    pub fn render(&self, tree: &DirectoryTree) -> String {
        let mut output = Vec::new();
        // Writing into a Vec<u8> can't fail
        let _ = self.render_to(tree, &mut output);
        String::from_utf8_lossy(&output).into_owned()
    }

    /// Stream the tree line by line into `out`.
    ///
    /// Walks with an explicit stack of sibling iterators, one per depth level,
    /// so path depth is not limited by the call stack.
    pub fn render_to<W: Write>(&self, tree: &DirectoryTree, out: &mut W) -> io::Result<()> {
        let mut levels = vec![tree.root().children.iter().peekable()];

        while let Some(siblings) = levels.last_mut() {
            let Some((name, child)) = siblings.next() else {
                levels.pop();
                continue;
            };
            let is_last = siblings.peek().is_none();
            let depth = levels.len() - 1;

            writeln!(out, "{}", self.render_line(name, child, depth, is_last))?;

            if !child.children.is_empty() {
                levels.push(child.children.iter().peekable());
            }
        }

        Ok(())
    }

    /// Format the line for one node, without a trailing newline
    pub fn render_line(&self, name: &str, node: &TreeNode, depth: usize, is_last: bool) -> String {
        let prefix = format!("{}{}", self.indent.repeat(depth), branch_glyph(is_last));

        let Some(annotation) = &node.annotation else {
            return format!("{}{}", prefix, name);
        };

        let line = format!(
            "{}{} (Status: {}), (Length: {})",
            prefix, name, annotation.status, annotation.length
        );

        match StatusClass::from_status(&annotation.status).color() {
            Some(color) if self.colorize => line.color(color).to_string(),
            _ => line,
        }
    }
}
