pub mod builder;
pub mod error;
pub mod model;
pub mod render;

pub use builder::{TreeBuilder, path_segments};
pub use error::{Result, TreeError};
pub use model::{DirectoryTree, LeafAnnotation, ScanRecord, TreeNode};
pub use render::{StatusClass, TreeRenderer, branch_glyph};
