pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{RunOptions, build_tree, expand_path, load_scan_output, render_scan_file};
