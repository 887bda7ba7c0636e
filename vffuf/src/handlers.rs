use anyhow::Context;
use clap::ArgMatches;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use vffuf_core::{DirectoryTree, TreeBuilder, TreeError, TreeRenderer};

pub const EXIT_USAGE: i32 = 1;
pub const EXIT_FAILURE: i32 = 1;

/// Settings for a single tree run, taken from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub file: PathBuf,
    pub group_by_host: bool,
    pub colorize: bool,
}

impl RunOptions {
    /// Returns `None` when no input file was given
    pub fn from_matches(args: &ArgMatches) -> Option<Self> {
        let file = args.get_one::<String>("file")?;

        Some(Self {
            file: expand_path(file),
            group_by_host: args.get_flag("by-host"),
            colorize: !args.get_flag("no-color"),
        })
    }
}

/// Expand a leading `~` in a user-supplied path
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

/// Read an ffuf report into memory
pub fn load_scan_output(path: &Path) -> anyhow::Result<Vec<u8>> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    debug!(path = %path.display(), bytes = bytes.len(), "loaded scan output");
    Ok(bytes)
}

pub fn build_tree(input: &[u8], group_by_host: bool) -> Result<DirectoryTree, TreeError> {
    let mut builder = TreeBuilder::new().with_group_by_host(group_by_host);
    builder.build_from_slice(input)?;
    Ok(builder.finish())
}

/// Load, build and stream the tree for one report into `out`.
///
/// The tree is fully built before anything is written, so a bad report
/// produces no output.
pub fn write_scan_file<W: Write>(options: &RunOptions, out: &mut W) -> anyhow::Result<()> {
    let input = load_scan_output(&options.file)?;
    let tree = build_tree(&input, options.group_by_host)?;
    info!(nodes = tree.node_count(), "rendering directory tree");

    let renderer = TreeRenderer::new().with_color(options.colorize);
    renderer
        .render_to(&tree, out)
        .context("Failed to write directory tree")?;
    out.flush()?;
    Ok(())
}

/// Load, build and render the tree for one report
pub fn render_scan_file(options: &RunOptions) -> anyhow::Result<String> {
    let mut output = Vec::new();
    write_scan_file(options, &mut output)?;
    Ok(String::from_utf8(output)?)
}

/// Entry point for the default command. Returns the process exit code.
pub fn handle_tree(args: &ArgMatches, usage: &str) -> i32 {
    let Some(options) = RunOptions::from_matches(args) else {
        println!("Error: -f <PATH> is required.");
        println!("{}", usage);
        return EXIT_USAGE;
    };

    match write_scan_file(&options, &mut io::stdout().lock()) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("✗ {:#}", e);
            EXIT_FAILURE
        }
    }
}
