use commands::command_argument_builder;
use tracing::Level;
use vffuf::handlers::handle_tree;

mod commands;

fn main() {
    let mut cmd = command_argument_builder();
    let matches = cmd.get_matches_mut();

    init_logging(matches.get_flag("verbose"));

    let usage = cmd.render_help().to_string();
    let code = handle_tree(&matches, &usage);
    std::process::exit(code);
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    // Logs go to stderr so the tree on stdout stays clean
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
