use crate::CLAP_STYLING;
use clap::arg;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("vffuf")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("vffuf")
        .about("Visualize ffuf JSON results as a directory tree")
        .styles(CLAP_STYLING)
        .arg(
            // Enforced by the handler so a missing flag prints usage to stdout
            arg!(-f --"file" <PATH>)
                .required(false)
                .help("Path to the JSON file containing ffuf output"),
        )
        .arg(
            arg!(--"by-host")
                .required(false)
                .help("Group discovered paths under their host")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            arg!(--"no-color")
                .required(false)
                .help("Disable status code coloring")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            arg!(-v --"verbose")
                .required(false)
                .help("Print debug logging to stderr")
                .action(clap::ArgAction::SetTrue),
        )
}
