use crate::CLAP_STYLING;
use clap::{arg, command};

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("linkvet")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("linkvet")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("check")
                .about(
                    "Deduplicate a list of URLs and keep only those that answer with HTTP 200. \
                Dead links are dropped, the survivors are written to the output file.",
                )
                .arg(
                    arg!(-i --"input" <PATH>)
                        .required(false)
                        .help("Path to a newline-delimited file of candidate URLs")
                        .value_parser(clap::value_parser!(std::path::PathBuf))
                        .default_value("README.txt"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("File the surviving URLs are written to (overwritten)")
                        .value_parser(clap::value_parser!(std::path::PathBuf))
                        .default_value("valid_repos.txt"),
                )
                .arg(
                    arg!(-t --"threads" <NUM_WORKERS>)
                        .required(false)
                        .help("The number of async worker 'threads' in the worker pool.")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("20"),
                )
                .arg(
                    arg!(--"timeout" <SECONDS>)
                        .required(false)
                        .help("Per-request timeout in seconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("5"),
                )
                .arg(
                    arg!(--"report" [PATH])
                        .required(false)
                        .help("Save a summary report to PATH (default: display to screen)")
                        .value_parser(clap::value_parser!(std::path::PathBuf))
                        .num_args(0..=1)
                        .default_missing_value("-"),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Summary report format: text, json")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                )
                .arg(
                    arg!(--"no-progress")
                        .required(false)
                        .help("Disable the progress spinner")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
}
