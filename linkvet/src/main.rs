use colored::Colorize;
use linkvet::command_argument_builder;
use linkvet::handlers::handle_check;
use linkvet_core::print_banner;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    let outcome = match chosen_command.subcommand() {
        Some(("check", sub_matches)) => handle_check(sub_matches, quiet).await,
        None => {
            // No subcommand provided, just show the banner
            return;
        }
        _ => unreachable!("clap should ensure we don't get here"),
    };

    if let Err(e) = outcome {
        eprintln!("{} {:#}", "✗".red().bold(), e);
        std::process::exit(1);
    }
}
