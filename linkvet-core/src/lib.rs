pub mod error;
pub mod input;
pub mod output;
pub mod report;
pub mod validate;

pub use error::ValidateError;
pub use validate::{ValidateOptions, ValidateSummary, execute_validation};

use colored::Colorize;

pub fn print_banner() {
    let banner = r#"
 _ _       _             _
| (_)_ __ | | ____   ____| |_
| | | '_ \| |/ /\ \ / / _ \ __|
| | | | | |   <  \ V /  __/ |_
|_|_|_| |_|_|\_\  \_/ \___|\__|
"#;
    println!("{}", banner.bright_cyan());
    println!(
        "  {} v{}\n",
        "dead link filter".bright_white(),
        env!("CARGO_PKG_VERSION")
    );
}
