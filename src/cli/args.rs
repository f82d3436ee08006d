//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! The questionnaire takes no positional arguments or subcommands. The
//! flags below never change what is written to stdout:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--debug`: Write diagnostics to stderr

use clap::Parser;

/// cc-advisor - Pick a Creative Commons license and write its attribution
#[derive(Parser, Debug)]
#[command(name = "cc-advisor")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Answer two questions (adaptations, commercial use) and the matching \
                  CC BY 4.0 variant is printed with its URL. Press Ctrl-C or Ctrl-D at \
                  any prompt to quit. Positional arguments are not accepted."
)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub debug: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}
