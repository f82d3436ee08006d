//! cli
//!
//! Command-line interface layer.
//!
//! # Responsibilities
//!
//! - Parse global flags
//! - Install the Ctrl-C handler
//! - Run the session on stdin/stdout and turn cancellation into a farewell
//!
//! # Interruption
//!
//! Two paths end a run early, both with the farewell and a success status:
//! Ctrl-C, handled on the signal thread because a blocked read cannot be
//! unwound, and end of input, which arrives here as
//! [`PromptError::Cancelled`].

pub mod args;

pub use args::Cli;

use std::io::{self, Write};

use anyhow::{Context as _, Result};

use crate::engine::{self, FAREWELL};
use crate::ui::output;
use crate::ui::prompts::{Console, PromptError};

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let ctx = engine::Context { debug: cli.debug };

    ctrlc::set_handler(|| {
        // A closed stdout must not keep us from exiting.
        let _ = writeln!(io::stdout(), "{}", FAREWELL);
        std::process::exit(0);
    })
    .context("failed to install Ctrl-C handler")?;

    // Stdout stays unlocked so the handler can print while a read blocks.
    let mut console = Console::new(io::stdin().lock(), io::stdout());

    match engine::run(&ctx, &mut console) {
        Ok(session) => {
            output::debug(
                format!("session finished with {}", session.license.code),
                ctx.verbosity(),
            );
            Ok(())
        }
        Err(PromptError::Cancelled) => {
            console.say(FAREWELL)?;
            Ok(())
        }
        Err(err) => Err(err).context("questionnaire failed"),
    }
}
