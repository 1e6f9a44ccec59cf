//! Release packager binary for the CodeComet CLI.
//!
//! Resolves the release tag at HEAD, cross-compiles the CLI for every
//! configured platform, and packages each build into a distributable
//! archive named with the tag and platform.

use codecomet_release::cli;
use codecomet_release::cli::OutputManager;
use std::process;

fn main() {
    env_logger::init();

    match cli::run() {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            // Never quiet for fatal errors
            let output = OutputManager::new(false);
            output.error(&format!("Fatal error: {e}"));

            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                output.println("\n💡 Recovery suggestions:");
                for suggestion in suggestions {
                    output.indent(&suggestion);
                }
            }

            process::exit(1);
        }
    }
}
