pub mod config;
pub mod domain;
pub mod hooks;
pub mod settings;

pub(crate) mod cli;
pub(crate) mod logging;
pub(crate) mod path;

pub use cli::merge::{merge, MergeError};
pub use logging::init_logging;

/// Run the merge for a parsed invocation and report the outcome.
///
/// This is the binary entry point. Prints the confirmation on stdout or a
/// diagnostic on stderr and returns the process exit status. Library callers
/// that want the `Result` should use [`merge`] with an explicit home directory.
pub fn run_merge(invocation: &config::Invocation) -> std::process::ExitCode {
    cli::merge::run(invocation)
}
