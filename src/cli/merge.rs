use std::path::Path;
use std::process::ExitCode;

use crate::config::Invocation;
use crate::domain::HomeError;
use crate::hooks::HookSet;
use crate::path;
use crate::settings::{SettingsDocument, SettingsError};

/// Line printed on stdout after a successful write.
pub(crate) const SUCCESS_MESSAGE: &str = "Settings merged successfully";

/// Fatal errors of a merge run. Loading the existing file never fails.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum MergeError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Home(#[from] HomeError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Settings(#[from] SettingsError),
}

/// Execute a merge: resolve the home directory, merge, and report.
///
/// Success prints a confirmation on stdout and exits 0. Any error is
/// rendered as a diagnostic on stderr and exits 1.
pub fn run(invocation: &Invocation) -> ExitCode {
    match path::home_dir()
        .map_err(MergeError::from)
        .and_then(|home| merge(invocation, &home))
    {
        Ok(()) => {
            println!("{SUCCESS_MESSAGE}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            ExitCode::FAILURE
        }
    }
}

/// Merge the fixed hook set into the existing settings and write the result.
///
/// `home` is substituted into the hook commands. The existing file is read
/// leniently; only the final write can fail.
pub fn merge(invocation: &Invocation, home: &Path) -> Result<(), MergeError> {
    let mut document = SettingsDocument::load_or_empty(&invocation.existing_file);

    let hooks = HookSet::new(home, &invocation.speech);
    tracing::debug!(
        home = %home.display(),
        speech = invocation.speech.is_enabled(),
        "built hook set"
    );

    document.replace_hooks(&hooks)?;
    if let Err(e) = document.write(&invocation.output_file) {
        tracing::warn!(path = %invocation.output_file.display(), error = %e, "write failed");
        return Err(e.into());
    }

    tracing::info!(
        path = %invocation.output_file.display(),
        keys = document.len(),
        "merged settings written"
    );
    Ok(())
}
