use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use merge_settings::config::Invocation;

/// Merge Claude Code lifecycle hooks into an existing settings.json.
///
/// Every key other than `hooks` is copied through untouched.
#[derive(Debug, Parser)]
#[command(name = "merge-settings", version, about)]
struct Cli {
    /// Existing settings file (missing or invalid files count as empty)
    existing_file: PathBuf,

    /// Where to write the merged settings
    output_file: PathBuf,

    /// Notification mode; only `speech` has an effect
    #[arg(allow_hyphen_values = true)]
    mode: Option<String>,

    /// Voice passed to the hook scripts as `--voice <VOICE>` in speech mode
    #[arg(allow_hyphen_values = true)]
    voice: Option<String>,
}

fn main() -> ExitCode {
    merge_settings::init_logging();
    let cli = Cli::parse();

    let invocation = Invocation::new(
        cli.existing_file,
        cli.output_file,
        cli.mode.as_deref(),
        cli.voice.as_deref(),
    );
    merge_settings::run_merge(&invocation)
}
