use std::path::PathBuf;

use crate::domain::Speech;

/// Everything one run needs, taken from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Settings file to read. May be missing or invalid.
    pub existing_file: PathBuf,
    /// File to write the merged settings to.
    pub output_file: PathBuf,
    pub speech: Speech,
}

impl Invocation {
    /// Build from the positional arguments. `mode` and `voice` are the raw
    /// optional third and fourth arguments.
    pub fn new(
        existing_file: impl Into<PathBuf>,
        output_file: impl Into<PathBuf>,
        mode: Option<&str>,
        voice: Option<&str>,
    ) -> Self {
        Invocation {
            existing_file: existing_file.into(),
            output_file: output_file.into(),
            speech: Speech::from_args(mode, voice),
        }
    }
}
