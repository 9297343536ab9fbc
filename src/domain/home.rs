/// Error from resolving the invoking user's home directory.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum HomeError {
    /// Neither `$HOME` nor the platform account database gave a directory.
    #[error("cannot determine the home directory")]
    #[diagnostic(
        code(merge_settings::home_not_found),
        help("set $HOME to the directory that contains .claude/hooks")
    )]
    NotFound,
}
