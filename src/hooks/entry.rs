use serde::Serialize;

/// One matcher group under a lifecycle event in settings.json.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookEntry {
    /// Sub-event filter. Empty matches everything.
    pub matcher: String,
    pub hooks: Vec<HookCommand>,
}

/// A single hook action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookCommand {
    #[serde(rename = "type")]
    pub kind: HookKind,
    pub command: String,
}

/// The hook action type. Only shell commands are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HookKind {
    Command,
}

impl HookEntry {
    /// A match-all entry running a single command.
    pub fn command(command: impl Into<String>) -> Self {
        HookEntry {
            matcher: String::new(),
            hooks: vec![HookCommand {
                kind: HookKind::Command,
                command: command.into(),
            }],
        }
    }
}
