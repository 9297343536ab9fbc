use std::path::Path;

use serde::Serialize;

use super::HookEntry;
use crate::domain::Speech;

/// Launcher prefix for every generated hook command.
pub const RUNNER: &str = "npx tsx";

/// Directory under the home directory holding the hook scripts.
const HOOKS_DIR: &str = ".claude/hooks";

/// A hook script and the fixed arguments it is launched with.
struct HookScript {
    file_name: &'static str,
    args: &'static str,
}

const NOTIFICATION: HookScript = HookScript {
    file_name: "notification.ts",
    args: " --notify",
};

const STOP: HookScript = HookScript {
    file_name: "stop.ts",
    args: " --chat",
};

const SUBAGENT_STOP: HookScript = HookScript {
    file_name: "subagent_stop.ts",
    args: "",
};

/// The full `hooks` value written into settings.json.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct HookSet {
    pub pre_tool_use: Vec<HookEntry>,
    pub post_tool_use: Vec<HookEntry>,
    pub notification: Vec<HookEntry>,
    pub stop: Vec<HookEntry>,
    pub subagent_stop: Vec<HookEntry>,
}

impl HookSet {
    /// Build the fixed hook fragment for a user.
    ///
    /// Tool-use events get no hooks. Notification, Stop and SubagentStop each
    /// run their script from `<home>/.claude/hooks`, with the speech flags
    /// appended.
    pub fn new(home: &Path, speech: &Speech) -> Self {
        let home = home.display().to_string();
        let suffix = speech.flag_suffix();
        let entry = |script: &HookScript| {
            HookEntry::command(render_command(&home, script, &suffix))
        };

        HookSet {
            pre_tool_use: Vec::new(),
            post_tool_use: Vec::new(),
            notification: vec![entry(&NOTIFICATION)],
            stop: vec![entry(&STOP)],
            subagent_stop: vec![entry(&SUBAGENT_STOP)],
        }
    }

    /// All generated command strings, in event order.
    #[cfg(test)]
    pub(crate) fn commands(&self) -> impl Iterator<Item = &str> {
        [
            &self.pre_tool_use,
            &self.post_tool_use,
            &self.notification,
            &self.stop,
            &self.subagent_stop,
        ]
        .into_iter()
        .flatten()
        .flat_map(|entry| entry.hooks.iter())
        .map(|hook| hook.command.as_str())
    }
}

fn render_command(home: &str, script: &HookScript, suffix: &str) -> String {
    format!(
        "{RUNNER} {home}/{HOOKS_DIR}/{file}{args}{suffix}",
        file = script.file_name,
        args = script.args,
    )
}
