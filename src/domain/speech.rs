use super::VoiceName;

/// The mode argument that turns speech on. Any other value is ignored.
pub const SPEECH_MODE: &str = "speech";

/// Speech options appended to the notification-style hook commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Speech {
    /// No speech flags.
    #[default]
    Off,
    /// `--speak`, plus `--voice <name>` when a voice was given.
    On { voice: Option<VoiceName> },
}

impl Speech {
    /// Interpret the optional mode and voice arguments.
    ///
    /// Only a mode of exactly `"speech"` enables speech; the voice is
    /// ignored otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use merge_settings::domain::Speech;
    ///
    /// assert_eq!(Speech::from_args(Some("speech"), Some("alloy")).flag_suffix(), " --speak --voice alloy");
    /// assert_eq!(Speech::from_args(Some("speech"), None).flag_suffix(), " --speak");
    /// assert_eq!(Speech::from_args(Some("quiet"), Some("alloy")).flag_suffix(), "");
    /// ```
    pub fn from_args(mode: Option<&str>, voice: Option<&str>) -> Self {
        if mode != Some(SPEECH_MODE) {
            return Speech::Off;
        }
        Speech::On {
            voice: voice.and_then(VoiceName::new),
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Speech::On { .. })
    }

    #[cfg(test)]
    pub(crate) fn voice(&self) -> Option<&VoiceName> {
        match self {
            Speech::On { voice } => voice.as_ref(),
            Speech::Off => None,
        }
    }

    /// The suffix appended to each notification-style command, including
    /// its leading space. Empty when speech is off.
    pub fn flag_suffix(&self) -> String {
        match self {
            Speech::Off => String::new(),
            Speech::On { voice: None } => " --speak".to_string(),
            Speech::On { voice: Some(voice) } => format!(" --speak --voice {voice}"),
        }
    }
}
