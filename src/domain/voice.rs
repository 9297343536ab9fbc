/// A voice identifier forwarded to the hook scripts.
///
/// Kept verbatim: no trimming, no case folding. The only rule is that it is
/// non-empty, so `--voice` never renders without a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VoiceName(pub(crate) String);

impl VoiceName {
    /// Create from a raw argument. Returns `None` for the empty string.
    pub fn new(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            None
        } else {
            Some(VoiceName(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VoiceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
