use cubepuzzle::Command;
use serde::{Deserialize, Serialize};

/// Binding from a key to a command.
///
/// Key names are compared case-insensitively, so `Space`, `space`, and
/// `SPACE` are the same key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: String,
    pub command: Command,
}
impl Keybind {
    pub fn new(key: impl Into<String>, command: impl Into<Command>) -> Self {
        Self {
            key: key.into(),
            command: command.into(),
        }
    }

    pub fn matches(&self, key: &str) -> bool {
        self.key.eq_ignore_ascii_case(key)
    }
}
