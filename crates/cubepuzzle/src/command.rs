//! Commands accepted from the input layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Move, Rotation};

/// Error returned when parsing a [`Command`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    /// The token is not a move, rotation, or other command.
    #[error("unknown command {0:?}")]
    Unknown(String),
}

/// Discrete input event for a puzzle.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum Command {
    /// Turn one outer layer.
    Move(Move),
    /// Turn the whole puzzle.
    Rotate(Rotation),
    /// Apply a random scramble.
    Scramble,
    /// Return to the solved state.
    Reset,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Move(m) => write!(f, "{m}"),
            Command::Rotate(r) => write!(f, "{r}"),
            Command::Scramble => write!(f, "scramble"),
            Command::Reset => write!(f, "reset"),
        }
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(m) = s.parse() {
            Ok(Command::Move(m))
        } else if let Ok(r) = s.parse() {
            Ok(Command::Rotate(r))
        } else {
            match s {
                "scramble" => Ok(Command::Scramble),
                "reset" => Ok(Command::Reset),
                _ => Err(ParseCommandError::Unknown(s.to_owned())),
            }
        }
    }
}

impl TryFrom<String> for Command {
    type Error = ParseCommandError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
impl From<Command> for String {
    fn from(value: Command) -> Self {
        value.to_string()
    }
}

impl From<Move> for Command {
    fn from(value: Move) -> Self {
        Command::Move(value)
    }
}
impl From<Rotation> for Command {
    fn from(value: Rotation) -> Self {
        Command::Rotate(value)
    }
}

/// Parses a whitespace-separated sequence of commands, such as
/// `"R U R' U' scramble"`.
pub fn parse_sequence(s: &str) -> Result<Vec<Command>, ParseCommandError> {
    s.split_whitespace().map(str::parse).collect()
}
