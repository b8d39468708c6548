//! Structured room-name parsing.
//!
//! Room names follow the `{floor}{room}-{block}` convention: the digits
//! are a floor number of any length followed by a two-digit room number,
//! then a single block letter. `"106-B block"` is room 06 in block B on
//! floor 1; `"1006-b block"` is the same room on floor 10.

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

fn room_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^\s*(\d{3,})\s*-\s*([A-Za-z])\s*(?:blok|block)\s*$")
            .expect("room name pattern is valid")
    })
}

/// Components parsed from a structured room name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomName {
    /// Floor number (one or more leading digits).
    pub floor_number: u32,
    /// Two-digit room number, zero padding preserved.
    pub room_number: String,
    /// Block letter, uppercased.
    pub block: char,
}

impl RoomName {
    /// Parse a room name. Returns `None` when the name does not follow
    /// the convention; free-form names are common and not an error.
    pub fn parse(name: &str) -> Option<Self> {
        let captures = room_name_pattern().captures(name)?;
        let digits = captures.get(1)?.as_str();
        let split = digits.len().checked_sub(2)?;

        let floor_number = digits[..split].parse().ok()?;
        let room_number = digits[split..].to_string();
        let block = captures.get(2)?.as_str().chars().next()?.to_ascii_uppercase();

        Some(Self {
            floor_number,
            room_number,
            block,
        })
    }

    /// Concatenated floor and room digits, e.g. `"1006"` for floor 10
    /// room 06.
    pub fn full_number(&self) -> String {
        format!("{}{}", self.floor_number, self.room_number)
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}-{} block",
            self.floor_number, self.room_number, self.block
        )
    }
}
