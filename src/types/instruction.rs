//! Turn-by-turn instruction types.
//!
//! Instructions are structured data; the `Display` impl renders the
//! human-readable phrase the kiosk UI shows. Equality on the enum is what
//! drives redundancy smoothing, so two "continue straight" steps compare
//! equal regardless of where they occur.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a turn relative to the walker's current heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnDirection {
    /// Keep walking in the same direction.
    Straight,
    /// Turn left.
    Left,
    /// Turn right.
    Right,
    /// Reverse direction (U-turn).
    Back,
}

/// Direction of travel through a vertical transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalDirection {
    /// To a higher floor.
    Up,
    /// To a lower floor.
    Down,
}

/// Means of moving between floors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitMode {
    /// A stairwell.
    Stairs,
    /// An elevator.
    Elevator,
}

/// An instruction attached to one step of a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Instruction {
    /// Departure marker on the first step.
    Start,
    /// Arrival marker on the last step.
    Arrive,
    /// Take stairs or an elevator to another floor.
    Vertical {
        /// Stairs or elevator.
        mode: TransitMode,
        /// Up or down, by floor-id comparison.
        direction: VerticalDirection,
    },
    /// Turn (or continue) at a corridor point.
    Turn {
        /// Which way to go.
        direction: TurnDirection,
        /// Whether the walker has just stepped off a stairwell/elevator
        /// onto a new floor and should re-orient into the corridor first.
        exiting_transit: bool,
    },
}

impl Instruction {
    /// Plain turn instruction with no corridor-exit prefix.
    pub fn turn(direction: TurnDirection) -> Self {
        Self::Turn {
            direction,
            exiting_transit: false,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "Start here"),
            Self::Arrive => write!(f, "You have arrived at your destination"),
            Self::Vertical { mode, direction } => {
                let mode = match mode {
                    TransitMode::Stairs => "stairs",
                    TransitMode::Elevator => "elevator",
                };
                let direction = match direction {
                    VerticalDirection::Up => "up",
                    VerticalDirection::Down => "down",
                };
                write!(f, "Take the {mode} {direction}")
            }
            Self::Turn {
                direction,
                exiting_transit,
            } => {
                let phrase = match direction {
                    TurnDirection::Straight => "continue straight",
                    TurnDirection::Left => "turn left",
                    TurnDirection::Right => "turn right",
                    TurnDirection::Back => "turn around",
                };
                if *exiting_transit {
                    write!(f, "Exit into the corridor and {phrase}")
                } else {
                    // Capitalize the standalone phrase.
                    let mut chars = phrase.chars();
                    match chars.next() {
                        Some(first) => write!(f, "{}{}", first.to_uppercase(), chars.as_str()),
                        None => Ok(()),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_phrases() {
        assert_eq!(Instruction::Start.to_string(), "Start here");
        assert_eq!(
            Instruction::turn(TurnDirection::Left).to_string(),
            "Turn left"
        );
        assert_eq!(
            Instruction::Vertical {
                mode: TransitMode::Elevator,
                direction: VerticalDirection::Down,
            }
            .to_string(),
            "Take the elevator down"
        );
        assert_eq!(
            Instruction::Turn {
                direction: TurnDirection::Right,
                exiting_transit: true,
            }
            .to_string(),
            "Exit into the corridor and turn right"
        );
    }

    #[test]
    fn test_smoothing_equality_distinguishes_prefix() {
        // A plain "continue straight" must not compare equal to the
        // corridor-exit variant, otherwise smoothing would clear it.
        let plain = Instruction::turn(TurnDirection::Straight);
        let exiting = Instruction::Turn {
            direction: TurnDirection::Straight,
            exiting_transit: true,
        };
        assert_ne!(plain, exiting);
    }
}
