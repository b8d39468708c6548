//! Turn-by-turn instruction synthesis.
//!
//! A pure transform over a computed route: geometry in, annotated route
//! out. Bearings come from `atan2` over the floor-image coordinates, so
//! "left" and "right" are relative to the walker's direction of travel.

use crate::types::{
    Instruction, PathStep, RoutePath, TransitMode, TurnDirection, VerticalDirection, WaypointKind,
};

/// Annotate a route with instructions.
///
/// Paths of one step or fewer are returned untouched. Every other step
/// receives an instruction, after which a smoothing pass clears
/// "continue straight" repeats so long corridors read as a single
/// instruction.
pub fn annotate(path: RoutePath) -> RoutePath {
    let RoutePath {
        mut steps,
        total_distance,
    } = path;

    if steps.len() <= 1 {
        return RoutePath {
            steps,
            total_distance,
        };
    }

    let last = steps.len() - 1;
    for i in 0..steps.len() {
        let instruction = if i == 0 {
            Instruction::Start
        } else if i == last {
            Instruction::Arrive
        } else {
            interior_instruction(&steps, i)
        };
        steps[i].instruction = Some(instruction);
    }

    smooth(&mut steps);

    RoutePath {
        steps,
        total_distance,
    }
}

/// Instruction for a step that is neither first nor last.
fn interior_instruction(steps: &[PathStep], i: usize) -> Instruction {
    let step = &steps[i];
    let prev = &steps[i - 1];
    let next = &steps[i + 1];

    // About to change floors: the vertical instruction wins outright.
    if next.floor != step.floor {
        if let Some(mode) = transit_mode(step.kind) {
            let direction = if next.floor > step.floor {
                VerticalDirection::Up
            } else {
                VerticalDirection::Down
            };
            return Instruction::Vertical { mode, direction };
        }
    }

    let incoming = bearing(prev, step);
    let outgoing = bearing(step, next);
    let delta = (outgoing - incoming).to_degrees().rem_euclid(360.0);

    let direction = if !(45.0..=315.0).contains(&delta) {
        TurnDirection::Straight
    } else if delta < 135.0 {
        TurnDirection::Left
    } else if delta > 225.0 {
        TurnDirection::Right
    } else {
        TurnDirection::Back
    };

    // Just stepped off stairs/elevator onto a new floor: tell the walker
    // to re-orient into the corridor first. Does not apply to U-turns.
    let exiting_transit = direction != TurnDirection::Back
        && prev.kind.is_vertical_transit()
        && i >= 2
        && steps[i - 2].floor != prev.floor;

    Instruction::Turn {
        direction,
        exiting_transit,
    }
}

/// Bearing of the segment between two steps, in radians.
fn bearing(from: &PathStep, to: &PathStep) -> f64 {
    let (fx, fy) = from.position();
    let (tx, ty) = to.position();
    (ty - fy).atan2(tx - fx)
}

fn transit_mode(kind: WaypointKind) -> Option<TransitMode> {
    match kind {
        WaypointKind::Stairs => Some(TransitMode::Stairs),
        WaypointKind::Elevator => Some(TransitMode::Elevator),
        _ => None,
    }
}

/// Clear "continue straight" steps that verbatim-repeat the last surfaced
/// instruction. The tracker only advances on steps that still carry an
/// instruction afterwards.
fn smooth(steps: &mut [PathStep]) {
    let plain_straight = Instruction::turn(TurnDirection::Straight);
    let mut last_surfaced: Option<Instruction> = None;

    for step in steps.iter_mut() {
        match &step.instruction {
            Some(instr) if *instr == plain_straight && last_surfaced.as_ref() == Some(instr) => {
                step.instruction = None;
            }
            Some(instr) => {
                last_surfaced = Some(instr.clone());
            }
            None => {}
        }
    }
}
