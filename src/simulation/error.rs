//! Error taxonomy for the simulation core
//!
//! Every fault here is fatal for the tick it occurs in: the caller gets the
//! error synchronously and the previous population snapshot stays the last
//! valid state. Nothing is retried or silently skipped.

use std::fmt;

use crate::simulation::states::NVec2;

#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Two distinct particles share an exact position during force
    /// evaluation; the inverse-square law is undefined there
    CoincidentPositions {
        i: usize, // index of the first particle of the pair
        j: usize, // index of the second particle of the pair
        at: NVec2, // the shared position
    },
    /// A fireworks burst was asked to pick an anchor from an empty
    /// population; only reachable with `min_count` 0 and replenishment off
    EmptyPopulationAnchorPick,
    /// Rejected at configuration time, before any tick runs
    InvalidConfiguration(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::CoincidentPositions { i, j, at } => write!(
                f,
                "particles {i} and {j} occupy the same position ({}, {})",
                at.x, at.y
            ),
            SimError::EmptyPopulationAnchorPick => {
                write!(f, "cannot pick a burst anchor from an empty population")
            }
            SimError::InvalidConfiguration(msg) => {
                write!(f, "invalid configuration: {msg}")
            }
        }
    }
}

impl std::error::Error for SimError {}
