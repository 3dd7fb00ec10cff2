use crate::core::curve::CurveError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum AssemblyError {
    #[error("Mechanism '{label}' has {coordinates} coordinates but {levels} energy levels")]
    LengthMismatch {
        label: String,
        coordinates: usize,
        levels: usize,
    },

    #[error("Mechanism '{label}' coordinates must be strictly increasing (violated at index {index})")]
    NonIncreasingCoordinates { label: String, index: usize },

    #[error("Mechanism '{label}' transition-state index {index} is out of range for {len} levels")]
    TransitionStateOutOfRange {
        label: String,
        index: usize,
        len: usize,
    },

    #[error("Mechanism '{label}' transition-state index {index} needs a stable neighbor on both sides")]
    TransitionStateAtBoundary { label: String, index: usize },

    #[error("Mechanism '{label}' has adjacent transition-state indices {first} and {second}")]
    AdjacentTransitionStates {
        label: String,
        first: usize,
        second: usize,
    },

    #[error(
        "Mechanism '{label}': marker width {marker_width} leaves no room for the transition curve at index {index}"
    )]
    MarkerOverlapsTransition {
        label: String,
        index: usize,
        marker_width: f64,
    },

    #[error("Transition curve interpolation failed: {source}")]
    Curve {
        #[from]
        source: CurveError,
    },
}
