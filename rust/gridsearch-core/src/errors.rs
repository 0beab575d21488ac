use thiserror::Error;

/// Contract violations raised by a `Problem` implementation.
///
/// These stop the search at the point of detection. Running out of frontier is
/// not an error; see [`crate::search::Failure`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("action cost must be finite and non-negative, got {cost} for step {from} -> {to}")]
    InvalidCost { from: String, to: String, cost: f64 },
    #[error("heuristic must be finite and non-negative, got {value} at {state}")]
    InvalidHeuristic { state: String, value: f64 },
    #[error("hill-climbing value must not be NaN at {state}")]
    InvalidValue { state: String },
}

/// Failures while reading an ASCII layout.
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("layout has no start cell ('P')")]
    MissingStart,
    #[error("layout has no goal cell ('o')")]
    MissingGoal,
    #[error("layout is empty")]
    Empty,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
