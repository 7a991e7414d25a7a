//! First-class invariants over the game history.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. They are testable independently and checked by the engine in
//! debug builds.

use super::GameHistory;
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for 2- and 3-tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(held, _)| !held)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ]
        .into_iter()
        .filter(|(held, _)| !held)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_marks;
pub mod initial_board;
pub mod single_cell_delta;

pub use alternating_marks::AlternatingMarksInvariant;
pub use initial_board::InitialBoardInvariant;
pub use single_cell_delta::SingleCellDeltaInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    InitialBoardInvariant,
    SingleCellDeltaInvariant,
    AlternatingMarksInvariant,
);

/// Asserts the history invariants (panics on violation in debug builds).
///
/// Violations are programming errors, not user errors, so they are logged
/// and asserted rather than returned.
#[instrument(skip(history), fields(len = history.len()))]
pub fn assert_invariants(history: &GameHistory) {
    if let Err(violations) = HistoryInvariants::check_all(history) {
        for violation in &violations {
            warn!(description = %violation.description, "History invariant violated");
        }
        debug_assert!(violations.is_empty(), "History invariants violated: {violations:?}");
    }
}
