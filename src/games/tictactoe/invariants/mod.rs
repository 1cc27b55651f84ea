//! Consistency checks between the board and the move history.
//!
//! `Game` runs `EngineInvariants` after every accepted move in debug builds.

/// A property of `S` the engine keeps true across moves.
pub trait Invariant<S> {
    /// Whether `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// Message reported when the property fails.
    fn description() -> &'static str;
}

/// A failed check, carrying the invariant's description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// What was expected to hold.
    pub description: String,
}

impl InvariantViolation {
    fn from_description(description: &'static str) -> Self {
        Self {
            description: description.to_string(),
        }
    }
}

/// Invariants checked as one group, implemented for pairs.
pub trait InvariantSet<S> {
    /// Runs every check and collects the ones that fail.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, A, B> InvariantSet<S> for (A, B)
where
    A: Invariant<S>,
    B: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (A::holds(state), A::description()),
            (B::holds(state), B::description()),
        ]
        .into_iter()
        .filter(|(held, _)| !held)
        .map(|(_, description)| InvariantViolation::from_description(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod history_consistent;
pub mod history_unique;

pub use history_consistent::HistoryConsistentInvariant;
pub use history_unique::HistoryUniqueInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (HistoryConsistentInvariant, HistoryUniqueInvariant);
