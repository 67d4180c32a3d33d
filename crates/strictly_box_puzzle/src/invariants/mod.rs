//! Properties every puzzle state must keep.
//!
//! Roll invariants run as the postcondition of each roll; finished
//! invariants run once when the fifth turn concludes.

#[cfg(kani)]
mod verification;

/// A property checked against a state after a transition.
pub trait Invariant<S> {
    /// Whether `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// One-line statement of the property, used in violation reports.
    fn description() -> &'static str;
}

/// A property that did not hold.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Statement of the broken property.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a violation with the given description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Invariants checked together, in tuple order.
pub trait InvariantSet<S> {
    /// Collects every violated member, or `Ok(())` if all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($member:ident),+) => {
        impl<S, $($member),+> InvariantSet<S> for ($($member,)+)
        where
            $($member: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<InvariantViolation> = [
                    $(($member::holds(state), $member::description()),)+
                ]
                .into_iter()
                .filter(|(holds, _)| !holds)
                .map(|(_, description)| InvariantViolation::new(description))
                .collect();

                if violations.is_empty() { Ok(()) } else { Err(violations) }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);

pub mod domino_participants;
pub mod final_score;
pub mod roll_path;

pub use domino_participants::DominoParticipantsInvariant;
pub use final_score::{CompleteHistoryInvariant, ScoreMatchesGridInvariant};
pub use roll_path::{ContiguousPathInvariant, StartRolledFirstInvariant};

/// Invariants that hold for every stage produced by a roll.
pub type RollInvariants = (
    StartRolledFirstInvariant,
    ContiguousPathInvariant,
    DominoParticipantsInvariant,
);

/// Invariants that hold for every finished session.
pub type FinishedInvariants = (ScoreMatchesGridInvariant, CompleteHistoryInvariant);
