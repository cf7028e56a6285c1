//! Properties a [`Game`](crate::Game) upholds after every accepted move.
//!
//! Each property is a zero-sized type implementing [`Invariant`] over the
//! game. The engine checks [`GameInvariants`] in debug builds; tests check
//! any tuple of them directly.

use derive_more::Display;

/// A property of `S` that should never be false.
pub trait Invariant<S> {
    /// Returns true if `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// One-line statement of the property, used in violation reports.
    fn description() -> &'static str;
}

/// A property that failed, named by its description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// The failed property's [`Invariant::description`].
    pub description: &'static str,
}

impl InvariantViolation {
    /// Wraps a property description.
    pub fn new(description: &'static str) -> Self {
        Self { description }
    }
}

/// Several invariants checked in one pass.
pub trait InvariantSet<S> {
    /// Checks every member and returns all that failed, in tuple order.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv: Invariant<S>),+> InvariantSet<S> for ($($inv,)+) {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<_> = [$(($inv::holds(state), $inv::description())),+]
                    .into_iter()
                    .filter(|(held, _)| !held)
                    .map(|(_, description)| InvariantViolation::new(description))
                    .collect();
                if violations.is_empty() { Ok(()) } else { Err(violations) }
            }
        }
    };
}

impl_invariant_set!(A);
impl_invariant_set!(A, B);
impl_invariant_set!(A, B, C);

mod alternating_turns;
mod game_over;
mod write_once;

pub use alternating_turns::AlternatingTurns;
pub use game_over::GameOverConsistent;
pub use write_once::WriteOnceBoard;

/// Every game invariant, as one composable set.
pub type GameInvariants = (WriteOnceBoard, AlternatingTurns, GameOverConsistent);
