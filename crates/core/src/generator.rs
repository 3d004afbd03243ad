//! Random arithmetic challenge generation.

use crate::model::{ChallengeSet, Difficulty, Operation, PROBLEMS_PER_OPERATION, Problem};
use crate::random::RandomSource;

/// Smallest minuend a subtraction problem can start from.
const SUBTRACT_BASE: u32 = 10;

/// The subtrahend is drawn from `[0, minuend - SUBTRACT_MARGIN)`.
const SUBTRACT_MARGIN: u32 = 5;

/// Generates the ordered challenge set for a session.
///
/// Produces three additions, then three subtractions, then three
/// multiplications, with operand ranges taken from `difficulty`.
pub fn generate<R: RandomSource + ?Sized>(difficulty: Difficulty, rng: &mut R) -> ChallengeSet {
    let problems = Operation::ALL
        .into_iter()
        .flat_map(|operation| std::iter::repeat_n(operation, PROBLEMS_PER_OPERATION))
        .map(|operation| generate_problem(operation, difficulty, &mut *rng))
        .collect();
    ChallengeSet::from_generated(difficulty, problems)
}

/// Generates a challenge set from the thread-local generator.
#[must_use]
pub fn generate_with_thread_rng(difficulty: Difficulty) -> ChallengeSet {
    generate(difficulty, &mut rand::rng())
}

fn generate_problem<R: RandomSource + ?Sized>(
    operation: Operation,
    difficulty: Difficulty,
    rng: &mut R,
) -> Problem {
    match operation {
        Operation::Add => {
            let range = difficulty.add_subtract_range();
            let left = rng.below(range);
            let right = rng.below(range);
            Problem::new(operation, left, right)
        }
        Operation::Subtract => {
            let range = difficulty.add_subtract_range();
            let left = rng.below(range) + SUBTRACT_BASE;
            // left >= SUBTRACT_BASE, so the bound never drops below 5.
            let right = rng.below(left.saturating_sub(SUBTRACT_MARGIN));
            Problem::new(operation, left, right)
        }
        Operation::Multiply => {
            let range = difficulty.multiply_range();
            let left = rng.below(range) + 1;
            let right = rng.below(range) + 1;
            Problem::new(operation, left, right)
        }
    }
}
