use crate::model::difficulty::Difficulty;
use crate::model::problem::Problem;

/// Number of problems generated for each operation kind.
pub const PROBLEMS_PER_OPERATION: usize = 3;

/// Length of a generated challenge set (three operation kinds).
pub const CHALLENGE_COUNT: usize = PROBLEMS_PER_OPERATION * 3;

/// Ordered problems for one session.
///
/// Insertion order is presentation order. Sets only come out of the
/// generator, so they always hold `CHALLENGE_COUNT` problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeSet {
    difficulty: Difficulty,
    problems: Vec<Problem>,
}

impl ChallengeSet {
    /// Wraps generator output, which always holds `CHALLENGE_COUNT` problems.
    pub(crate) fn from_generated(difficulty: Difficulty, problems: Vec<Problem>) -> Self {
        debug_assert_eq!(problems.len(), CHALLENGE_COUNT);
        Self {
            difficulty,
            problems,
        }
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.problems.len()
    }

    /// Always false for generated sets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.problems.len().saturating_sub(1)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Problem> {
        self.problems.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Problem> {
        self.problems.iter()
    }

    #[must_use]
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Operation;

    fn set_of(difficulty: Difficulty) -> ChallengeSet {
        let problems = Operation::ALL
            .iter()
            .flat_map(|&op| (1..=3).map(move |n| Problem::new(op, n + 5, n)))
            .collect();
        ChallengeSet::from_generated(difficulty, problems)
    }

    #[test]
    fn set_preserves_order() {
        let set = set_of(Difficulty::Medium);

        assert_eq!(set.len(), CHALLENGE_COUNT);
        assert!(!set.is_empty());
        assert_eq!(set.last_index(), CHALLENGE_COUNT - 1);
        assert_eq!(set.difficulty(), Difficulty::Medium);
        assert_eq!(set.get(0).unwrap().answer(), 7);
        assert_eq!(set.get(3).unwrap().answer(), 5);
        assert_eq!(set.get(8).unwrap().answer(), 24);
        assert!(set.get(CHALLENGE_COUNT).is_none());
    }

    #[test]
    fn iteration_matches_indexing() {
        let set = set_of(Difficulty::Hard);
        for (index, problem) in set.iter().enumerate() {
            assert_eq!(set.get(index), Some(problem));
        }
        assert_eq!(set.problems().len(), set.len());
    }
}
