use serde::{Deserialize, Serialize};

//
// ─── OPERATION ────────────────────────────────────────────────────────────────
//

/// Arithmetic operation kind, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => 'x',
        }
    }

    #[must_use]
    pub fn apply(self, left: u32, right: u32) -> i64 {
        let (left, right) = (i64::from(left), i64::from(right));
        match self {
            Operation::Add => left + right,
            Operation::Subtract => left - right,
            Operation::Multiply => left * right,
        }
    }
}

//
// ─── PROBLEM ──────────────────────────────────────────────────────────────────
//

/// A single arithmetic challenge.
///
/// Immutable once built; the answer and every display text are derived
/// from the operation and operands at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    operation: Operation,
    left: u32,
    right: u32,
    answer: i64,
    question: String,
    hint: String,
    reward: String,
}

impl Problem {
    #[must_use]
    pub fn new(operation: Operation, left: u32, right: u32) -> Self {
        let answer = operation.apply(left, right);
        let symbol = operation.symbol();
        let question = format!("How much is {left} {symbol} {right}?");
        let (hint, reward) = match operation {
            Operation::Add => (
                format!("Add {left} and {right} together"),
                format!("You earned {answer} coins! 💰"),
            ),
            Operation::Subtract => (
                format!("Take {right} away from {left}"),
                "A secret key unlocked! 🔑".to_owned(),
            ),
            Operation::Multiply => (
                format!("Think of groups of {left}"),
                "Fly on to the next level! 🚀".to_owned(),
            ),
        };

        Self {
            operation,
            left,
            right,
            answer,
            question,
            hint,
            reward,
        }
    }

    // Accessors
    #[must_use]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    #[must_use]
    pub fn operands(&self) -> (u32, u32) {
        (self.left, self.right)
    }

    #[must_use]
    pub fn answer(&self) -> i64 {
        self.answer
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    #[must_use]
    pub fn reward(&self) -> &str {
        &self.reward
    }

    /// Returns true if `candidate` is the correct answer.
    #[must_use]
    pub fn is_answered_by(&self, candidate: i64) -> bool {
        self.answer == candidate
    }
}
