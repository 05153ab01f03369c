//! Arithmetic problem generation.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, GameRngState};

/// One of the four operation kinds a problem can use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations, chosen between uniformly.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Symbol used in the problem text.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
        }
    }

    /// Evaluate `lhs op rhs`.
    ///
    /// Returns `None` for division that is not exact or divides by zero.
    #[must_use]
    pub fn apply(self, lhs: i32, rhs: i32) -> Option<i32> {
        match self {
            Operation::Add => lhs.checked_add(rhs),
            Operation::Subtract => lhs.checked_sub(rhs),
            Operation::Multiply => lhs.checked_mul(rhs),
            Operation::Divide => {
                if rhs != 0 && lhs % rhs == 0 {
                    Some(lhs / rhs)
                } else {
                    None
                }
            }
        }
    }

    /// Generate a problem of this kind.
    ///
    /// Operand ranges keep every answer a non-negative integer:
    /// - add: both operands 5..=20
    /// - subtract: 10..=25 minus 3..=10
    /// - multiply: both operands 2..=12
    /// - divide: divisor and quotient 2..=10, dividend is their product
    pub fn generate(self, rng: &mut GameRng) -> Problem {
        match self {
            Operation::Add => {
                let a = rng.gen_range(5..=20);
                let b = rng.gen_range(5..=20);
                Problem::new(self, a, b, a + b)
            }
            Operation::Subtract => {
                let a = rng.gen_range(10..=25);
                let b = rng.gen_range(3..=10);
                Problem::new(self, a, b, a - b)
            }
            Operation::Multiply => {
                let a = rng.gen_range(2..=12);
                let b = rng.gen_range(2..=12);
                Problem::new(self, a, b, a * b)
            }
            Operation::Divide => {
                let divisor = rng.gen_range(2..=10);
                let quotient = rng.gen_range(2..=10);
                Problem::new(self, divisor * quotient, divisor, quotient)
            }
        }
    }
}

/// A posed problem and its answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub operation: Operation,
    pub lhs: i32,
    pub rhs: i32,
    pub answer: i32,
}

impl Problem {
    fn new(operation: Operation, lhs: i32, rhs: i32, answer: i32) -> Self {
        Self {
            operation,
            lhs,
            rhs,
            answer,
        }
    }

    /// Build a problem from its operands, computing the answer.
    ///
    /// Returns `None` when the operation has no exact integer result.
    #[must_use]
    pub fn from_operands(operation: Operation, lhs: i32, rhs: i32) -> Option<Self> {
        operation
            .apply(lhs, rhs)
            .map(|answer| Self::new(operation, lhs, rhs, answer))
    }

    /// Expression text, e.g. `"12 × 7"`.
    #[must_use]
    pub fn text(&self) -> String {
        format!("{} {} {}", self.lhs, self.operation.symbol(), self.rhs)
    }

    /// Prompt shown above the calculators.
    #[must_use]
    pub fn question(&self) -> String {
        format!("Berapa {}?", self.text())
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// Supplies the controller with problems.
///
/// `ProblemGenerator` is the normal source. Front ends with their own
/// question banks, and tests that need known answers, implement this.
pub trait ProblemSource {
    /// Produce the next problem. Must always succeed.
    fn next_problem(&mut self) -> Problem;
}

/// Random problem generator over all four operations.
#[derive(Clone, Debug)]
pub struct ProblemGenerator {
    rng: GameRng,
}

impl ProblemGenerator {
    /// Create a generator with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Create a generator from an existing RNG.
    #[must_use]
    pub fn with_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Choose an operation uniformly and generate a problem with it.
    pub fn generate(&mut self) -> Problem {
        let operation = self
            .rng
            .choose(&Operation::ALL)
            .copied()
            .unwrap_or(Operation::Add);
        operation.generate(&mut self.rng)
    }

    /// Capture the RNG position so the same problems can be replayed.
    #[must_use]
    pub fn checkpoint(&self) -> GameRngState {
        self.rng.state()
    }

    /// Resume from a checkpoint.
    #[must_use]
    pub fn restore(state: &GameRngState) -> Self {
        Self {
            rng: GameRng::from_state(state),
        }
    }
}

impl ProblemSource for ProblemGenerator {
    fn next_problem(&mut self) -> Problem {
        self.generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_apply() {
        assert_eq!(Operation::Add.apply(7, 8), Some(15));
        assert_eq!(Operation::Subtract.apply(10, 3), Some(7));
        assert_eq!(Operation::Multiply.apply(6, 7), Some(42));
        assert_eq!(Operation::Divide.apply(42, 6), Some(7));
        assert_eq!(Operation::Divide.apply(43, 6), None);
        assert_eq!(Operation::Divide.apply(4, 0), None);
    }

    #[test]
    fn test_problem_text() {
        let p = Problem::from_operands(Operation::Multiply, 12, 7).unwrap();
        assert_eq!(p.text(), "12 × 7");
        assert_eq!(p.question(), "Berapa 12 × 7?");
        assert_eq!(p.answer, 84);

        let p = Problem::from_operands(Operation::Subtract, 20, 5).unwrap();
        assert_eq!(format!("{}", p), "20 - 5");
    }

    #[test]
    fn test_operand_ranges() {
        let mut rng = GameRng::new(9);

        for _ in 0..200 {
            let p = Operation::Add.generate(&mut rng);
            assert!((5..=20).contains(&p.lhs) && (5..=20).contains(&p.rhs));

            let p = Operation::Subtract.generate(&mut rng);
            assert!((10..=25).contains(&p.lhs) && (3..=10).contains(&p.rhs));
            assert!(p.answer >= 0);

            let p = Operation::Multiply.generate(&mut rng);
            assert!((2..=12).contains(&p.lhs) && (2..=12).contains(&p.rhs));

            let p = Operation::Divide.generate(&mut rng);
            assert!((2..=10).contains(&p.rhs) && (2..=10).contains(&p.answer));
            assert_eq!(p.lhs, p.rhs * p.answer);
        }
    }

    #[test]
    fn test_generator_uses_every_operation() {
        let mut gen = ProblemGenerator::new(42);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            seen.insert(gen.generate().operation);
        }

        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_generator_determinism() {
        let mut gen1 = ProblemGenerator::new(5);
        let mut gen2 = ProblemGenerator::new(5);

        for _ in 0..20 {
            assert_eq!(gen1.next_problem(), gen2.next_problem());
        }
    }

    #[test]
    fn test_checkpoint_restore() {
        let mut gen = ProblemGenerator::new(11);
        gen.generate();

        let checkpoint = gen.checkpoint();
        let expected: Vec<_> = (0..5).map(|_| gen.generate()).collect();

        let mut resumed = ProblemGenerator::restore(&checkpoint);
        let actual: Vec<_> = (0..5).map(|_| resumed.generate()).collect();

        assert_eq!(expected, actual);
    }
}
