//! Arithmetic problems.
//!
//! Four operation kinds, each with operand ranges chosen so the answer is a
//! small non-negative integer that fits a three-digit calculator:
//! - addition and subtraction
//! - multiplication
//! - exact integer division

mod generator;

pub use generator::{Operation, Problem, ProblemGenerator, ProblemSource};
