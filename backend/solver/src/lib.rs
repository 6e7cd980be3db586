//! Request orchestration.
//!
//! One `Solver` per process: validates each request, resolves the recognition
//! provider, fetches the image, builds the task instructions, invokes
//! recognition, and shapes the returned text into the final answer.

pub mod prompt;
pub mod solver;

pub use solver::{Solver, SolverConfig};
