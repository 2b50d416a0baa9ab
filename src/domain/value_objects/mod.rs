//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod failure_policy;
mod outcome;

pub use failure_policy::FailurePolicy;
pub use outcome::{Outcome, Removal};
