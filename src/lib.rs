//! A two-state optional value container with a combinator algebra.

pub mod maybe;

pub use maybe::Maybe::{Absent, Present};
pub use maybe::{EmptyValueAccess, Maybe};
