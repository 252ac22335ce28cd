//! Rule strings and the rules they name
//!
//! - [`clause`] splits a rule string into [`Clause`]s
//! - [`length`] resolves clause names to [`RuleName`] and evaluates
//!   [`LengthRule`]s against string lengths

pub mod clause;
pub mod length;

pub use clause::{Clause, clauses};
pub use length::{LengthMode, LengthRule, RuleName, RuleSyntaxError};
