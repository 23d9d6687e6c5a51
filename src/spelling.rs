//! Spelling correction by symmetric deletion.
//!
//! Dictionary words and queries are both expanded into their deletion
//! variants; a shared variant links a query to a candidate correction.
//! [`symspell`] keeps the deletion index in memory, [`mapped`] reads it from
//! a sorted file through [`crate::storage`], and [`suggest`] ranks the
//! candidates by edit distance.

pub mod deletion;
pub mod dictionary;
pub mod mapped;
pub mod suggest;
pub mod symspell;
