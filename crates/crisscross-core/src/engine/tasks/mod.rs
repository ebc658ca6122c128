//! Units of work making up a single layout attempt.
//!
//! `axis_balance` splits the words over the two axes, `fill` drives the insertion of every
//! word into a fresh grid, and `numbering` validates a finished grid and derives its
//! reference indices and statistics.

pub mod axis_balance;
pub mod fill;
pub mod numbering;
