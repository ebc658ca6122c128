//! # Engine Module
//!
//! The stateful search machinery that turns a word list into candidate layouts.
//!
//! ## Overview
//!
//! A layout is found by repeating a randomized fill attempt many times and keeping the best
//! candidate. The engine provides every piece of that loop except the loop itself, which lives
//! in [`crate::workflows`].
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Seed, attempt budget, worker count, and axis balancing limits
//! - **Placement** ([`placement`]) - Validation and insertion of one word at one coordinate
//! - **Tasks** ([`tasks`]) - Axis balancing, the fill state machine, and reference numbering
//! - **State Tracking** ([`state`]) - Candidates and the best score shared between workers
//! - **Progress Monitoring** ([`progress`]) - Improvement callbacks and cooperative cancellation
//! - **Error Handling** ([`error`]) - Errors surfaced to callers of the search
//!
//! Rejected placements, failed attempts, and inconsistent candidates are all recovered inside
//! the engine. Only misuse of the API reaches the caller as an [`error::EngineError`].

pub mod config;
pub mod error;
pub mod placement;
pub mod progress;
pub mod state;
pub mod tasks;
