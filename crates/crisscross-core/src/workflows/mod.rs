//! # Workflows Module
//!
//! Top-level entry points of the library. A workflow validates its input, drives the engine
//! and reports progress, handing back a finished result the caller can render.
//!
//! - **Build Workflow** ([`build`]) - Searches for the best crossword layout of a word list
//!   over a budget of randomized fill attempts, optionally split across parallel workers.

pub mod build;
