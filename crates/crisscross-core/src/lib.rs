//! # crisscross Core Library
//!
//! A randomized layout engine that arranges a list of words into a compact crossword grid,
//! maximizing the number of valid intersections while minimizing the bounding area.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture so that each concern can be tested on its
//! own.
//!
//! - **[`core`]: The Foundation.** Plain data models: words, cells, the resizable
//!   [`core::grid::Grid`], the finished [`core::crossword::Crossword`], and the scoring types
//!   used to compare layouts.
//!
//! - **[`engine`]: The Logic Core.** The stateful search machinery. It contains the placement
//!   engine that validates and performs word insertion, the fill driver that runs one randomized
//!   attempt as an explicit state machine, reference numbering, configuration, progress
//!   reporting, and error types.
//!
//! - **[`workflows`]: The Public API.** Ties `engine` and `core` together.
//!   [`workflows::build::run`] repeats fill attempts (optionally across parallel workers),
//!   scores every successful candidate, and returns the best layout found.
//!
//! ```ignore
//! use crisscross::engine::config::SearchConfigBuilder;
//! use crisscross::engine::progress::ProgressReporter;
//! use crisscross::workflows;
//!
//! let config = SearchConfigBuilder::new().seed(7).max_attempts(5_000).build()?;
//! let layout = workflows::build::run(&["CAT", "CAR", "ART"], &config, &ProgressReporter::new())?;
//! if let Some(crossword) = layout {
//!     println!("{crossword}");
//! }
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
