//! # Core Module
//!
//! Stateless building blocks of a crossword layout.
//!
//! ## Overview
//!
//! The core module defines how a layout is represented, independently of how it is searched for:
//!
//! - **Word and cell models** ([`models`]) - Words with their orientation and derived metadata,
//!   and cells that may be crossed along either axis
//! - **Spatial buffer** ([`grid`]) - A resizable, originless 2-D array of cells supporting
//!   growth, shifting, and trimming
//! - **Scoring** ([`score`]) - Summary statistics of a layout and the total order used to rank them
//! - **Result surface** ([`crossword`]) - The finished layout handed to renderers
//!
//! Nothing in this module draws random numbers or decides where a word goes; that is the job
//! of the [`crate::engine`].

pub mod crossword;
pub mod grid;
pub mod models;
pub mod score;
