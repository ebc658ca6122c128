//! # Core Models Module
//!
//! Data structures describing the contents of a crossword grid.
//!
//! ## Key Components
//!
//! - [`word`] - A word's text, orientation, reference number, and intersection count
//! - [`cell`] - A grid position that may hold a horizontal occupant, a vertical occupant, or both
//! - [`ids`] - Stable keys used by cells to refer back to the words crossing them

pub mod cell;
pub mod ids;
pub mod word;
