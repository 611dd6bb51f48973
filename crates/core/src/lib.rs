//! Domain layer for the weekly demand board.
//!
//! Holds the canonical [`demand::Demand`] record, the boundary input types
//! that normalize into it, and the identifier generator. Nothing in this
//! crate performs I/O.

pub mod demand;
pub mod error;
pub mod identifier;
pub mod input;
pub mod paging;
pub mod types;
