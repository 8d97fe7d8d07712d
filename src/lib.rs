//! flopscope: classify every combo of a preflop range against a flop.
//!
//! The engine is three pure layers consumed leaf-first: [`ranges`]
//! expands grid notation into concrete hole-card pairs, [`classify`]
//! maps one pair plus a board to a set of strength/draw categories, and
//! [`analyze`] aggregates a whole range into a category histogram with
//! board-conflict filtering. [`cli`] and [`display`] wrap the engine in
//! a terminal surface.

pub mod analyze;
pub mod cards;
pub mod classify;
pub mod cli;
pub mod display;
pub mod error;
pub mod ranges;
