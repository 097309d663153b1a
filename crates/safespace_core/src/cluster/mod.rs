//! Advisory tile clustering.
//!
//! Results are annotations for the rendering layer, not authoritative data.

pub mod heuristic;
