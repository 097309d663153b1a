//! Board domain model.
//!
//! # Responsibility
//! - Define tiles, clusters and canvas geometry shared by every component.
//!
//! # Invariants
//! - Tile ids are integers assigned by the store, never by callers.
//! - Positions are top-left corners in canvas pixels.

pub mod cluster;
pub mod geometry;
pub mod tile;
