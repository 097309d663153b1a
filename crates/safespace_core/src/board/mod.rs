//! In-memory board components.
//!
//! # Responsibility
//! - `store`: ordered tile storage with monotonic ids.
//! - `lifecycle`: pending creation, confirm/cancel and delete.
//! - `drag`: press/move/release state machine.
//!
//! # Invariants
//! - Every mutation keeps tile positions inside the canvas bounds.
//! - Components never fail; invalid targets are no-ops.

pub mod drag;
pub mod lifecycle;
pub mod store;
