//! Core use-case services.
//!
//! # Responsibility
//! - Compose board components into the API hosts call.
//! - Keep host UI layers decoupled from component wiring.

pub mod board_service;
