//! Core logic for the SafeSpace thought-tile canvas.
//! This crate is the single source of truth for board invariants.

pub mod board;
pub mod cluster;
pub mod config;
pub mod context;
pub mod logging;
pub mod model;
pub mod service;

pub use board::drag::{DragController, DragState};
pub use board::lifecycle::{PendingCreate, TileLifecycle};
pub use board::store::TileStore;
pub use cluster::heuristic::{common_token_count, generate_clusters, tokenize};
pub use config::{BoardConfig, ClusterConfig, ConfigError};
pub use context::{demo_users, DemoUser, WorkspaceContext};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::cluster::{Cluster, ClusterId, ClusterTheme};
pub use model::geometry::{BoardGeometry, CanvasBounds, Point, Rect, TileFootprint};
pub use model::tile::{demo_tiles, Tile, TileId, TileKind, TileKindParseError};
pub use service::board_service::{Board, BoardSnapshot, CanvasEvent, ClusterOverlay, EventOutcome};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
