//! Board facade.
//!
//! # Responsibility
//! - Own the tile store, lifecycle manager, drag controller and the latest
//!   cluster list behind one entry point.
//! - Route discrete canvas input events to the right component.
//! - Publish read-only snapshots for the rendering layer.
//!
//! # Invariants
//! - All tiles satisfy the current canvas bounds after every call.
//! - The cluster list is only replaced by an explicit clustering request;
//!   later moves and deletes leave it stale.

use crate::board::drag::DragController;
use crate::board::lifecycle::{PendingCreate, TileLifecycle};
use crate::board::store::TileStore;
use crate::cluster::heuristic::generate_clusters;
use crate::config::{validate_canvas, BoardConfig, ConfigError};
use crate::context::WorkspaceContext;
use crate::model::cluster::Cluster;
use crate::model::geometry::{BoardGeometry, CanvasBounds, Point, Rect};
use crate::model::tile::{demo_tiles, Tile, TileId};
use log::info;
use rand::Rng;
use serde::Serialize;

/// Discrete input dispatched by the host UI.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    /// Press on empty canvas; opens the content prompt.
    CanvasPressed { point: Point },
    /// Press on a tile; `local` is relative to the tile's top-left corner.
    TilePressed { id: TileId, local: Point },
    PointerMoved { point: Point },
    PointerReleased,
    PromptConfirmed { content: String },
    PromptCancelled,
    DeleteRequested { id: TileId },
    ClusterRequested,
}

/// What an event changed, for hosts that redraw selectively.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    Ignored,
    PromptOpened,
    PromptClosed,
    TileCreated(TileId),
    DragStarted(TileId),
    TileMoved { id: TileId, position: Point },
    DragEnded(TileId),
    TileDeleted(TileId),
    Clustered { clusters: usize },
}

/// Read-only board state handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub tiles: Vec<Tile>,
    pub clusters: Vec<ClusterOverlay>,
    pub dragging: Option<TileId>,
    pub pending: Option<PendingCreate>,
}

/// Cluster plus its precomputed overlay rectangle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterOverlay {
    #[serde(flatten)]
    pub cluster: Cluster,
    pub boundary: Rect,
}

pub struct Board {
    config: BoardConfig,
    store: TileStore,
    lifecycle: TileLifecycle,
    drag: DragController,
    clusters: Vec<Cluster>,
}

impl Board {
    /// Creates an empty board.
    ///
    /// # Errors
    /// - Any error returned by [`BoardConfig::validate`].
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        Self::with_tiles(config, Vec::new())
    }

    /// Creates a board holding the demo tiles.
    ///
    /// # Errors
    /// - Any error returned by [`BoardConfig::validate`].
    pub fn with_demo_tiles(config: BoardConfig) -> Result<Self, ConfigError> {
        Self::with_tiles(config, demo_tiles())
    }

    /// Creates a board from seed tiles (see [`TileStore::seeded`]).
    ///
    /// # Errors
    /// - Any error returned by [`BoardConfig::validate`]; clamping is only
    ///   meaningful for a validated geometry.
    pub fn with_tiles(config: BoardConfig, tiles: Vec<Tile>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::assemble(config, tiles))
    }

    fn assemble(config: BoardConfig, tiles: Vec<Tile>) -> Self {
        let store = TileStore::seeded(tiles, &config.geometry());
        info!(
            "event=board_init module=service status=ok tiles={} canvas={}x{}",
            store.len(),
            config.canvas.width,
            config.canvas.height
        );
        Self {
            config,
            store,
            lifecycle: TileLifecycle::new(),
            drag: DragController::new(),
            clusters: Vec::new(),
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn geometry(&self) -> BoardGeometry {
        self.config.geometry()
    }

    pub fn store(&self) -> &TileStore {
        &self.store
    }

    pub fn tiles(&self) -> &[Tile] {
        self.store.tiles()
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.store.get(id)
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn pending(&self) -> Option<&PendingCreate> {
        self.lifecycle.pending()
    }

    pub fn dragging(&self) -> Option<TileId> {
        self.drag.active_tile()
    }

    /// Records a creation request at `click_point` with the selected kind.
    pub fn begin_create(&mut self, context: &WorkspaceContext, click_point: Point) {
        self.lifecycle
            .begin_create(click_point, context.selected_tile_kind());
    }

    /// See [`TileLifecycle::confirm_create`].
    pub fn confirm_create(&mut self, content: &str) -> Option<TileId> {
        let geometry = self.geometry();
        self.lifecycle
            .confirm_create(&mut self.store, &geometry, content)
    }

    pub fn cancel_create(&mut self) -> bool {
        self.lifecycle.cancel_create()
    }

    /// Removes a tile; ends the drag if it targeted that tile.
    pub fn delete_tile(&mut self, id: TileId) -> bool {
        if self.drag.active_tile() == Some(id) {
            self.drag.end_drag();
        }
        self.lifecycle.delete_tile(&mut self.store, id)
    }

    pub fn begin_drag(&mut self, id: TileId, pointer_in_tile: Point) -> bool {
        self.drag.begin_drag(&self.store, id, pointer_in_tile)
    }

    pub fn on_pointer_move(&mut self, pointer: Point) -> Option<Point> {
        let geometry = self.geometry();
        self.drag
            .on_pointer_move(&mut self.store, &geometry, pointer)
    }

    pub fn end_drag(&mut self) -> Option<TileId> {
        self.drag.end_drag()
    }

    /// Recomputes clusters using the thread-local RNG for themes.
    pub fn cluster_tiles(&mut self) -> &[Cluster] {
        self.cluster_tiles_with(&mut rand::rng())
    }

    /// Recomputes clusters, replacing the previous run and every tile's
    /// `cluster_id`.
    pub fn cluster_tiles_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &[Cluster] {
        let clusters = generate_clusters(
            self.store.tiles(),
            self.config.footprint,
            &self.config.cluster,
            rng,
        );
        self.store.apply_clusters(&clusters);
        info!(
            "event=clusters_generated module=service status=ok tiles={} clusters={}",
            self.store.len(),
            clusters.len()
        );
        self.clusters = clusters;
        &self.clusters
    }

    /// Topmost tile whose footprint contains `point`.
    pub fn hit_test(&self, point: Point) -> Option<TileId> {
        let footprint = self.config.footprint;
        self.store
            .tiles()
            .iter()
            .rev()
            .find(|tile| footprint.contains(tile.position, point))
            .map(|tile| tile.id)
    }

    /// Applies new canvas bounds and re-clamps every tile.
    ///
    /// # Errors
    /// - `ConfigError::InvalidCanvas` when `canvas` is not finite and positive.
    pub fn resize(&mut self, canvas: CanvasBounds) -> Result<(), ConfigError> {
        validate_canvas(canvas)?;
        self.config.canvas = canvas;
        let geometry = self.geometry();
        let moved = self.store.clamp_all(&geometry);
        info!(
            "event=canvas_resized module=service status=ok canvas={}x{} moved={}",
            canvas.width, canvas.height, moved
        );
        Ok(())
    }

    /// Routes one input event.
    pub fn handle(&mut self, context: &WorkspaceContext, event: CanvasEvent) -> EventOutcome {
        match event {
            CanvasEvent::CanvasPressed { point } => {
                self.begin_create(context, point);
                EventOutcome::PromptOpened
            }
            CanvasEvent::TilePressed { id, local } => {
                if self.begin_drag(id, local) {
                    EventOutcome::DragStarted(id)
                } else {
                    EventOutcome::Ignored
                }
            }
            CanvasEvent::PointerMoved { point } => match self.drag.active_tile() {
                Some(id) => self
                    .on_pointer_move(point)
                    .map_or(EventOutcome::Ignored, |position| EventOutcome::TileMoved {
                        id,
                        position,
                    }),
                None => EventOutcome::Ignored,
            },
            CanvasEvent::PointerReleased => self
                .end_drag()
                .map_or(EventOutcome::Ignored, EventOutcome::DragEnded),
            CanvasEvent::PromptConfirmed { content } => self
                .confirm_create(&content)
                .map_or(EventOutcome::Ignored, EventOutcome::TileCreated),
            CanvasEvent::PromptCancelled => {
                if self.cancel_create() {
                    EventOutcome::PromptClosed
                } else {
                    EventOutcome::Ignored
                }
            }
            CanvasEvent::DeleteRequested { id } => {
                if self.delete_tile(id) {
                    EventOutcome::TileDeleted(id)
                } else {
                    EventOutcome::Ignored
                }
            }
            CanvasEvent::ClusterRequested => {
                let clusters = self.cluster_tiles().len();
                EventOutcome::Clustered { clusters }
            }
        }
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let side = self.config.cluster.boundary_side;
        BoardSnapshot {
            tiles: self.store.tiles().to_vec(),
            clusters: self
                .clusters
                .iter()
                .map(|cluster| ClusterOverlay {
                    cluster: cluster.clone(),
                    boundary: cluster.boundary(side),
                })
                .collect(),
            dragging: self.drag.active_tile(),
            pending: self.lifecycle.pending().copied(),
        }
    }
}

impl Default for Board {
    /// Empty board on the built-in default config, which always validates.
    fn default() -> Self {
        Self::assemble(BoardConfig::default(), Vec::new())
    }
}
