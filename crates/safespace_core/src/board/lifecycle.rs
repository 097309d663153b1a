//! Tile creation and deletion.
//!
//! # Responsibility
//! - Hold the pending creation request between a canvas click and the
//!   content prompt's confirm/cancel.
//! - Append and remove tiles in the store.
//!
//! # Invariants
//! - Blank content never produces a tile.
//! - A created tile is centered on the click point, then clamped to bounds.
//! - `delete_tile` is idempotent.

use crate::board::store::TileStore;
use crate::model::geometry::{BoardGeometry, Point};
use crate::model::tile::{TileId, TileKind};
use log::{debug, info, warn};
use serde::Serialize;

/// Creation request waiting on the content prompt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PendingCreate {
    /// Canvas point that becomes the new tile's visual center.
    pub anchor: Point,
    pub kind: TileKind,
}

#[derive(Debug, Clone, Default)]
pub struct TileLifecycle {
    pending: Option<PendingCreate>,
}

impl TileLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<&PendingCreate> {
        self.pending.as_ref()
    }

    /// Records a creation request. Replaces any request already open.
    pub fn begin_create(&mut self, click_point: Point, selected_kind: TileKind) {
        debug!(
            "event=tile_create_begin module=board kind={} x={} y={}",
            selected_kind, click_point.x, click_point.y
        );
        self.pending = Some(PendingCreate {
            anchor: click_point,
            kind: selected_kind,
        });
    }

    /// Completes the pending request with `content`.
    ///
    /// Returns `None` without touching the store when nothing is pending,
    /// the trimmed content is empty, or the store has no ids left; the
    /// request stays open in the latter two cases.
    pub fn confirm_create(
        &mut self,
        store: &mut TileStore,
        geometry: &BoardGeometry,
        content: &str,
    ) -> Option<TileId> {
        let request = self.pending?;
        let content = content.trim();
        if content.is_empty() {
            debug!("event=tile_create_skipped module=board reason=blank_content");
            return None;
        }

        let position = geometry.clamp(request.anchor - geometry.footprint.half());
        let Some(id) = store.insert(request.kind, content.to_string(), position) else {
            warn!("event=tile_create_skipped module=board status=error reason=ids_exhausted");
            return None;
        };
        self.pending = None;
        info!(
            "event=tile_created module=board status=ok id={} kind={} content_len={}",
            id,
            request.kind,
            content.chars().count()
        );
        Some(id)
    }

    /// Drops the pending request. Returns whether one was open.
    pub fn cancel_create(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Removes tile `id`. Returns whether a tile was removed.
    pub fn delete_tile(&mut self, store: &mut TileStore, id: TileId) -> bool {
        let removed = store.remove(id).is_some();
        if removed {
            info!("event=tile_deleted module=board status=ok id={id}");
        }
        removed
    }
}
