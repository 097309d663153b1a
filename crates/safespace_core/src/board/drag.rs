//! Pointer drag state machine.
//!
//! `Idle -> Dragging -> Idle`, driven by discrete press/move/release inputs.
//! At most one tile is dragged at a time; a new press ends the previous drag.

use crate::board::store::TileStore;
use crate::model::geometry::{BoardGeometry, Point};
use crate::model::tile::TileId;
use log::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        tile_id: TileId,
        /// Pointer position relative to the tile's top-left corner at press time.
        grab_offset: Point,
    },
}

#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn active_tile(&self) -> Option<TileId> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging { tile_id, .. } => Some(tile_id),
        }
    }

    /// Starts dragging `tile_id`, grabbed at `pointer_in_tile` (tile-local).
    ///
    /// Returns `false` and stays idle when the tile does not exist.
    pub fn begin_drag(
        &mut self,
        store: &TileStore,
        tile_id: TileId,
        pointer_in_tile: Point,
    ) -> bool {
        if let Some(previous) = self.end_drag() {
            debug!("event=drag_replaced module=board previous_id={previous} id={tile_id}");
        }
        if !store.contains(tile_id) {
            return false;
        }
        self.state = DragState::Dragging {
            tile_id,
            grab_offset: pointer_in_tile,
        };
        debug!("event=drag_begin module=board id={tile_id}");
        true
    }

    /// Moves the active tile so the grab point follows `pointer` (canvas space).
    ///
    /// Returns the new clamped position, or `None` when idle. If the active
    /// tile vanished from the store the drag ends.
    pub fn on_pointer_move(
        &mut self,
        store: &mut TileStore,
        geometry: &BoardGeometry,
        pointer: Point,
    ) -> Option<Point> {
        let DragState::Dragging {
            tile_id,
            grab_offset,
        } = self.state
        else {
            return None;
        };

        let Some(tile) = store.get_mut(tile_id) else {
            self.state = DragState::Idle;
            return None;
        };
        let position = geometry.clamp(pointer - grab_offset);
        tile.position = position;
        trace!(
            "event=drag_move module=board id={tile_id} x={} y={}",
            position.x,
            position.y
        );
        Some(position)
    }

    /// Returns to idle. Returns the tile that was being dragged, if any.
    pub fn end_drag(&mut self) -> Option<TileId> {
        let released = self.active_tile();
        self.state = DragState::Idle;
        if let Some(tile_id) = released {
            debug!("event=drag_end module=board id={tile_id}");
        }
        released
    }
}
