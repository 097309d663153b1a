//! Ordered tile store.
//!
//! # Responsibility
//! - Keep tiles in insertion order (clustering depends on it).
//! - Assign ids monotonically and look tiles up by id in O(1).
//!
//! # Invariants
//! - Ids are unique and never reused, even after deletion.
//! - Every stored tile has non-blank, trimmed content.
//! - `index[id]` is the position of that tile in `tiles`.

use crate::model::cluster::Cluster;
use crate::model::geometry::{BoardGeometry, Point};
use crate::model::tile::{Tile, TileId, TileKind};
use log::warn;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct TileStore {
    tiles: Vec<Tile>,
    index: HashMap<TileId, usize>,
    /// `None` once the id space is exhausted.
    next_id: Option<TileId>,
}

impl Default for TileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TileStore {
    /// Creates an empty store whose first id is 1.
    pub fn new() -> Self {
        Self {
            tiles: Vec::new(),
            index: HashMap::new(),
            next_id: Some(1),
        }
    }

    /// Creates a store from pre-built tiles, keeping their order and ids.
    ///
    /// Skipped with a warning (first one wins for duplicates):
    /// - duplicate ids,
    /// - `TileId::MAX`, which would leave no successor id,
    /// - blank content.
    ///
    /// Seed content is trimmed and positions are clamped into `geometry`.
    /// The id sequence continues after the largest seeded id.
    pub fn seeded(tiles: impl IntoIterator<Item = Tile>, geometry: &BoardGeometry) -> Self {
        let mut store = Self::new();
        for mut tile in tiles {
            if store.index.contains_key(&tile.id) {
                warn!(
                    "event=seed_tile_skipped module=board status=duplicate id={}",
                    tile.id
                );
                continue;
            }
            let Some(successor) = tile.id.checked_add(1) else {
                warn!(
                    "event=seed_tile_skipped module=board status=id_exhausted id={}",
                    tile.id
                );
                continue;
            };
            let trimmed = tile.content.trim();
            if trimmed.is_empty() {
                warn!(
                    "event=seed_tile_skipped module=board status=blank_content id={}",
                    tile.id
                );
                continue;
            }
            if trimmed.len() != tile.content.len() {
                tile.content = trimmed.to_string();
            }
            tile.position = geometry.clamp(tile.position);
            store.next_id = store.next_id.map(|next| next.max(successor));
            store.push(tile);
        }
        store
    }

    /// Appends a new tile with the next id.
    ///
    /// Returns `None` without storing anything once ids are exhausted.
    pub(crate) fn insert(
        &mut self,
        kind: TileKind,
        content: String,
        position: Point,
    ) -> Option<TileId> {
        let id = self.next_id?;
        self.next_id = id.checked_add(1);
        self.push(Tile::new(id, kind, content, position));
        Some(id)
    }

    fn push(&mut self, tile: Tile) {
        debug_assert!(!self.index.contains_key(&tile.id), "duplicate tile id");
        self.index.insert(tile.id, self.tiles.len());
        self.tiles.push(tile);
    }

    /// Removes a tile; `None` when absent.
    pub fn remove(&mut self, id: TileId) -> Option<Tile> {
        let slot = self.index.remove(&id)?;
        let tile = self.tiles.remove(slot);
        for (offset, shifted) in self.tiles[slot..].iter().enumerate() {
            self.index.insert(shifted.id, slot + offset);
        }
        Some(tile)
    }

    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.index.get(&id).map(|&slot| &self.tiles[slot])
    }

    pub(crate) fn get_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        let slot = *self.index.get(&id)?;
        self.tiles.get_mut(slot)
    }

    pub fn contains(&self, id: TileId) -> bool {
        self.index.contains_key(&id)
    }

    /// Tiles in store order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Id the next created tile will receive, `None` once exhausted.
    pub fn next_id(&self) -> Option<TileId> {
        self.next_id
    }

    /// Re-clamps every tile, e.g. after the canvas shrinks.
    pub(crate) fn clamp_all(&mut self, geometry: &BoardGeometry) -> usize {
        let mut moved = 0;
        for tile in &mut self.tiles {
            let clamped = geometry.clamp(tile.position);
            if clamped != tile.position {
                tile.position = clamped;
                moved += 1;
            }
        }
        moved
    }

    /// Overwrites every tile's cluster membership from one clustering run.
    pub(crate) fn apply_clusters(&mut self, clusters: &[Cluster]) {
        for tile in &mut self.tiles {
            tile.cluster_id = clusters
                .iter()
                .find(|cluster| cluster.contains(tile.id))
                .map(|cluster| cluster.id);
        }
    }
}
