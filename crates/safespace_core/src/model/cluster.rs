//! Advisory cluster annotations.
//!
//! Clusters are produced wholesale by each clustering run and are never
//! updated incrementally; they go stale as soon as tiles move.

use crate::model::geometry::{Point, Rect};
use crate::model::tile::TileId;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Cluster identifier, unique within one clustering run only.
pub type ClusterId = u32;

/// Fixed label vocabulary for cluster overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClusterTheme {
    Communication,
    Teamwork,
    Goals,
    Ideas,
    Challenges,
}

impl ClusterTheme {
    pub const ALL: [ClusterTheme; 5] = [
        ClusterTheme::Communication,
        ClusterTheme::Teamwork,
        ClusterTheme::Goals,
        ClusterTheme::Ideas,
        ClusterTheme::Challenges,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Communication => "Communication",
            Self::Teamwork => "Teamwork",
            Self::Goals => "Goals",
            Self::Ideas => "Ideas",
            Self::Challenges => "Challenges",
        }
    }
}

impl Display for ClusterTheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Group of at least two related tiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub id: ClusterId,
    /// Seed tile first, then members in store order.
    pub member_tile_ids: Vec<TileId>,
    /// Seed tile's visual center, not a centroid of all members.
    pub center: Point,
    pub theme: ClusterTheme,
}

impl Cluster {
    pub fn contains(&self, tile_id: TileId) -> bool {
        self.member_tile_ids.contains(&tile_id)
    }

    /// Square overlay the rendering layer draws around the cluster.
    pub fn boundary(&self, side: f64) -> Rect {
        Rect::centered(self.center, side, side)
    }
}
