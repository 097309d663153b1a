//! Thought-tile domain model.
//!
//! # Responsibility
//! - Define the tile record placed on the Safe Space canvas.
//! - Define the closed set of tile kinds offered by the toolbar.
//!
//! # Invariants
//! - `id` is unique within a store for the store's lifetime.
//! - `content` is non-empty after trimming and never edited after creation.
//! - `cluster_id` only reflects the latest clustering run.

use crate::model::cluster::ClusterId;
use crate::model::geometry::Point;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Integer tile identifier, assigned monotonically by the store.
pub type TileId = u64;

/// Tile category. Only affects default presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileKind {
    #[default]
    Note,
    Goal,
    Idea,
}

impl TileKind {
    /// Every kind in toolbar order.
    pub const ALL: [TileKind; 3] = [TileKind::Note, TileKind::Goal, TileKind::Idea];

    /// Stable wire id.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Goal => "goal",
            Self::Idea => "idea",
        }
    }

    /// Toolbar label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Note => "Note",
            Self::Goal => "Goal",
            Self::Idea => "Idea",
        }
    }

    /// Accent color name used by the rendering layer.
    pub fn color(self) -> &'static str {
        match self {
            Self::Note => "blue",
            Self::Goal => "green",
            Self::Idea => "purple",
        }
    }
}

impl Display for TileKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unknown tile kind strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileKindParseError {
    Empty,
    Unsupported(String),
}

impl Display for TileKindParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "tile kind must not be empty"),
            Self::Unsupported(value) => {
                write!(f, "unsupported tile kind `{value}`; expected note|goal|idea")
            }
        }
    }
}

impl Error for TileKindParseError {}

impl FromStr for TileKind {
    type Err = TileKindParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        if normalized.is_empty() {
            return Err(TileKindParseError::Empty);
        }
        match normalized.to_ascii_lowercase().as_str() {
            "note" => Ok(Self::Note),
            "goal" => Ok(Self::Goal),
            "idea" => Ok(Self::Idea),
            _ => Err(TileKindParseError::Unsupported(normalized.to_string())),
        }
    }
}

/// One user-authored note/goal/idea placed on the canvas.
///
/// Serialized flat (`id`, `type`, `content`, `x`, `y`, `clusterId`) so the
/// rendering layer can read positions without unwrapping a nested point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    pub id: TileId,
    #[serde(rename = "type")]
    pub kind: TileKind,
    pub content: String,
    /// Top-left corner in canvas space.
    #[serde(flatten)]
    pub position: Point,
    pub cluster_id: Option<ClusterId>,
}

impl Tile {
    pub fn new(id: TileId, kind: TileKind, content: impl Into<String>, position: Point) -> Self {
        Self {
            id,
            kind,
            content: content.into(),
            position,
            cluster_id: None,
        }
    }
}

/// Tiles present on a fresh board.
pub fn demo_tiles() -> Vec<Tile> {
    vec![
        Tile::new(
            1,
            TileKind::Note,
            "Feeling disconnected from remote teammates lately. Need to find better ways to bond.",
            Point::new(200.0, 150.0),
        ),
        Tile::new(
            2,
            TileKind::Idea,
            "What if we had virtual coffee chats every Friday?",
            Point::new(500.0, 200.0),
        ),
        Tile::new(
            3,
            TileKind::Goal,
            "Improve team communication and build stronger relationships",
            Point::new(350.0, 350.0),
        ),
    ]
}
