//! Greedy proximity + lexical-overlap clustering.
//!
//! # Responsibility
//! - Group tiles that are both near each other and share vocabulary.
//!
//! # Invariants
//! - Single pass in store order; a tile joins the first seed that claims it.
//! - Emitted clusters always have at least two members.
//! - Membership and centers are deterministic; only `theme` uses the RNG.

use crate::config::ClusterConfig;
use crate::model::cluster::{Cluster, ClusterId, ClusterTheme};
use crate::model::geometry::TileFootprint;
use crate::model::tile::Tile;
use rand::Rng;
use std::collections::HashSet;

/// Partitions `tiles` into advisory clusters.
///
/// O(n²) in tile count; intended for tens of tiles.
pub fn generate_clusters<R: Rng + ?Sized>(
    tiles: &[Tile],
    footprint: TileFootprint,
    config: &ClusterConfig,
    rng: &mut R,
) -> Vec<Cluster> {
    let mut processed = vec![false; tiles.len()];
    let mut clusters = Vec::new();

    for (seed_idx, seed) in tiles.iter().enumerate() {
        if processed[seed_idx] {
            continue;
        }

        let seed_tokens = tokenize(&seed.content);
        let mut members = vec![seed.id];
        for (other_idx, other) in tiles.iter().enumerate() {
            if other_idx == seed_idx || processed[other_idx] {
                continue;
            }
            let near = seed.position.distance_to(other.position) < config.distance_threshold;
            let related = near
                && common_token_count(&seed_tokens, &other.content) >= config.min_common_tokens;
            if related {
                members.push(other.id);
                processed[other_idx] = true;
            }
        }

        if members.len() > 1 {
            processed[seed_idx] = true;
            clusters.push(Cluster {
                id: clusters.len() as ClusterId + 1,
                member_tile_ids: members,
                center: seed.position + footprint.half(),
                theme: pick_theme(rng),
            });
        }
    }

    clusters
}

/// Placeholder label; not derived from content.
pub fn pick_theme<R: Rng + ?Sized>(rng: &mut R) -> ClusterTheme {
    ClusterTheme::ALL[rng.random_range(0..ClusterTheme::ALL.len())]
}

/// Lower-cased, whitespace-delimited distinct tokens.
pub fn tokenize(content: &str) -> HashSet<String> {
    content
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}

/// Number of distinct seed tokens that also appear in `other`.
pub fn common_token_count(seed_tokens: &HashSet<String>, other: &str) -> usize {
    let other_tokens = tokenize(other);
    seed_tokens
        .iter()
        .filter(|token| other_tokens.contains(*token))
        .count()
}
