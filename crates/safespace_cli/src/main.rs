//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `safespace_core` linkage outside any UI host.
//! - Replay a short scripted canvas session and print JSON snapshots.
//!
//! Usage: `safespace_cli [config.json]`
//! Environment: `SAFESPACE_LOG_LEVEL`, `SAFESPACE_LOG_DIR`, `SAFESPACE_SEED`.

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use safespace_core::{
    default_log_level, init_logging, Board, BoardConfig, CanvasEvent, Point, TileKind,
    WorkspaceContext,
};
use std::error::Error;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn Error>> {
    let level =
        std::env::var("SAFESPACE_LOG_LEVEL").unwrap_or_else(|_| default_log_level().to_string());
    let log_dir = std::env::var_os("SAFESPACE_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("safespace-logs"));
    init_logging(&level, &log_dir)?;

    let config = match std::env::args().nth(1) {
        Some(path) => BoardConfig::from_json_str(&std::fs::read_to_string(&path)?)?,
        None => BoardConfig::default(),
    };

    println!("safespace_core version={}", safespace_core::core_version());

    let mut context = WorkspaceContext::new();
    let mut board = Board::with_demo_tiles(config)?;
    context.select_tile_kind(TileKind::Goal);

    let script = [
        CanvasEvent::CanvasPressed {
            point: Point::new(300.0, 300.0),
        },
        CanvasEvent::PromptConfirmed {
            content: "Improve team communication with weekly demos".to_string(),
        },
        CanvasEvent::TilePressed {
            id: 2,
            local: Point::new(20.0, 20.0),
        },
        CanvasEvent::PointerMoved {
            point: Point::new(-40.0, 180.0),
        },
        CanvasEvent::PointerReleased,
    ];
    for event in script {
        let outcome = board.handle(&context, event);
        info!("event=cli_step module=cli outcome={outcome:?}");
    }

    match std::env::var("SAFESPACE_SEED")
        .ok()
        .and_then(|raw| raw.parse::<u64>().ok())
    {
        Some(seed) => board.cluster_tiles_with(&mut StdRng::seed_from_u64(seed)),
        None => board.cluster_tiles(),
    };

    println!("{}", serde_json::to_string_pretty(&board.snapshot())?);
    Ok(())
}
