use safespace_core::{
    Board, BoardConfig, CanvasBounds, Point, Tile, TileKind, TileFootprint,
};

fn board_with_canvas(width: f64, height: f64) -> Board {
    let mut config = BoardConfig::default();
    config.canvas = CanvasBounds::new(width, height);
    Board::with_tiles(
        config,
        vec![Tile::new(1, TileKind::Note, "drag me", Point::new(100.0, 100.0))],
    )
    .unwrap()
}

fn assert_in_bounds(position: Point, canvas: CanvasBounds, footprint: TileFootprint) {
    assert!(position.x >= 0.0 && position.x <= canvas.width - footprint.width);
    assert!(position.y >= 0.0 && position.y <= canvas.height - footprint.height);
}

#[test]
fn drag_past_left_edge_clamps_x_to_zero() {
    let mut board = board_with_canvas(1000.0, 800.0);

    board.begin_drag(1, Point::new(10.0, 10.0));
    board.on_pointer_move(Point::new(-40.0, 110.0));

    let tile = board.tile(1).unwrap();
    assert_eq!(tile.position, Point::new(0.0, 100.0));
}

#[test]
fn every_drag_step_stays_in_bounds() {
    let mut board = board_with_canvas(1000.0, 600.0);
    let canvas = board.config().canvas;
    let footprint = board.config().footprint;
    let path = [
        Point::new(-500.0, -500.0),
        Point::new(50.0, 3000.0),
        Point::new(999.0, 599.0),
        Point::new(1e9, -1e9),
        Point::new(400.0, 300.0),
        Point::new(f64::NEG_INFINITY, f64::INFINITY),
    ];

    board.begin_drag(1, Point::new(120.0, 60.0));
    for pointer in path {
        let position = board.on_pointer_move(pointer).unwrap();
        assert_in_bounds(position, canvas, footprint);
        assert_eq!(board.tile(1).unwrap().position, position);
    }
}

#[test]
fn release_stops_following_pointer() {
    let mut board = board_with_canvas(1000.0, 800.0);

    board.begin_drag(1, Point::ORIGIN);
    board.on_pointer_move(Point::new(300.0, 300.0));
    assert_eq!(board.end_drag(), Some(1));
    assert_eq!(board.end_drag(), None);

    assert_eq!(board.on_pointer_move(Point::new(10.0, 10.0)), None);
    assert_eq!(board.tile(1).unwrap().position, Point::new(300.0, 300.0));
}

#[test]
fn deleting_dragged_tile_ends_drag() {
    let mut board = board_with_canvas(1000.0, 800.0);

    board.begin_drag(1, Point::ORIGIN);
    board.delete_tile(1);
    assert_eq!(board.dragging(), None);
    assert_eq!(board.on_pointer_move(Point::new(10.0, 10.0)), None);
}

#[test]
fn resize_reclamps_existing_tiles() {
    let mut board = board_with_canvas(1000.0, 800.0);
    board.begin_drag(1, Point::ORIGIN);
    board.on_pointer_move(Point::new(700.0, 600.0));
    board.end_drag();

    board.resize(CanvasBounds::new(600.0, 400.0)).unwrap();
    assert_eq!(board.tile(1).unwrap().position, Point::new(360.0, 280.0));
    assert!(board.resize(CanvasBounds::new(0.0, 400.0)).is_err());
    assert_eq!(board.config().canvas, CanvasBounds::new(600.0, 400.0));
}
