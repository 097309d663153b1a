use safespace_core::{Cluster, ClusterTheme, Point, Tile, TileKind};

#[test]
fn tile_reads_flat_wire_shape() {
    let value = serde_json::json!({
        "id": 7,
        "type": "goal",
        "content": "Improve team communication",
        "x": 350.0,
        "y": 350.0,
        "clusterId": null
    });

    let tile: Tile = serde_json::from_value(value).unwrap();
    assert_eq!(tile.id, 7);
    assert_eq!(tile.kind, TileKind::Goal);
    assert_eq!(tile.position, Point::new(350.0, 350.0));
    assert_eq!(tile.cluster_id, None);
}

#[test]
fn tile_rejects_unknown_kind() {
    let value = serde_json::json!({
        "id": 1,
        "type": "task",
        "content": "x",
        "x": 0.0,
        "y": 0.0,
        "clusterId": null
    });

    assert!(serde_json::from_value::<Tile>(value).is_err());
}

#[test]
fn cluster_serializes_theme_label_and_members() {
    let cluster = Cluster {
        id: 1,
        member_tile_ids: vec![1, 2],
        center: Point::new(220.0, 160.0),
        theme: ClusterTheme::Teamwork,
    };

    let json = serde_json::to_value(&cluster).unwrap();
    assert_eq!(json["memberTileIds"], serde_json::json!([1, 2]));
    assert_eq!(json["theme"], "Teamwork");
    assert_eq!(json["center"]["x"], 220.0);
    assert!(cluster.contains(2));
    assert!(!cluster.contains(3));
}
