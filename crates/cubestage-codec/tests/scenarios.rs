//! End-to-end decode/edit/encode scenarios.

use cubestage_codec::{decode_str, encode, ParseError};
use cubestage_core::{Coord3, Direction, VariantKind};
use cubestage_test_utils::fixtures::{
    FULL_STAGE, SCENARIO_ITEM, SCENARIO_NO_SPEEDS, SCENARIO_OUT_OF_BOUNDS, SCENARIO_SWITCH,
};
use serde_json::json;

#[test]
fn toggling_last_item_drops_items_key() {
    let mut doc = decode_str(SCENARIO_ITEM).unwrap();
    assert_eq!(doc.grid.kind_at(0, 0), Some(VariantKind::Item));

    assert!(doc.grid.toggle_item(0, 0));
    assert_eq!(doc.grid.kind_at(0, 0), Some(VariantKind::None));

    let out = encode(&doc).unwrap();
    assert!(out.get("items").is_none());
    assert_eq!(out["body"], json!([[0, 0], [0, 1]]));
}

#[test]
fn switch_targets_keep_floor_and_order() {
    let mut doc = decode_str(SCENARIO_SWITCH).unwrap();

    assert!(!doc.grid.reduce_switch_target(1, 0));
    assert_eq!(doc.grid.targets(1, 0).map(<[_]>::len), Some(1));

    assert!(doc.grid.add_switch_target(1, 0));
    assert!(doc.grid.add_switch_target(1, 0));
    assert!(doc.grid.set_switch_target(1, 0, 1, Coord3::new(1, 1, 1)));
    assert_eq!(doc.grid.targets(1, 0).map(<[_]>::len), Some(3));

    let out = encode(&doc).unwrap();
    assert_eq!(
        out["switches"],
        json!([{"position": [1, 0, 0], "target": [[0, 0, 0], [1, 1, 1], [0, 0, 0]]}])
    );
}

#[test]
fn missing_speeds_decode_to_zero_and_stay_absent() {
    let doc = decode_str(SCENARIO_NO_SPEEDS).unwrap();
    assert_eq!(doc.meta.tunables.build_speed, 0.0);
    assert_eq!(doc.meta.tunables.auto_collapse, 0.0);
    assert_eq!(doc.meta.tunables.collapse_speed, 1.5);

    let out = encode(&doc).unwrap();
    assert!(out.get("build_speed").is_none());
    assert!(out.get("auto_collapse").is_none());
    assert_eq!(out["collapse_speed"], json!(1.5));
}

#[test]
fn out_of_bounds_mover_is_ignored() {
    let doc = decode_str(SCENARIO_OUT_OF_BOUNDS).unwrap();
    assert_eq!((doc.width(), doc.length()), (2, 2));
    assert_eq!(doc.grid.kind_counts().movers, 0);
    assert!(encode(&doc).unwrap().get("moving").is_none());
}

#[test]
fn full_stage_decodes_every_kind() {
    let doc = decode_str(FULL_STAGE).unwrap();
    assert_eq!((doc.width(), doc.length()), (4, 3));

    assert!(doc.grid.is_item(0, 0));
    assert_eq!(doc.grid.pattern(1, 1), Some(&[2, 0, -2][..]));
    assert_eq!(
        doc.grid.targets(2, 0),
        Some(&[Coord3::new(3, 4, 2), Coord3::new(0, 4, 2)][..])
    );
    assert_eq!(doc.grid.interval(3, 1), Some(1.5));
    assert_eq!(doc.grid.delay(3, 1), Some(0.25));
    assert_eq!(doc.grid.direction(0, 2), Some(&Direction::Left));
    assert_eq!(doc.grid.power(0, 2), Some(2));

    assert_eq!(doc.meta.x_offset, -2);
    assert_eq!(doc.meta.pickable, 1);
    assert_eq!(doc.meta.camera, "far");
    assert_eq!(doc.meta.light_tween, "sunset");
    assert_eq!(doc.meta.tunables.auto_collapse, 10.0);
}

#[test]
fn full_stage_reencodes_identically() {
    let input: serde_json::Value = serde_json::from_str(FULL_STAGE).unwrap();
    let out = encode(&decode_str(FULL_STAGE).unwrap()).unwrap();
    assert_eq!(out, input);
}

#[test]
fn unknown_direction_survives() {
    let doc = decode_str(
        r#"{"body": [[1]], "color": [0, 0, 0], "bg_color": [0, 0, 0],
            "oneways": [{"position": [0, 1, 0], "direction": "diagonal", "power": 1}]}"#,
    )
    .unwrap();
    assert_eq!(
        doc.grid.direction(0, 0),
        Some(&Direction::Other("diagonal".to_owned()))
    );
    let out = encode(&doc).unwrap();
    assert_eq!(out["oneways"][0]["direction"], json!("diagonal"));
}

#[test]
fn decode_errors_are_reported() {
    assert!(matches!(decode_str("not json"), Err(ParseError::Json(_))));
    assert!(matches!(
        decode_str(r#"{"color": [0, 0, 0], "bg_color": [0, 0, 0]}"#),
        Err(ParseError::Json(_))
    ));
    assert!(matches!(
        decode_str(r#"{"body": [[0, 0], [0]], "color": [0, 0, 0], "bg_color": [0, 0, 0]}"#),
        Err(ParseError::RaggedBody { row: 1, .. })
    ));
}
