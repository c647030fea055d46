//! Snapshot JSON shape checks

use colorfall::core::GameState;
use serde_json::Value;

fn snapshot_json(state: &GameState) -> Value {
    serde_json::to_value(state.snapshot()).expect("snapshot serializes")
}

#[test]
fn snapshot_has_expected_top_level_fields() {
    let mut state = GameState::new(7);
    state.start();
    let v = snapshot_json(&state);

    for key in [
        "board",
        "active",
        "score",
        "rows_cleared",
        "level",
        "phase",
        "is_playing",
        "is_game_over",
        "session_id",
        "gravity_ms",
    ] {
        assert!(v.get(key).is_some(), "missing field {}", key);
    }

    assert_eq!(v["phase"], "playing");
    assert_eq!(v["is_playing"], true);
    assert_eq!(v["is_game_over"], false);
    assert_eq!(v["score"], 0);
    assert_eq!(v["gravity_ms"], 1200);
}

#[test]
fn snapshot_board_is_rows_of_kinds_or_null() {
    let mut state = GameState::new(7);
    state.start();
    while state.is_playing() {
        state.tick();
    }
    let v = snapshot_json(&state);

    let rows = v["board"]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 20);
    assert_eq!(v["board"]["width"], 10);
    assert_eq!(v["board"]["height"], 20);

    let mut filled = 0;
    for row in rows {
        let row = row.as_array().unwrap();
        assert_eq!(row.len(), 10);
        for cell in row {
            match cell {
                Value::Null => {}
                Value::String(s) => {
                    assert!(["I", "O", "T", "L", "J", "S", "Z"].contains(&s.as_str()));
                    filled += 1;
                }
                other => panic!("unexpected cell {}", other),
            }
        }
    }
    assert_eq!(filled, state.board().filled_count());
    assert_eq!(v["phase"], "game_over");
}

#[test]
fn snapshot_active_piece_shape() {
    let mut state = GameState::new(7);
    state.start();
    let v = snapshot_json(&state);

    let active = &v["active"];
    assert_eq!(active["x"], 4);
    assert_eq!(active["y"], 0);
    let mask = active["mask"].as_array().unwrap();
    let n = mask.len();
    assert!((2..=4).contains(&n));
    let ones: u64 = mask
        .iter()
        .flat_map(|row| row.as_array().unwrap().iter())
        .map(|c| c.as_u64().unwrap())
        .sum();
    assert_eq!(ones, 4);
}

#[test]
fn snapshot_before_start_has_no_active_piece() {
    let v = snapshot_json(&GameState::new(7));
    assert!(v["active"].is_null());
    assert_eq!(v["phase"], "not_started");
    assert_eq!(v["session_id"], 0);
}
