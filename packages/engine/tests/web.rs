//! Browser smoke tests for the JS facade. Run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use grotto_engine::{el_fire, el_smoke_dark, el_wall, el_wood, version, World};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn version_is_reported() {
    assert!(!version().is_empty());
}

#[wasm_bindgen_test]
fn fire_over_wood_through_the_facade() {
    let mut world = World::new(5, 5).unwrap();
    world.generate_terrain(0.0, 0).unwrap();
    assert_eq!(world.cell_kind(0, 0), el_wall());

    assert!(world.add_particle(2, 3, el_wood()));
    assert!(world.add_particle(2, 2, el_fire()));
    world.step().unwrap();

    assert_eq!(world.cell_kind(2, 3), el_fire());
    assert_eq!(world.cell_kind(2, 2), el_smoke_dark());
    assert!(world.gas_lifetime(2, 2).is_some());
}

#[wasm_bindgen_test]
fn bad_config_json_is_an_error() {
    assert!(World::from_config_json("{\"width\": 0}").is_err());
}
