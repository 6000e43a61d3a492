// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Browser-side smoke tests, run with `wasm-pack test`.

#![cfg(target_arch = "wasm32")]

use sketchmesh_wasm::group_faces;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn quad_groups_to_one_face() {
    let positions = [
        0.0, 0.0, 0.0, //
        1.0, 0.0, 0.0, //
        1.0, 1.0, 0.0, //
        0.0, 1.0, 0.0,
    ];
    let indices = [0u32, 1, 2, 0, 2, 3];
    let groups = group_faces(&positions, &indices, JsValue::NULL);
    assert_eq!(groups.group_count(), 1);
    assert_eq!(groups.triangle_count(), 2);
    assert_eq!(groups.face_to_group().to_vec(), vec![0, 0]);
}

#[wasm_bindgen_test]
fn empty_indices_mean_triangle_soup() {
    let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let groups = group_faces(&positions, &[], JsValue::NULL);
    assert_eq!(groups.triangle_count(), 1);
    assert_eq!(groups.group_count(), 1);
}

#[wasm_bindgen_test]
fn ragged_buffer_degrades_to_empty() {
    let groups = group_faces(&[0.0; 4], &[], JsValue::NULL);
    assert!(groups.is_empty());
}

#[wasm_bindgen_test]
fn loose_options_object_is_merged() {
    // Slightly tilted second triangle: one face under the default normal
    // step, two faces once the caller narrows the buckets
    let positions = [
        0.0, 0.0, 0.0, //
        1.0, 0.0, 0.0, //
        1.0, 1.0, 0.0, //
        0.0, 1.0, 0.02,
    ];
    let indices = [0u32, 1, 2, 0, 2, 3];

    let default_groups = group_faces(&positions, &indices, JsValue::NULL);
    assert_eq!(default_groups.group_count(), 1);

    let options = js_sys::Object::new();
    js_sys::Reflect::set(
        &options,
        &"normalQuantizationStep".into(),
        &JsValue::from_f64(0.005),
    )
    .unwrap();
    let narrow_groups = group_faces(&positions, &indices, options.into());
    assert_eq!(narrow_groups.group_count(), 2);
}

#[wasm_bindgen_test]
fn malformed_options_degrade_to_empty() {
    let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let groups = group_faces(&positions, &[], JsValue::from_str("not options"));
    assert!(groups.is_empty());
}
