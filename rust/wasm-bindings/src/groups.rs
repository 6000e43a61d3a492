// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Zero-copy grouping results for WASM
//!
//! Enables direct access to WASM memory from JavaScript without copying.
//! The viewer keeps `faceToGroup` as an Int32Array view for O(1)
//! pick-to-group mapping and the flattened representative points as a
//! Float32Array view for label placement.

use sketchmesh_grouping::GroupingResult;
use wasm_bindgen::prelude::*;

/// Grouping result exposed to JavaScript.
///
/// Representative points are flattened to `[x, y, z, x, y, z, ...]` in
/// group-id order, so the point of group `g` starts at `3 * g`.
#[wasm_bindgen]
pub struct PlanarGroupsJs {
    face_to_group: Vec<i32>,
    group_points: Vec<f32>,
}

#[wasm_bindgen]
impl PlanarGroupsJs {
    /// Get pointer to the per-triangle group id array
    /// JavaScript can create an Int32Array view: new Int32Array(memory.buffer, ptr, length)
    #[wasm_bindgen(getter, js_name = faceToGroupPtr)]
    pub fn face_to_group_ptr(&self) -> *const i32 {
        self.face_to_group.as_ptr()
    }

    /// Get length of the group id array (one entry per triangle)
    #[wasm_bindgen(getter, js_name = faceToGroupLen)]
    pub fn face_to_group_len(&self) -> usize {
        self.face_to_group.len()
    }

    /// Get pointer to the flattened representative points
    #[wasm_bindgen(getter, js_name = groupPointsPtr)]
    pub fn group_points_ptr(&self) -> *const f32 {
        self.group_points.as_ptr()
    }

    /// Get length of the representative point array (in f32 elements)
    #[wasm_bindgen(getter, js_name = groupPointsLen)]
    pub fn group_points_len(&self) -> usize {
        self.group_points.len()
    }

    /// Get number of groups
    #[wasm_bindgen(getter, js_name = groupCount)]
    pub fn group_count(&self) -> usize {
        self.group_points.len() / 3
    }

    /// Get number of triangles
    #[wasm_bindgen(getter, js_name = triangleCount)]
    pub fn triangle_count(&self) -> usize {
        self.face_to_group.len()
    }

    /// Check if this is the empty (failed-transport) sentinel
    #[wasm_bindgen(getter, js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.face_to_group.is_empty() && self.group_points.is_empty()
    }

    /// Get the group id array as Int32Array (copy to JS)
    #[wasm_bindgen(js_name = faceToGroup)]
    pub fn face_to_group(&self) -> js_sys::Int32Array {
        js_sys::Int32Array::from(&self.face_to_group[..])
    }

    /// Get the flattened representative points as Float32Array (copy to JS)
    #[wasm_bindgen(js_name = groupPoints)]
    pub fn group_points(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.group_points[..])
    }

    /// Representative point of one group as [x, y, z]
    #[wasm_bindgen(js_name = representativePoint)]
    pub fn representative_point(&self, group: usize) -> Option<Vec<f32>> {
        self.group_points
            .get(group * 3..group * 3 + 3)
            .map(|p| p.to_vec())
    }
}

impl PlanarGroupsJs {
    /// Empty sentinel for malformed input
    pub fn empty() -> Self {
        Self {
            face_to_group: Vec::new(),
            group_points: Vec::new(),
        }
    }
}

impl From<GroupingResult> for PlanarGroupsJs {
    fn from(result: GroupingResult) -> Self {
        let mut group_points = Vec::with_capacity(result.groups.len() * 3);
        for group in &result.groups {
            group_points.extend_from_slice(&group.representative_point);
        }
        Self {
            face_to_group: result.face_to_group,
            group_points,
        }
    }
}

/// Get WASM memory to allow JavaScript to create TypedArray views
#[wasm_bindgen]
pub fn get_memory() -> JsValue {
    wasm_bindgen::memory()
}
