// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Grouping entry point for the viewer
//!
//! The viewer dispatches this call from its mesh worker with the buffers
//! transferred in, or inline on the main thread for small meshes. Per the
//! worker transport contract, malformed input degrades to an empty result
//! instead of throwing across the FFI boundary.

use crate::groups::PlanarGroupsJs;
use sketchmesh_grouping::{group_planar_faces, GroupingOptions, GroupingOptionsPatch};
use wasm_bindgen::prelude::*;

/// Group the triangles of a mesh into planar faces.
///
/// `indices` may be empty for triangle soup. `options` is a plain JS
/// object with any subset of `{ normalQuantizationStep,
/// distanceQuantizationFloor, distanceQuantizationFraction,
/// canonicalAxis }`; absent fields keep their defaults.
///
/// Example:
/// ```javascript
/// const groups = groupFaces(positions, indices, { normalQuantizationStep: 0.1 });
/// const faceToGroup = new Int32Array(memory.buffer, groups.faceToGroupPtr, groups.faceToGroupLen);
/// ```
#[wasm_bindgen(js_name = groupFaces)]
pub fn group_faces(positions: &[f32], indices: &[u32], options: JsValue) -> PlanarGroupsJs {
    let options = match resolve_options(options) {
        Some(options) => options,
        None => return PlanarGroupsJs::empty(),
    };

    let indices = if indices.is_empty() {
        None
    } else {
        Some(indices)
    };

    match group_planar_faces(positions, indices, &options) {
        Ok(result) => PlanarGroupsJs::from(result),
        Err(_) => PlanarGroupsJs::empty(),
    }
}

/// Merge a loose options object over the defaults.
///
/// `null`/`undefined` mean "all defaults"; anything else must deserialize
/// as a partial options record or the call is treated as malformed.
fn resolve_options(options: JsValue) -> Option<GroupingOptions> {
    if options.is_null() || options.is_undefined() {
        return Some(GroupingOptions::default());
    }
    serde_wasm_bindgen::from_value::<GroupingOptionsPatch>(options)
        .ok()
        .map(|patch| patch.apply_to(GroupingOptions::default()))
}
