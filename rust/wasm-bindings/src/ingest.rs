// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh ingestion for the viewer
//!
//! Parses the STL delivered by the render service into flat buffers the
//! viewer uploads to the GPU and feeds to the grouping engine, exposed
//! zero-copy through WASM memory views.

use sketchmesh_core::{parse_stl, MeshBuffers};
use wasm_bindgen::prelude::*;

/// Flat mesh buffers exposed to JavaScript.
#[wasm_bindgen]
pub struct MeshBuffersJs {
    mesh: MeshBuffers,
}

#[wasm_bindgen]
impl MeshBuffersJs {
    /// Get pointer to the position buffer
    /// JavaScript can create a Float32Array view: new Float32Array(memory.buffer, ptr, length)
    #[wasm_bindgen(getter, js_name = positionsPtr)]
    pub fn positions_ptr(&self) -> *const f32 {
        self.mesh.positions.as_ptr()
    }

    /// Get length of the position buffer (in f32 elements, not bytes)
    #[wasm_bindgen(getter, js_name = positionsLen)]
    pub fn positions_len(&self) -> usize {
        self.mesh.positions.len()
    }

    /// Get pointer to the index buffer, null for triangle soup
    #[wasm_bindgen(getter, js_name = indicesPtr)]
    pub fn indices_ptr(&self) -> *const u32 {
        match self.mesh.index_slice() {
            Some(indices) => indices.as_ptr(),
            None => std::ptr::null(),
        }
    }

    /// Get length of the index buffer, 0 for triangle soup
    #[wasm_bindgen(getter, js_name = indicesLen)]
    pub fn indices_len(&self) -> usize {
        self.mesh.index_slice().map_or(0, |indices| indices.len())
    }

    /// Get vertex count
    #[wasm_bindgen(getter, js_name = vertexCount)]
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    /// Get triangle count
    #[wasm_bindgen(getter, js_name = triangleCount)]
    pub fn triangle_count(&self) -> usize {
        self.mesh.triangle_count()
    }

    /// Check if mesh is empty
    #[wasm_bindgen(getter, js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.mesh.is_empty()
    }

    /// Get the positions as Float32Array (copy to JS)
    #[wasm_bindgen]
    pub fn positions(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.mesh.positions[..])
    }
}

impl From<MeshBuffers> for MeshBuffersJs {
    fn from(mesh: MeshBuffers) -> Self {
        Self { mesh }
    }
}

/// Parse an STL file (binary or ASCII) into mesh buffers.
///
/// Returns `null` when the bytes are not a valid STL; the caller surfaces
/// the failure as "no mesh" without crashing the viewer.
#[wasm_bindgen(js_name = parseStl)]
pub fn parse_stl_js(bytes: &[u8]) -> Option<MeshBuffersJs> {
    parse_stl(bytes).ok().map(MeshBuffersJs::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soup_has_null_index_pointer() {
        let mesh = MeshBuffers::from_positions(vec![0.0; 9]).unwrap();
        let js = MeshBuffersJs::from(mesh);
        assert!(js.indices_ptr().is_null());
        assert_eq!(js.indices_len(), 0);
        assert_eq!(js.triangle_count(), 1);
    }

    #[test]
    fn test_parse_stl_rejects_garbage() {
        assert!(parse_stl_js(b"garbage").is_none());
    }
}
