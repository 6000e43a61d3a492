//! SketchMesh WebAssembly Bindings
//!
//! JavaScript/TypeScript API for the planar grouping engine built with
//! wasm-bindgen. The viewer parses the render service's STL with
//! [`parse_stl_js`], calls [`group_faces`] from its mesh worker (or
//! inline for small meshes), and reads the result either zero-copy
//! through WASM memory views or via the copying getters.

use wasm_bindgen::prelude::*;

#[cfg(feature = "console_error_panic_hook")]
pub use console_error_panic_hook::set_once as set_panic_hook;

mod api;
mod groups;
mod ingest;
mod utils;

pub use api::group_faces;
pub use groups::{get_memory, PlanarGroupsJs};
pub use ingest::{parse_stl_js, MeshBuffersJs};
pub use utils::set_panic_hook as init_panic_hook;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the version of SketchMesh
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
