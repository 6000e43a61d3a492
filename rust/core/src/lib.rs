//! SketchMesh Core
//!
//! Triangle-mesh buffer model for the SketchMesh viewer: flat vertex
//! buffers as handed over by the render service, bounding-extent
//! computation, and STL ingestion.

pub mod bounds;
pub mod error;
pub mod mesh;
pub mod stl;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

pub use bounds::Aabb;
pub use error::{Error, Result};
pub use mesh::MeshBuffers;
pub use stl::parse_stl;
