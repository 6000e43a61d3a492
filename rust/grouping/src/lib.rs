//! SketchMesh Planar Grouping
//!
//! Partitions the triangles of a surface mesh into maximal sets lying on
//! approximately the same infinite plane. The viewer uses the per-triangle
//! group ids for whole-face hover/click highlighting and each group's
//! representative point as a label anchor.
//!
//! Grouping is a heuristic spatial clustering over quantized plane
//! descriptors, not a boundary-representation extraction: curved surfaces
//! intentionally fragment into many small groups.

pub mod engine;
pub mod error;
pub mod key;
pub mod options;

pub use engine::{group_planar_faces, GroupingResult, PlanarGroup, UNGROUPED};
pub use error::{Error, Result};
pub use key::PlaneKey;
pub use options::{Axis, GroupingOptions, GroupingOptionsPatch};
