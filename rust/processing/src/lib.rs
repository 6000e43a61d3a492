// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! SketchMesh Processing
//!
//! Execution hosts for the planar grouping pass. The pass itself is
//! synchronous and side-effect-free; this crate only decides *where* it
//! runs. Small meshes are grouped inline on the interactive thread, large
//! ones are moved to a dedicated worker thread and the result buffers
//! moved back. Both hosts run the identical engine function and produce
//! identical output for identical input.

pub mod worker;

pub use sketchmesh_grouping::{
    group_planar_faces, Error, GroupingOptions, GroupingResult, Result,
};
pub use worker::{shared_worker, GroupingJob, GroupingOutcome, GroupingWorker};

/// Run the grouping pass inline on the calling thread.
///
/// This is the small-mesh host: a hover or load event calls it directly
/// from the render callback. Invariant violations reject the call; they
/// are never partially processed.
pub fn group_mesh(
    positions: &[f32],
    indices: Option<&[u32]>,
    options: &GroupingOptions,
) -> Result<GroupingResult> {
    let started = std::time::Instant::now();
    let result = group_planar_faces(positions, indices, options)?;
    tracing::debug!(
        triangles = result.triangle_count(),
        groups = result.group_count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "grouped mesh inline"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_host_runs_engine() {
        let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let result = group_mesh(&positions, None, &GroupingOptions::default()).unwrap();
        assert_eq!(result.triangle_count(), 1);
        assert_eq!(result.group_count(), 1);
    }

    #[test]
    fn test_inline_host_rejects_bad_buffers() {
        assert!(group_mesh(&[0.0; 4], None, &GroupingOptions::default()).is_err());
    }
}
