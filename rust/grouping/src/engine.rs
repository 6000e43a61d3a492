// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planar grouping pass
//!
//! Single linear pass over the triangles of a mesh. Each triangle's plane
//! is quantized into a [`PlaneKey`]; triangles sharing a key share a
//! group. Groups are created lazily in first-seen order and keep a running
//! centroid of their member triangle centroids.

use crate::error::{Error, Result};
use crate::key::PlaneKey;
use crate::options::GroupingOptions;
use nalgebra::Point3;
use rustc_hash::FxHashMap;
use sketchmesh_core::Aabb;
use smallvec::{smallvec, SmallVec};
use std::collections::hash_map::Entry;

/// Sentinel group id for triangles excluded from grouping
pub const UNGROUPED: i32 = -1;

/// A maximal set of triangles sharing a quantized plane descriptor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanarGroup {
    /// Stable id, assigned in first-seen order during the pass
    pub id: u32,
    /// Running centroid of member triangle centroids, used as a label anchor
    pub representative_point: [f32; 3],
    /// Member triangle ordinals, in pass order
    pub triangles: Vec<u32>,
}

/// Output of one grouping pass, owned by the caller.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupingResult {
    /// One entry per triangle: group id, or [`UNGROUPED`] for degenerate
    /// triangles
    pub face_to_group: Vec<i32>,
    /// Groups in id order
    pub groups: Vec<PlanarGroup>,
}

impl GroupingResult {
    /// Empty result, the sentinel for failed or malformed transport calls.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of triangles covered by the pass
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.face_to_group.len()
    }

    /// Number of groups
    #[inline]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Check for the empty sentinel
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.face_to_group.is_empty() && self.groups.is_empty()
    }

    /// Map a picked triangle ordinal to its group, O(1).
    ///
    /// Returns `None` for out-of-range ordinals and ungrouped triangles.
    #[inline]
    pub fn group_for_triangle(&self, triangle: usize) -> Option<&PlanarGroup> {
        let gid = *self.face_to_group.get(triangle)?;
        if gid < 0 {
            return None;
        }
        self.groups.get(gid as usize)
    }
}

/// Group under construction: member list plus running centroid in f64
struct GroupAccumulator {
    members: SmallVec<[u32; 8]>,
    centroid: Point3<f64>,
}

#[inline]
fn vertex(positions: &[f32], index: usize) -> Point3<f64> {
    Point3::new(
        positions[index * 3] as f64,
        positions[index * 3 + 1] as f64,
        positions[index * 3 + 2] as f64,
    )
}

/// Assign every triangle of the mesh to a planar group.
///
/// `positions` is the flat vertex buffer; `indices`, when present, groups
/// every 3 indices into one triangle, otherwise every 3 consecutive
/// vertices form one. Degenerate triangles (zero area, non-finite
/// coordinates, out-of-range indices) stay at [`UNGROUPED`] and never
/// touch a group.
///
/// Fails only when a buffer length is not a multiple of 3; such input is
/// rejected before any triangle is processed.
pub fn group_planar_faces(
    positions: &[f32],
    indices: Option<&[u32]>,
    options: &GroupingOptions,
) -> Result<GroupingResult> {
    if positions.len() % 3 != 0 {
        return Err(Error::InvalidPositionBuffer(positions.len()));
    }
    if let Some(index_buffer) = indices {
        if index_buffer.len() % 3 != 0 {
            return Err(Error::InvalidIndexBuffer(index_buffer.len()));
        }
    }

    let vertex_count = positions.len() / 3;
    let triangle_count = match indices {
        Some(index_buffer) => index_buffer.len() / 3,
        None => positions.len() / 9,
    };

    let normal_step = options.normal_quantization_step;
    let distance_step = options.distance_step(Aabb::from_positions(positions).diagonal());

    let mut face_to_group = vec![UNGROUPED; triangle_count];
    let mut accumulators: Vec<GroupAccumulator> = Vec::new();
    let mut key_to_group: FxHashMap<PlaneKey, u32> = FxHashMap::default();

    for t in 0..triangle_count {
        let (ia, ib, ic) = match indices {
            Some(index_buffer) => {
                let (ia, ib, ic) = (
                    index_buffer[t * 3] as usize,
                    index_buffer[t * 3 + 1] as usize,
                    index_buffer[t * 3 + 2] as usize,
                );
                // Well-typed but malformed: skip the triangle, keep going
                if ia >= vertex_count || ib >= vertex_count || ic >= vertex_count {
                    continue;
                }
                (ia, ib, ic)
            }
            None => (t * 3, t * 3 + 1, t * 3 + 2),
        };

        let va = vertex(positions, ia);
        let vb = vertex(positions, ib);
        let vc = vertex(positions, ic);

        let e1 = vb - va;
        let e2 = vc - va;
        let cross = e1.cross(&e2);
        let normal = cross / cross.norm();
        if !(normal.x.is_finite() && normal.y.is_finite() && normal.z.is_finite()) {
            // Zero-area or non-finite geometry: no plane descriptor
            continue;
        }

        // Canonicalize so oppositely wound coincident triangles share a key
        let normal = if options.canonical_axis.component(&normal) < 0.0 {
            -normal
        } else {
            normal
        };
        let offset = normal.dot(&va.coords);
        let key = PlaneKey::quantize(&normal, offset, normal_step, distance_step);

        let triangle_centroid =
            Point3::from((va.coords + vb.coords + vc.coords) / 3.0);

        let gid = match key_to_group.entry(key) {
            Entry::Occupied(slot) => {
                let gid = *slot.get();
                let group = &mut accumulators[gid as usize];
                group.members.push(t as u32);
                // Incremental mean, cheaper than re-averaging all members
                let count = group.members.len() as f64;
                group.centroid += (triangle_centroid - group.centroid) / count;
                gid
            }
            Entry::Vacant(slot) => {
                let gid = accumulators.len() as u32;
                slot.insert(gid);
                accumulators.push(GroupAccumulator {
                    members: smallvec![t as u32],
                    centroid: triangle_centroid,
                });
                gid
            }
        };

        face_to_group[t] = gid as i32;
    }

    let groups = accumulators
        .into_iter()
        .enumerate()
        .map(|(id, group)| PlanarGroup {
            id: id as u32,
            representative_point: [
                group.centroid.x as f32,
                group.centroid.y as f32,
                group.centroid.z as f32,
            ],
            triangles: group.members.into_vec(),
        })
        .collect();

    Ok(GroupingResult {
        face_to_group,
        groups,
    })
}
