// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Grouping configuration

/// Axis used to canonicalize normal orientation.
///
/// Two coincident but oppositely wound triangles produce opposite normals;
/// flipping so the chosen component is non-negative lands both in the same
/// group. A plane whose normal has a near-zero component on this axis may
/// flip either way under floating-point noise; that boundary is accepted
/// nondeterminism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    X,
    Y,
    #[default]
    Z,
}

impl Axis {
    /// Component of a vector along this axis
    #[inline]
    pub fn component(self, v: &nalgebra::Vector3<f64>) -> f64 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }
}

/// Tunable parameters of the planar grouping pass.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct GroupingOptions {
    /// Normal quantization step; ~0.05 gives ~3 degree angular buckets.
    /// Larger values merge faces across more curvature.
    pub normal_quantization_step: f64,
    /// Lower bound on the plane-offset quantization step, in mesh units.
    pub distance_quantization_floor: f64,
    /// Plane-offset quantization as a fraction of the bounding diagonal.
    pub distance_quantization_fraction: f64,
    /// Axis whose normal component is forced non-negative.
    pub canonical_axis: Axis,
}

impl Default for GroupingOptions {
    fn default() -> Self {
        Self {
            normal_quantization_step: 0.05,
            distance_quantization_floor: 0.2,
            distance_quantization_fraction: 0.002,
            canonical_axis: Axis::Z,
        }
    }
}

impl GroupingOptions {
    /// Plane-offset quantization step for a mesh with the given bounding
    /// diagonal. A zero diagonal (degenerate or empty mesh) falls back to
    /// the fixed floor.
    #[inline]
    pub fn distance_step(&self, bounding_diagonal: f64) -> f64 {
        (bounding_diagonal * self.distance_quantization_fraction)
            .max(self.distance_quantization_floor)
    }
}

/// Partial update over [`GroupingOptions`].
///
/// The viewer hands options across the worker boundary as a loose record
/// with any subset of fields present; absent fields keep their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct GroupingOptionsPatch {
    pub normal_quantization_step: Option<f64>,
    pub distance_quantization_floor: Option<f64>,
    pub distance_quantization_fraction: Option<f64>,
    pub canonical_axis: Option<Axis>,
}

impl GroupingOptionsPatch {
    /// Merge this patch over `base`, field by field.
    pub fn apply_to(&self, base: GroupingOptions) -> GroupingOptions {
        GroupingOptions {
            normal_quantization_step: self
                .normal_quantization_step
                .unwrap_or(base.normal_quantization_step),
            distance_quantization_floor: self
                .distance_quantization_floor
                .unwrap_or(base.distance_quantization_floor),
            distance_quantization_fraction: self
                .distance_quantization_fraction
                .unwrap_or(base.distance_quantization_fraction),
            canonical_axis: self.canonical_axis.unwrap_or(base.canonical_axis),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_step_floor() {
        let options = GroupingOptions::default();
        // Small mesh: fraction of the diagonal is below the floor
        assert_eq!(options.distance_step(1.0), 0.2);
        // Degenerate mesh: zero diagonal falls back to the floor
        assert_eq!(options.distance_step(0.0), 0.2);
        // Large mesh: proportional step wins
        assert_eq!(options.distance_step(1000.0), 2.0);
    }

    #[test]
    fn test_patch_merge_keeps_defaults() {
        let patch = GroupingOptionsPatch {
            normal_quantization_step: Some(0.1),
            ..Default::default()
        };
        let merged = patch.apply_to(GroupingOptions::default());
        assert_eq!(merged.normal_quantization_step, 0.1);
        assert_eq!(merged.distance_quantization_floor, 0.2);
        assert_eq!(merged.canonical_axis, Axis::Z);
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let merged = GroupingOptionsPatch::default().apply_to(GroupingOptions::default());
        assert_eq!(merged, GroupingOptions::default());
    }
}
