// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Quantized plane keys
//!
//! A triangle's infinite plane is identified by its unit normal and signed
//! offset from the origin. Rounding both to fixed steps makes plane
//! equality tolerant of floating-point noise from the upstream mesh
//! generator: two triangles are coplanar exactly when their keys are
//! equal, with no nearest-neighbor search or tie-breaking.

use nalgebra::Vector3;

/// Quantized (normal, offset) plane descriptor.
///
/// Components are stored as integer bucket indices (`round(x / step)`),
/// which is equivalent to comparing the rounded multiples themselves but
/// hashes without float edge cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaneKey {
    nx: i64,
    ny: i64,
    nz: i64,
    d: i64,
}

impl PlaneKey {
    /// Quantize a canonicalized unit normal and plane offset.
    ///
    /// `normal_step` buckets the normal components (~3 degree buckets at
    /// 0.05); `distance_step` buckets the offset in mesh units.
    #[inline]
    pub fn quantize(normal: &Vector3<f64>, offset: f64, normal_step: f64, distance_step: f64) -> Self {
        Self {
            nx: (normal.x / normal_step).round() as i64,
            ny: (normal.y / normal_step).round() as i64,
            nz: (normal.z / normal_step).round() as i64,
            d: (offset / distance_step).round() as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_within_bucket_is_equal() {
        let a = PlaneKey::quantize(&Vector3::new(0.0, 0.0, 1.0), 5.0, 0.05, 0.2);
        let b = PlaneKey::quantize(&Vector3::new(0.004, -0.003, 0.99999), 5.04, 0.05, 0.2);
        assert_eq!(a, b);
    }

    #[test]
    fn test_distinct_planes_differ() {
        let floor = PlaneKey::quantize(&Vector3::new(0.0, 0.0, 1.0), 0.0, 0.05, 0.2);
        let ceiling = PlaneKey::quantize(&Vector3::new(0.0, 0.0, 1.0), 3.0, 0.05, 0.2);
        assert_ne!(floor, ceiling);

        let wall = PlaneKey::quantize(&Vector3::new(1.0, 0.0, 0.0), 0.0, 0.05, 0.2);
        assert_ne!(floor, wall);
    }

    #[test]
    fn test_negative_zero_components_collapse() {
        let a = PlaneKey::quantize(&Vector3::new(0.0, 0.0, 1.0), 0.0, 0.05, 0.2);
        let b = PlaneKey::quantize(&Vector3::new(-0.0, -0.0, 1.0), -0.0, 0.05, 0.2);
        assert_eq!(a, b);
    }
}
