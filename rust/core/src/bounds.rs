// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Axis-aligned bounding extent
//!
//! One linear pass over a flat position buffer. The grouping engine uses
//! the diagonal only to scale its distance tolerance.

use nalgebra::Point3;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl Aabb {
    /// Compute bounds over a flat `[x, y, z, ...]` buffer in one pass.
    ///
    /// An empty buffer yields a degenerate zero-size box at the origin;
    /// callers must treat a zero diagonal as "no size hint".
    pub fn from_positions(positions: &[f32]) -> Self {
        if positions.len() < 3 {
            return Self {
                min: Point3::origin(),
                max: Point3::origin(),
            };
        }

        let mut min = Point3::new(f64::MAX, f64::MAX, f64::MAX);
        let mut max = Point3::new(f64::MIN, f64::MIN, f64::MIN);

        // Use chunks for better cache locality
        positions.chunks_exact(3).for_each(|chunk| {
            let (x, y, z) = (chunk[0] as f64, chunk[1] as f64, chunk[2] as f64);
            min.x = min.x.min(x);
            min.y = min.y.min(y);
            min.z = min.z.min(z);
            max.x = max.x.max(x);
            max.y = max.y.max(y);
            max.z = max.z.max(z);
        });

        Self { min, max }
    }

    /// Length of the box diagonal
    #[inline]
    pub fn diagonal(&self) -> f64 {
        (self.max - self.min).norm()
    }

    /// Check if the box has no extent on any axis
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }
}
