// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh buffer data structures

use crate::error::{Error, Result};
use nalgebra::Point3;

/// Flat triangle-mesh buffers as delivered by the render service.
///
/// Positions are stored as `[x, y, z, x, y, z, ...]`. When an index buffer
/// is present, every 3 indices form one triangle; otherwise every 3
/// consecutive vertices do.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeshBuffers {
    /// Vertex positions (x, y, z)
    pub positions: Vec<f32>,
    /// Triangle indices (i0, i1, i2), absent for triangle soup
    pub indices: Option<Vec<u32>>,
}

impl MeshBuffers {
    /// Create mesh buffers from a raw position buffer (triangle soup).
    ///
    /// Rejects buffers whose length is not a multiple of 3.
    pub fn from_positions(positions: Vec<f32>) -> Result<Self> {
        if positions.len() % 3 != 0 {
            return Err(Error::InvalidPositionBuffer(positions.len()));
        }
        Ok(Self {
            positions,
            indices: None,
        })
    }

    /// Create indexed mesh buffers.
    ///
    /// Rejects length-invariant violations and indices referring past the
    /// end of the vertex list.
    pub fn with_indices(positions: Vec<f32>, indices: Vec<u32>) -> Result<Self> {
        if positions.len() % 3 != 0 {
            return Err(Error::InvalidPositionBuffer(positions.len()));
        }
        if indices.len() % 3 != 0 {
            return Err(Error::InvalidIndexBuffer(indices.len()));
        }
        let vertex_count = positions.len() / 3;
        if let Some(&bad) = indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(Error::IndexOutOfRange {
                index: bad,
                vertex_count,
            });
        }
        Ok(Self {
            positions,
            indices: Some(indices),
        })
    }

    /// Get vertex count
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Get triangle count
    #[inline]
    pub fn triangle_count(&self) -> usize {
        match &self.indices {
            Some(indices) => indices.len() / 3,
            None => self.positions.len() / 9,
        }
    }

    /// Check if mesh is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Index buffer as a slice, if present
    #[inline]
    pub fn index_slice(&self) -> Option<&[u32]> {
        self.indices.as_deref()
    }

    /// Vertex position at `index` in f64 precision
    #[inline]
    pub fn position(&self, index: usize) -> Point3<f64> {
        Point3::new(
            self.positions[index * 3] as f64,
            self.positions[index * 3 + 1] as f64,
            self.positions[index * 3 + 2] as f64,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soup_counts() {
        // Two contiguous triangles, no index buffer
        let mesh = MeshBuffers::from_positions(vec![0.0; 18]).unwrap();
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(mesh.index_slice().is_none());
    }

    #[test]
    fn test_indexed_counts() {
        let positions = vec![
            0.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            1.0, 1.0, 0.0,
        ];
        let mesh = MeshBuffers::with_indices(positions, vec![0, 1, 2, 2, 1, 3]).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn test_rejects_ragged_positions() {
        assert!(matches!(
            MeshBuffers::from_positions(vec![0.0; 10]),
            Err(Error::InvalidPositionBuffer(10))
        ));
    }

    #[test]
    fn test_rejects_ragged_indices() {
        assert!(matches!(
            MeshBuffers::with_indices(vec![0.0; 9], vec![0, 1]),
            Err(Error::InvalidIndexBuffer(2))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_index() {
        assert!(matches!(
            MeshBuffers::with_indices(vec![0.0; 9], vec![0, 1, 3]),
            Err(Error::IndexOutOfRange { index: 3, .. })
        ));
    }

    #[test]
    fn test_position_accessor() {
        let mesh = MeshBuffers::from_positions(vec![1.0, 2.0, 3.0]).unwrap();
        let p = mesh.position(0);
        assert_eq!(p, Point3::new(1.0, 2.0, 3.0));
    }
}
