// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! STL ingestion
//!
//! The render service delivers triangulated surfaces as STL, binary or
//! ASCII. Both variants produce unindexed triangle soup; the stored facet
//! normals are discarded since downstream consumers recompute them from
//! the winding.

use crate::error::{Error, Result};
use crate::mesh::MeshBuffers;

/// Binary STL record size: 12 f32 (normal + 3 vertices) + u16 attribute
const BINARY_TRIANGLE_SIZE: usize = 50;
/// Binary STL preamble: 80-byte header + u32 triangle count
const BINARY_HEADER_SIZE: usize = 84;

/// Parse an STL file, auto-detecting the binary and ASCII variants.
pub fn parse_stl(bytes: &[u8]) -> Result<MeshBuffers> {
    // A conforming binary file is exactly header + count * 50 bytes; check
    // that before trusting the "solid" prefix, which binary exporters also
    // emit in their comment header.
    if bytes.len() >= BINARY_HEADER_SIZE {
        let declared = u32::from_le_bytes(bytes[80..84].try_into().unwrap()) as usize;
        if BINARY_HEADER_SIZE + declared * BINARY_TRIANGLE_SIZE == bytes.len() {
            return parse_binary(bytes, declared);
        }
    }

    if bytes.starts_with(b"solid") {
        let text = std::str::from_utf8(bytes)
            .map_err(|_| Error::MalformedStl("ASCII STL is not valid UTF-8".to_string()))?;
        return parse_ascii(text);
    }

    Err(Error::MalformedStl(
        "neither a conforming binary nor an ASCII STL".to_string(),
    ))
}

fn parse_binary(bytes: &[u8], triangle_count: usize) -> Result<MeshBuffers> {
    let mut positions = Vec::with_capacity(triangle_count * 9);

    for record in bytes[BINARY_HEADER_SIZE..].chunks_exact(BINARY_TRIANGLE_SIZE) {
        // Skip the 12-byte facet normal, read 3 vertices
        for v in 0..3 {
            let base = 12 + v * 12;
            for c in 0..3 {
                let offset = base + c * 4;
                let value = f32::from_le_bytes(record[offset..offset + 4].try_into().unwrap());
                positions.push(value);
            }
        }
    }

    MeshBuffers::from_positions(positions)
}

fn parse_ascii(text: &str) -> Result<MeshBuffers> {
    let mut positions = Vec::new();
    let mut tokens = text.split_ascii_whitespace();

    while let Some(token) = tokens.next() {
        if token != "vertex" {
            continue;
        }
        for _ in 0..3 {
            let raw = tokens
                .next()
                .ok_or_else(|| Error::MalformedStl("truncated vertex line".to_string()))?;
            let value: f32 = fast_float::parse(raw)
                .map_err(|_| Error::MalformedStl(format!("bad coordinate '{raw}'")))?;
            positions.push(value);
        }
    }

    if positions.is_empty() {
        return Err(Error::MalformedStl("ASCII STL contains no facets".to_string()));
    }
    if positions.len() % 9 != 0 {
        return Err(Error::MalformedStl(format!(
            "vertex count {} is not a multiple of 3",
            positions.len() / 3
        )));
    }

    MeshBuffers::from_positions(positions)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a minimal binary STL from raw triangles
    fn binary_stl(triangles: &[[f32; 9]]) -> Vec<u8> {
        let mut out = vec![0u8; 80];
        out.extend_from_slice(&(triangles.len() as u32).to_le_bytes());
        for tri in triangles {
            out.extend_from_slice(&[0u8; 12]); // facet normal, ignored
            for value in tri {
                out.extend_from_slice(&value.to_le_bytes());
            }
            out.extend_from_slice(&0u16.to_le_bytes());
        }
        out
    }

    #[test]
    fn test_binary_round_trip() {
        let tris = [
            [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 1.0, 0.0, 1.0],
        ];
        let mesh = parse_stl(&binary_stl(&tris)).unwrap();
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.positions[3], 1.0);
        assert!(mesh.index_slice().is_none());
    }

    #[test]
    fn test_binary_truncated_rejected() {
        let mut bytes = binary_stl(&[[0.0; 9]]);
        bytes.truncate(bytes.len() - 10);
        assert!(parse_stl(&bytes).is_err());
    }

    #[test]
    fn test_ascii_parse() {
        let text = b"solid demo\n\
            facet normal 0 0 1\n\
              outer loop\n\
                vertex 0.0 0.0 0.0\n\
                vertex 1.0 0.0 0.0\n\
                vertex 0.0 1.0 0.0\n\
              endloop\n\
            endfacet\n\
            endsolid demo\n";
        let mesh = parse_stl(text).unwrap();
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.positions[0..3], [0.0, 0.0, 0.0]);
        assert_eq!(mesh.positions[3..6], [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_ascii_bad_coordinate_rejected() {
        let text = b"solid demo\nfacet\nvertex 0.0 nope 0.0\nendfacet\nendsolid\n";
        assert!(matches!(parse_stl(text), Err(Error::MalformedStl(_))));
    }

    #[test]
    fn test_ascii_dangling_vertices_rejected() {
        let text = b"solid demo\nvertex 0 0 0\nvertex 1 0 0\nendsolid\n";
        assert!(parse_stl(text).is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(parse_stl(b"not an stl at all").is_err());
    }
}
