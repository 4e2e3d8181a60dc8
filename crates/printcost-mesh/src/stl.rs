//! STL (stereolithography) triangle-soup loading
//!
//! Supports both ASCII and binary STL. The loader returns a flat list of
//! triangles — no indexing, deduplication, or connectivity, since volume
//! integration only needs the soup.
//!
//! Format detection: ASCII files start with "solid" (after optional
//! whitespace); binary files have an 80-byte header followed by a little-
//! endian face count. Some binary exporters also put "solid" in the header,
//! so a NUL byte anywhere in the header region forces binary.

use std::fs;
use std::path::Path;

use crate::error::{MeshError, MeshResult};
use crate::volume::Triangle;

/// STL binary header size in bytes
const HEADER_SIZE: usize = 80;

/// Size of one triangle record in binary STL (normal + 3 vertices + attribute)
const TRIANGLE_SIZE: usize = 50;

/// Load a triangle soup from an STL file, auto-detecting the format
pub fn load_stl(path: &Path) -> MeshResult<Vec<Triangle>> {
    let bytes = fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            MeshError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            MeshError::Io(e)
        }
    })?;

    parse_stl_bytes(&bytes)
}

/// Parse STL content already in memory
pub fn parse_stl_bytes(bytes: &[u8]) -> MeshResult<Vec<Triangle>> {
    if bytes.len() < 6 {
        return Err(MeshError::invalid_content("file too small to be valid STL"));
    }

    if looks_ascii(bytes) {
        let text = std::str::from_utf8(bytes)
            .map_err(|_| MeshError::invalid_content("ASCII STL is not valid UTF-8"))?;
        parse_ascii(text)
    } else {
        parse_binary(bytes)
    }
}

/// ASCII starts with "solid" and has a NUL-free header region
fn looks_ascii(bytes: &[u8]) -> bool {
    let probe_len = bytes.len().min(HEADER_SIZE);
    let probe = String::from_utf8_lossy(&bytes[..probe_len]);
    probe.trim_start().starts_with("solid") && !bytes[..probe_len].contains(&0)
}

fn parse_binary(bytes: &[u8]) -> MeshResult<Vec<Triangle>> {
    if bytes.len() < HEADER_SIZE + 4 {
        return Err(MeshError::invalid_content(
            "binary STL shorter than header and face count",
        ));
    }

    let count_bytes = [
        bytes[HEADER_SIZE],
        bytes[HEADER_SIZE + 1],
        bytes[HEADER_SIZE + 2],
        bytes[HEADER_SIZE + 3],
    ];
    let face_count = u32::from_le_bytes(count_bytes) as usize;

    let body = &bytes[HEADER_SIZE + 4..];
    let available = body.len() / TRIANGLE_SIZE;
    if available < face_count {
        return Err(MeshError::Truncated {
            expected: face_count,
            got: available,
        });
    }

    let mut triangles = Vec::with_capacity(face_count);
    for i in 0..face_count {
        let record = &body[i * TRIANGLE_SIZE..(i + 1) * TRIANGLE_SIZE];
        // Skip the 12-byte normal; vertices follow as 9 little-endian f32s
        let mut coords = [0.0f64; 9];
        for (j, coord) in coords.iter_mut().enumerate() {
            let offset = 12 + j * 4;
            let raw = [
                record[offset],
                record[offset + 1],
                record[offset + 2],
                record[offset + 3],
            ];
            *coord = f32::from_le_bytes(raw) as f64;
        }
        triangles.push(Triangle::from_coords(
            [coords[0], coords[1], coords[2]],
            [coords[3], coords[4], coords[5]],
            [coords[6], coords[7], coords[8]],
        ));
    }

    Ok(triangles)
}

fn parse_ascii(text: &str) -> MeshResult<Vec<Triangle>> {
    let mut vertices: Vec<[f64; 3]> = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let mut tokens = line.split_whitespace();
        if tokens.next() != Some("vertex") {
            continue;
        }

        let mut coords = [0.0f64; 3];
        for coord in coords.iter_mut() {
            let token = tokens.next().ok_or_else(|| {
                MeshError::invalid_content(format!("vertex on line {} is incomplete", line_no + 1))
            })?;
            *coord = token.parse::<f64>().map_err(|_| {
                MeshError::invalid_content(format!(
                    "bad vertex coordinate '{}' on line {}",
                    token,
                    line_no + 1
                ))
            })?;
        }
        vertices.push(coords);
    }

    if vertices.len() % 3 != 0 {
        return Err(MeshError::invalid_content(format!(
            "vertex count {} is not a multiple of 3",
            vertices.len()
        )));
    }

    Ok(vertices
        .chunks_exact(3)
        .map(|v| Triangle::from_coords(v[0], v[1], v[2]))
        .collect())
}
