//! Line-oriented parsers for the two mesh record sources.
//!
//! Vertices arrive as `x,y,z` float records, faces as `i0,i1,i2` index
//! records, one per line, blank lines ignored. File IO is left to the
//! caller; the parsers work on in-memory text.

use nom::{
    character::complete::{char, digit1, space0},
    combinator::{all_consuming, map_res},
    number::complete::float,
    sequence::delimited,
    IResult,
};

use nalgebra::Point3;

use crate::geometry::{Face, Mesh};

/// Errors raised while loading a mesh from its record sources.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    #[error("line {line}: expected {expected}, got {content:?}")]
    Parse {
        line: usize,
        expected: &'static str,
        content: String,
    },

    #[error("face {face} references vertex {index}, but only {vertex_count} vertices are loaded")]
    IndexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },
}

fn comma(input: &str) -> IResult<&str, char> {
    delimited(space0, char(','), space0)(input)
}

fn index(input: &str) -> IResult<&str, usize> {
    map_res(digit1, str::parse)(input)
}

fn vertex_record(input: &str) -> IResult<&str, Point3<f32>> {
    let (input, _) = space0(input)?;
    let (input, x) = float(input)?;
    let (input, _) = comma(input)?;
    let (input, y) = float(input)?;
    let (input, _) = comma(input)?;
    let (input, z) = float(input)?;
    let (input, _) = space0(input)?;
    Ok((input, Point3::new(x, y, z)))
}

fn face_record(input: &str) -> IResult<&str, Face> {
    let (input, _) = space0(input)?;
    let (input, i0) = index(input)?;
    let (input, _) = comma(input)?;
    let (input, i1) = index(input)?;
    let (input, _) = comma(input)?;
    let (input, i2) = index(input)?;
    let (input, _) = space0(input)?;
    Ok((input, [i0, i1, i2]))
}

fn parse_records<T>(
    src: &str,
    expected: &'static str,
    record: fn(&str) -> IResult<&str, T>,
) -> Result<Vec<T>, MeshError> {
    let mut records = Vec::new();
    for (n, line) in src.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match all_consuming(record)(line) {
            Ok((_, value)) => records.push(value),
            Err(_) => {
                return Err(MeshError::Parse {
                    line: n + 1,
                    expected,
                    content: line.to_string(),
                })
            }
        }
    }
    Ok(records)
}

/// Parse a vertices source: one `x,y,z` float record per line.
pub fn parse_vertices(src: &str) -> Result<Vec<Point3<f32>>, MeshError> {
    parse_records(src, "three comma-separated floats", vertex_record)
}

/// Parse a face-index source: one `i0,i1,i2` record of non-negative
/// integers per line.
pub fn parse_faces(src: &str) -> Result<Vec<Face>, MeshError> {
    parse_records(src, "three comma-separated vertex indices", face_record)
}

/// Parse both sources and build a validated mesh.
///
/// Index validation happens here, before any frame is rendered.
pub fn load_mesh(vertices_src: &str, faces_src: &str) -> Result<Mesh, MeshError> {
    let vertices = parse_vertices(vertices_src)?;
    let faces = parse_faces(faces_src)?;
    Mesh::new(vertices, faces)
}
