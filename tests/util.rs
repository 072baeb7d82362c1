#![allow(dead_code)]
use std::io::Read;
use std::path::Path;

use tempfile::TempDir;

pub const VERTEX_HEADER: &str = "Id;Marker;X;Y";
pub const EDGE_HEADER: &str = "Id;Marker;Origin;End";
pub const FACE_HEADER: &str = "Id;Marker;NumVertices;Vertices;NumEdges;Edges";

/// Unit square split into two triangles along the diagonal 0–2.
///
/// ```text
/// 3 ── 2
/// │  ╱ │
/// 0 ── 1
/// ```
pub const SQUARE_VERTICES: &str = "Id;Marker;X;Y\n\
0;1;0.0;0.0\n\
1;2;1.0;0.0\n\
2;3;1.0;1.0\n\
3;4;0.0;1.0\n";

pub const SQUARE_EDGES: &str = "Id;Marker;Origin;End\n\
0;5;0;1\n\
1;6;1;2\n\
2;7;2;3\n\
3;8;3;0\n\
4;0;0;2\n";

pub const SQUARE_FACES: &str = "Id;Marker;NumVertices;Vertices;NumEdges;Edges\n\
0;0;3;0;1;2;3;0;1;4\n\
1;0;3;0;2;3;3;4;2;3\n";

/// Prepend `header` to `rows`, one row per line.
pub fn table(header: &str, rows: &[&str]) -> String {
    let mut out = String::from(header);
    out.push('\n');
    for row in rows {
        out.push_str(row);
        out.push('\n');
    }
    out
}

/// A fresh, empty directory, removed when the handle is dropped.
pub fn scratch_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Write the three tables into `dir` under their conventional names.
pub fn write_tables(dir: &Path, vertices: &str, edges: &str, faces: &str) {
    std::fs::write(dir.join("Cell0Ds.csv"), vertices).unwrap();
    std::fs::write(dir.join("Cell1Ds.csv"), edges).unwrap();
    std::fs::write(dir.join("Cell2Ds.csv"), faces).unwrap();
}

/// A reader that fails the test if anything reads from it.
pub struct UntouchedReader(pub &'static str);

impl Read for UntouchedReader {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        panic!("{} table was read after an earlier stage failed", self.0);
    }
}
