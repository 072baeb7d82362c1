mod util;

use polymesh::prelude::*;
use proptest::prelude::*;
use util::*;

fn vertex_table(coords: &[(f64, f64)]) -> String {
    let rows: Vec<String> = coords
        .iter()
        .enumerate()
        .map(|(id, (x, y))| format!("{id};0;{x};{y}"))
        .collect();
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    table(VERTEX_HEADER, &rows)
}

#[test]
fn written_directory_reimports_identically() {
    let report = MeshImporter::default()
        .import_from_readers(
            SQUARE_VERTICES.as_bytes(),
            SQUARE_EDGES.as_bytes(),
            SQUARE_FACES.as_bytes(),
        )
        .unwrap();

    let dir = scratch_dir();
    TableWriter::default()
        .write_mesh_to_dir(dir.path(), &report.mesh)
        .unwrap();
    let again = import_mesh(dir.path()).unwrap();
    assert_eq!(again.mesh, report.mesh);

    let written = std::fs::read_to_string(dir.path().join("Cell1Ds.csv")).unwrap();
    assert_eq!(written, SQUARE_EDGES);
}

proptest! {
    #[test]
    fn coordinates_survive_write_and_read(
        coords in prop::collection::vec(
            (prop::num::f64::NORMAL | prop::num::f64::ZERO | prop::num::f64::SUBNORMAL,
             prop::num::f64::NORMAL | prop::num::f64::ZERO),
            1..40,
        ),
    ) {
        let source = vertex_table(&coords);
        let mut defects = DefectLog::new();
        let table = polymesh::io::VertexTableReader::default()
            .read(source.as_bytes(), &mut defects)
            .unwrap();

        let mut out = Vec::new();
        TableWriter::default().write_vertices(&mut out, &table).unwrap();
        let reread = polymesh::io::VertexTableReader::default()
            .read(out.as_slice(), &mut defects)
            .unwrap();

        for (id, (x, y)) in coords.iter().enumerate() {
            let [rx, ry] = reread.coordinate(id as CellId).unwrap();
            prop_assert_eq!(rx.to_bits(), x.to_bits());
            prop_assert_eq!(ry.to_bits(), y.to_bits());
        }
    }

    #[test]
    fn extrema_survive_write_and_read(
        pairs in prop::collection::vec((0u32..1000, 0u32..1000), 1..40),
    ) {
        let rows: Vec<String> = pairs
            .iter()
            .enumerate()
            .map(|(id, (a, b))| format!("{id};0;{a};{b}"))
            .collect();
        let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
        let source = table(EDGE_HEADER, &rows);

        let mut defects = DefectLog::new();
        let edges = polymesh::io::EdgeTableReader::default()
            .read(source.as_bytes(), &mut defects)
            .unwrap();
        let zero_length = pairs.iter().filter(|(a, b)| a == b).count();
        prop_assert_eq!(defects.len(), zero_length);

        let mut out = Vec::new();
        TableWriter::default().write_edges(&mut out, &edges).unwrap();
        prop_assert_eq!(String::from_utf8(out).unwrap(), source);
    }

    #[test]
    fn shared_markers_keep_record_order(
        markers in prop::collection::vec(0u32..4, 1..30),
    ) {
        let rows: Vec<String> = markers
            .iter()
            .enumerate()
            .map(|(id, m)| format!("{id};{m};{id}.0;0.0"))
            .collect();
        let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
        let vertices = polymesh::io::VertexTableReader::default()
            .read(table(VERTEX_HEADER, &rows).as_bytes(), &mut DefectLog::new())
            .unwrap();

        prop_assert!(!vertices.registry().contains(0));
        for marker in 1..4u32 {
            let expected: Vec<CellId> = markers
                .iter()
                .enumerate()
                .filter(|&(_, &m)| m == marker)
                .map(|(id, _)| id as CellId)
                .collect();
            prop_assert_eq!(vertices.registry().ids(marker), expected.as_slice());
        }
    }

    #[test]
    fn polygon_area_ignores_ring_rotation(
        ring in prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 3..12),
        shift in 0usize..12,
    ) {
        let ring: Vec<[f64; 2]> = ring.into_iter().map(|(x, y)| [x, y]).collect();
        let mut rotated = ring.clone();
        rotated.rotate_left(shift % ring.len());
        let a = signed_area(&ring);
        let b = signed_area(&rotated);
        prop_assert!((a - b).abs() <= 1e-9 * (1.0 + a.abs()));
        let reversed: Vec<[f64; 2]> = ring.iter().rev().copied().collect();
        prop_assert!((signed_area(&reversed) + a).abs() <= 1e-9 * (1.0 + a.abs()));
    }
}
