mod util;

use polymesh::prelude::*;
use util::*;

fn import(vertices: &str, edges: &str, faces: &str) -> Result<ImportReport, ImportFailure> {
    MeshImporter::default().import_from_readers(vertices.as_bytes(), edges.as_bytes(), faces.as_bytes())
}

#[test]
fn square_mesh_imports_from_directory() {
    let dir = scratch_dir();
    write_tables(dir.path(), SQUARE_VERTICES, SQUARE_EDGES, SQUARE_FACES);

    let report = import_mesh(dir.path()).expect("square mesh should import");
    assert!(report.is_clean(), "unexpected defects: {:?}", report.defects);

    let mesh = &report.mesh;
    assert_eq!(mesh.count(CellDim::Vertex), 4);
    assert_eq!(mesh.count(CellDim::Edge), 5);
    assert_eq!(mesh.count(CellDim::Face), 2);
    assert_eq!(mesh.coordinates().column(2), Some([1.0, 1.0, 0.0]));
    assert_eq!(mesh.extrema().get(4), Some([0, 2]));
    assert_eq!(mesh.faces().area(1, mesh.vertices()), Some(0.5));
}

#[test]
fn counts_equal_data_rows() {
    let vertices = table(VERTEX_HEADER, &["0;0;0;0", "1;0;1;0", "2;0;0;1", "3;0;1;1"]);
    let edges = table(EDGE_HEADER, &["0;0;0;1", "1;0;1;2", "2;0;2;0"]);
    let faces = table(FACE_HEADER, &["0;0;3;0;1;2;3;0;1;2"]);
    let report = import(&vertices, &edges, &faces).unwrap();
    assert_eq!(report.mesh.vertices().len(), 4);
    assert_eq!(report.mesh.edges().len(), 3);
    assert_eq!(report.mesh.faces().len(), 1);
}

#[test]
fn empty_vertex_table_stops_before_edges_and_faces() {
    let failure = MeshImporter::default()
        .import_from_readers(
            VERTEX_HEADER.as_bytes(),
            UntouchedReader("edge"),
            UntouchedReader("face"),
        )
        .unwrap_err();
    assert_eq!(failure.reached, ImportStage::NotStarted);
    assert_eq!(failure.error, MeshImportError::EmptyTable(CellDim::Vertex));
    assert_eq!(failure.error.to_string(), "there is no vertex");
}

#[test]
fn empty_edge_table_stops_before_faces() {
    let failure = MeshImporter::default()
        .import_from_readers(
            SQUARE_VERTICES.as_bytes(),
            format!("{EDGE_HEADER}\n").as_bytes(),
            UntouchedReader("face"),
        )
        .unwrap_err();
    assert_eq!(failure.reached, ImportStage::VerticesLoaded);
    assert_eq!(failure.error, MeshImportError::EmptyTable(CellDim::Edge));
}

#[test]
fn empty_face_table_fails_the_import() {
    let failure = import(SQUARE_VERTICES, SQUARE_EDGES, FACE_HEADER).unwrap_err();
    assert_eq!(failure.reached, ImportStage::EdgesLoaded);
    assert_eq!(failure.error.table(), Some(CellDim::Face));
}

#[test]
fn missing_edge_file_is_not_opened_when_vertices_fail() {
    let dir = scratch_dir();
    let vertex_path = dir.path().join("Cell0Ds.csv");
    std::fs::write(&vertex_path, format!("{VERTEX_HEADER}\n")).unwrap();

    let failure = import_mesh(dir.path()).unwrap_err();
    assert_eq!(failure.error, MeshImportError::EmptyTable(CellDim::Vertex));

    std::fs::write(&vertex_path, SQUARE_VERTICES).unwrap();
    let failure = import_mesh(dir.path()).unwrap_err();
    assert_eq!(failure.reached, ImportStage::VerticesLoaded);
    assert!(matches!(
        failure.error,
        MeshImportError::Unreadable {
            table: CellDim::Edge,
            ..
        }
    ));
}

#[test]
fn coordinates_follow_ids_not_row_order() {
    let vertices = table(VERTEX_HEADER, &["3;0;3.5;-3.5", "1;0;1.25;-1.25", "0;0;0.5;-0.5", "2;0;2.0;-2.0"]);
    let edges = table(EDGE_HEADER, &["0;0;0;1"]);
    let faces = table(FACE_HEADER, &["0;0;3;0;1;3;1;0"]);
    let report = import(&vertices, &edges, &faces).unwrap();
    let coords = report.mesh.coordinates();
    for (id, expected) in [(0, [0.5, -0.5]), (1, [1.25, -1.25]), (2, [2.0, -2.0]), (3, [3.5, -3.5])] {
        assert_eq!(coords.xy(id), Some(expected), "column {id}");
    }
    assert_eq!(report.mesh.vertices().ids(), &[3, 1, 0, 2]);
}

#[test]
fn zero_length_edge_is_kept_with_one_defect() {
    let edges = table(EDGE_HEADER, &["0;0;0;1", "1;0;2;2", "2;0;2;3", "3;0;3;0", "4;0;1;1"]);
    let report = import(SQUARE_VERTICES, &edges, SQUARE_FACES).unwrap();
    assert_eq!(report.mesh.edges().len(), 5);
    assert_eq!(report.mesh.edges().extrema(1), Some([2, 2]));
    let edge_defects: Vec<_> = report.defects.for_table(CellDim::Edge).cloned().collect();
    assert_eq!(
        edge_defects,
        vec![
            Defect::ZeroLengthEdge { edge: 1 },
            Defect::ZeroLengthEdge { edge: 4 }
        ]
    );
}

#[test]
fn triangle_and_collinear_faces() {
    let vertices = table(VERTEX_HEADER, &["0;0;0;0", "1;0;1;0", "2;0;0;1", "3;0;2;0"]);
    let edges = table(EDGE_HEADER, &["0;0;0;1", "1;0;1;2", "2;0;2;0", "3;0;1;3", "4;0;3;0"]);
    let faces = table(FACE_HEADER, &["0;0;3;0;1;2;3;0;1;2", "1;0;3;0;1;3;3;0;3;4"]);
    let report = import(&vertices, &edges, &faces).unwrap();

    let mesh = &report.mesh;
    assert_eq!(mesh.faces().area(0, mesh.vertices()), Some(0.5));
    let area = mesh.faces().area(1, mesh.vertices()).unwrap();
    assert!(area < DEGENERATE_AREA_TOLERANCE);

    assert_eq!(report.defects.len(), 1);
    assert!(matches!(
        report.defects.as_slice()[0],
        Defect::DegenerateFace { face: 1, .. }
    ));
    assert_eq!(mesh.faces().len(), 2);
}

#[test]
fn malformed_face_record_does_not_abort() {
    let faces = table(FACE_HEADER, &["0;0;3;0;1;2;3;0;1;4", "1;0;3;0;2"]);
    let report = import(SQUARE_VERTICES, SQUARE_EDGES, &faces).unwrap();
    let face = report.mesh.faces().face(1).unwrap();
    assert_eq!(face.vertices, &[0, 2]);
    assert!(report
        .defects
        .iter()
        .any(|d| matches!(d, Defect::MalformedFaceRecord { line: 3, tokens: 5 })));
}

#[test]
fn overrunning_face_record_is_kept_without_failing() {
    let faces = table(FACE_HEADER, &["0;0;3;0;1;2;3;0;1;4", "1;0;5;0;2;3;3;4;2;3"]);
    let report = import(SQUARE_VERTICES, SQUARE_EDGES, &faces).unwrap();
    assert_eq!(report.mesh.faces().len(), 2);
    assert_eq!(
        report.defects.as_slice(),
        &[Defect::MalformedFaceRecord { line: 3, tokens: 10 }]
    );
    assert_eq!(report.mesh.faces().area(1, report.mesh.vertices()), None);
}

#[test]
fn markers_are_registered_per_dimension() {
    let vertices = table(VERTEX_HEADER, &["0;0;0;0", "1;5;1;0", "2;5;0;1", "3;2;1;1"]);
    let edges = table(EDGE_HEADER, &["0;9;0;1", "1;0;1;2"]);
    let faces = table(FACE_HEADER, &["0;4;3;0;1;2;2;0;1"]);
    let report = import(&vertices, &edges, &faces).unwrap();
    let mesh = &report.mesh;

    let vertex_markers = mesh.markers(CellDim::Vertex);
    assert!(!vertex_markers.contains(0));
    assert_eq!(vertex_markers.ids(5), &[1, 2]);
    assert_eq!(vertex_markers.ids(2), &[3]);
    assert_eq!(mesh.vertices().marker(0), None);

    assert_eq!(mesh.markers(CellDim::Edge).ids(9), &[0]);
    assert_eq!(mesh.markers(CellDim::Edge).len(), 1);
    assert_eq!(mesh.markers(CellDim::Face).ids(4), &[0]);
}

#[test]
fn duplicate_ids_fail_fast_under_dense_policy() {
    let vertices = table(VERTEX_HEADER, &["0;0;0;0", "1;0;1;0", "1;0;0;1"]);
    let failure = import(&vertices, SQUARE_EDGES, SQUARE_FACES).unwrap_err();
    assert_eq!(failure.reached, ImportStage::NotStarted);
    assert!(matches!(
        failure.error,
        MeshImportError::DuplicateId {
            table: CellDim::Vertex,
            id: 1,
            line: 4
        }
    ));
}

#[test]
fn sparse_ids_import_with_sparse_policy() {
    let vertices = table(VERTEX_HEADER, &["10;0;0;0", "20;0;1;0", "30;0;0;1"]);
    let edges = table(EDGE_HEADER, &["100;0;10;20", "200;0;20;30", "300;0;30;10"]);
    let faces = table(FACE_HEADER, &["7;0;3;10;20;30;3;100;200;300"]);

    let dense = import(&vertices, &edges, &faces).unwrap_err();
    assert!(matches!(dense.error, MeshImportError::IdOutOfRange { id: 10, .. }));

    let importer = MeshImporter::new(ImportOptions {
        id_policy: IdPolicy::Sparse,
        ..ImportOptions::default()
    });
    let report = importer
        .import_from_readers(vertices.as_bytes(), edges.as_bytes(), faces.as_bytes())
        .unwrap();
    assert!(report.is_clean());
    assert_eq!(report.mesh.vertices().coordinate(30), Some([0.0, 1.0]));
    assert_eq!(report.mesh.faces().area(7, report.mesh.vertices()), Some(0.5));
}

#[test]
fn face_with_unknown_vertex_fails() {
    let faces = table(FACE_HEADER, &["0;0;3;0;1;8;3;0;1;4"]);
    let failure = import(SQUARE_VERTICES, SQUARE_EDGES, &faces).unwrap_err();
    assert_eq!(failure.reached, ImportStage::EdgesLoaded);
    assert_eq!(
        failure.error,
        MeshImportError::UnknownVertex { face: 0, vertex: 8 }
    );
}

#[test]
fn invalid_options_fail_before_any_table_is_read() {
    let importer = MeshImporter::new(ImportOptions {
        area_tolerance: -1.0,
        ..ImportOptions::default()
    });
    let failure = importer
        .import_from_readers(
            UntouchedReader("vertex"),
            UntouchedReader("edge"),
            UntouchedReader("face"),
        )
        .unwrap_err();
    assert_eq!(failure.reached, ImportStage::NotStarted);
    assert!(matches!(failure.error, MeshImportError::InvalidOption(_)));
}

#[test]
fn report_serializes_to_json() {
    let report = import(SQUARE_VERTICES, SQUARE_EDGES, SQUARE_FACES).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    let back: ImportReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}
