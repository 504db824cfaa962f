use std::io::Cursor;
use std::path::Path;

use tetgen_tetra::{parse_tetra, parse_tetra_header, ConvertError, ElementCounts, ElementKind};

const BUNNY: &str = "vc 4
ec 1
fc 1
tc 1
tnc 1

v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
v 0.0 0.0 1.0
e 0 1
f 0 1 2
t 0 1 2 3
tn -1 -1 -1 -1
";

fn parse(text: &str) -> tetgen_tetra::Result<tetgen_tetra::TetraMesh> {
    parse_tetra(Cursor::new(text), Path::new("bunny.tetra"))
}

#[test]
fn loads_every_kind() {
    let mesh = parse(BUNNY).unwrap();
    assert_eq!(mesh.counts(), ElementCounts::new(4, 1, 1, 1, 1));
    assert_eq!(mesh.vertices[3], [0.0, 0.0, 1.0]);
    assert_eq!(mesh.edges, vec![[0, 1]]);
    assert_eq!(mesh.faces, vec![[0, 1, 2]]);
    assert_eq!(mesh.tetras, vec![[0, 1, 2, 3]]);
    assert_eq!(mesh.neighbors, vec![[-1, -1, -1, -1]]);
}

#[test]
fn header_only() {
    let counts = parse_tetra_header(Cursor::new(BUNNY), Path::new("bunny.tetra")).unwrap();
    assert_eq!(counts[ElementKind::Vertex], 4);
    assert_eq!(counts[ElementKind::Neighbor], 1);
}

#[test]
fn skips_unknown_tags_and_blank_lines() {
    let text = BUNNY.replace("e 0 1\n", "\n# comment\ne 0 1\nvn 0 0 1\n");
    let mesh = parse(&text).unwrap();
    assert_eq!(mesh.edges.len(), 1);
    assert_eq!(mesh.vertices.len(), 4);
}

#[test]
fn missing_rows_are_rejected() {
    let text = BUNNY.replace("t 0 1 2 3\n", "");
    let err = parse(&text).unwrap_err();
    match err {
        ConvertError::CountMismatch {
            kind,
            declared,
            found,
            ..
        } => {
            assert_eq!(kind, ElementKind::Tetra);
            assert_eq!(declared, 1);
            assert_eq!(found, 0);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn header_tags_must_be_in_order() {
    let text = BUNNY.replacen("ec 1\nfc 1", "fc 1\nec 1", 1);
    let err = parse(&text).unwrap_err();
    assert!(matches!(err, ConvertError::MalformedHeader { line: 2, .. }));
}

#[test]
fn truncated_header_is_rejected() {
    let err = parse("vc 1\nec 0\n").unwrap_err();
    assert!(matches!(err, ConvertError::MalformedHeader { line: 3, .. }));
}

#[test]
fn bad_row_reports_line() {
    let text = BUNNY.replace("f 0 1 2", "f 0 one 2");
    let err = parse(&text).unwrap_err();
    assert!(matches!(err, ConvertError::MalformedRow { line: 12, .. }));
    assert!(err.to_string().starts_with("bunny.tetra:12:"));
}

#[test]
fn invalid_utf8_is_unreadable() {
    let bytes: &[u8] = b"vc 1\nec 0\nfc 0\ntc 0\ntnc 0\n\nv 0.0 \xff 1.0\n";
    let err = parse_tetra(Cursor::new(bytes), Path::new("bunny.tetra")).unwrap_err();
    assert!(matches!(err, ConvertError::FileUnreadable { .. }));

    let err = parse_tetra_header(Cursor::new(&b"vc \xfe\n"[..]), Path::new("bunny.tetra"))
        .unwrap_err();
    assert!(matches!(err, ConvertError::FileUnreadable { .. }));
}
