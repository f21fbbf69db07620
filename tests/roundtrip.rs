use ply_ascii::ply::Ply;

/// Tokenizes a document, dropping the canonical preamble lines (magic,
/// format, generator comment) so documents can be compared structurally.
fn content_tokens(txt: &str) -> Vec<&str> {
    txt.lines()
        .filter(|line| {
            let trimmed = line.trim();
            trimmed != "ply"
                && trimmed != "format ascii 1.0"
                && trimmed != "comment generated by ply-ascii"
        })
        .flat_map(str::split_whitespace)
        .collect()
}

fn roundtrip(txt: &str) -> String {
    let ply: Ply = txt.parse().unwrap();
    ply.write().unwrap()
}

const TETRAHEDRON: &str = "ply\n\
format ascii 1.0\n\
comment Tetrahedron example\n\
element vertex 4\n\
property float x\n\
property float y\n\
property float z\n\
element face 4\n\
property list uchar int vertex_indices\n\
end_header\n\
1 1 1\n\
1 -1 -1\n\
-1 1 -1\n\
-1 -1 1\n\
3 0 1 2\n\
3 0 3 1\n\
3 0 2 3\n\
3 1 3 2\n";

#[test]
fn roundtrip_preserves_tokens() {
    let written = roundtrip(TETRAHEDRON);
    assert_eq!(content_tokens(&written), content_tokens(TETRAHEDRON));
}

#[test]
fn roundtrip_canonicalizes_whitespace() {
    let ragged = "ply\n\
format ascii 1.0\n\
element point 2\n\
property int x\n\
property int y\n\
end_header\n\
  -7\t 5\n\
2     4   \n";
    let written = roundtrip(ragged);
    assert_eq!(content_tokens(&written), content_tokens(ragged));
    assert!(written.contains("\n-7 5\n"));
    assert!(written.contains("\n2 4\n"));
}

#[test]
fn reserialization_is_idempotent() {
    let first = roundtrip(TETRAHEDRON);
    let second = roundtrip(&first);
    assert_eq!(first, second);
}

#[test]
fn reserialization_is_idempotent_without_comments() {
    let txt = "ply\nformat ascii 1.0\nelement point 1\nproperty int x\nend_header\n7\n";
    let first = roundtrip(txt);
    let second = roundtrip(&first);
    assert_eq!(first, second);
}

#[test]
fn roundtrip_keeps_schema_and_model_equal() {
    let original: Ply = TETRAHEDRON.parse().unwrap();
    let reread: Ply = original.write().unwrap().parse().unwrap();
    assert_eq!(original, reread);
}

#[test]
fn roundtrip_keeps_element_order() {
    // Body partitioning depends on schema order surviving the trip.
    let txt = "ply\n\
format ascii 1.0\n\
element b 1\n\
property int v\n\
element a 1\n\
property int v\n\
end_header\n\
1\n\
2\n";
    let reread: Ply = roundtrip(txt).parse().unwrap();
    let names: Vec<&String> = reread.schema.keys().collect();
    assert_eq!(names, ["b", "a"]);
    assert_eq!(reread.model["b"][0]["v"].as_scalar(), Some("1"));
    assert_eq!(reread.model["a"][0]["v"].as_scalar(), Some("2"));
}
