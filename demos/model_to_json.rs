use ply_ascii::ply::Ply;

/// Demonstrates exporting a decoded model as JSON.
///
/// Since values are untyped tokens, the model serializes to strings and
/// string arrays; downstream tooling can apply its own typing.
fn main() {
    let text = "\
ply
format ascii 1.0
element vertex 2
property float x
property float y
element face 1
property list uchar int vertex_index
end_header
0 0
1 1
2 0 1
";

    let ply: Ply = text.parse().expect("a well-formed document");
    let json = serde_json::to_string_pretty(&ply.model).expect("a serializable model");
    println!("{}", json);
}
