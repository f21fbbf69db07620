use ply_ascii::ply::Ply;

/// Demonstrates the simplest use case for reading an ascii PLY document.
fn main() {
    let text = "\
ply
format ascii 1.0
comment a cube's corners
element vertex 8
property float x
property float y
property float z
element face 6
property list uchar int vertex_index
end_header
0 0 0
0 0 1
0 1 1
0 1 0
1 0 0
1 0 1
1 1 1
1 1 0
4 0 1 2 3
4 7 6 5 4
4 0 4 5 1
4 1 5 6 2
4 2 6 7 3
4 3 7 4 0
";

    let ply: Ply = text.parse().expect("a well-formed document");

    println!("Comments: {:?}", ply.comments);
    for (name, element) in &ply.schema {
        println!("Element '{}' with {} instances:", name, element.count);
        for instance in &ply.model[name] {
            println!("  {:?}", instance);
        }
    }

    // Values stay tokens; interpret them however suits your application.
    let x: f32 = ply.model["vertex"][6]["x"]
        .as_scalar()
        .and_then(|token| token.parse().ok())
        .expect("a float token");
    println!("Seventh vertex x as f32: {}", x);
}
