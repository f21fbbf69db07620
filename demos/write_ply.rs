use ply_ascii::ply::{
    Addable, ElementDef, Instance, Ply, PropertyDef, PropertyType, Value,
};
use ply_ascii::writer::Writer;

/// Demonstrates writing a PLY document representing a tetrahedron.
///
/// A tetrahedron is a pyramid-like shape, consisting of 4 vertices and 4
/// triangular faces. This example shows how to define vertex positions and
/// face indices programmatically and serialize them.
fn main() {
    // Set up a target buffer (could also be a file)
    let mut buf = Vec::<u8>::new();

    let mut ply = create_tetrahedron_ply();

    // Set up a writer and write the PLY data
    let w = Writer::new();
    let written = w.write_ply(&mut buf, &mut ply).unwrap();
    println!("{} bytes written", written);

    // Display the written PLY document
    let output = String::from_utf8(buf).unwrap();
    println!("Written PLY data:\n{}", output);
}

/// Creates a PLY document representing a regular tetrahedron.
///
/// The tetrahedron is centered roughly at the origin with vertices at:
/// - (1, 1, 1)
/// - (1, -1, -1)
/// - (-1, 1, -1)
/// - (-1, -1, 1)
fn create_tetrahedron_ply() -> Ply {
    let mut ply = Ply::new();
    ply.comments.push("Tetrahedron example".to_string());

    // Define vertex element with x, y, z properties
    let mut vertex_element = ElementDef::new("vertex".to_string());
    for name in ["x", "y", "z"] {
        vertex_element.properties.add(PropertyDef::new(
            name.to_string(),
            PropertyType::Scalar("float".to_string()),
        ));
    }
    ply.schema.add(vertex_element);

    // Define face element with a vertex_indices list property
    let mut face_element = ElementDef::new("face".to_string());
    face_element.properties.add(PropertyDef::new(
        "vertex_indices".to_string(),
        PropertyType::List("uchar".to_string(), "int".to_string()),
    ));
    ply.schema.add(face_element);

    // The 4 vertices of a regular tetrahedron
    let vertices = [
        ["1", "1", "1"],
        ["1", "-1", "-1"],
        ["-1", "1", "-1"],
        ["-1", "-1", "1"],
    ];
    let mut vertex_list = Vec::new();
    for [x, y, z] in vertices {
        let mut vertex = Instance::new();
        vertex.insert("x".to_string(), Value::from(x));
        vertex.insert("y".to_string(), Value::from(y));
        vertex.insert("z".to_string(), Value::from(z));
        vertex_list.push(vertex);
    }
    ply.model.insert("vertex".to_string(), vertex_list);

    // The 4 triangular faces
    let faces = [
        ["0", "1", "2"],
        ["0", "3", "1"],
        ["0", "2", "3"],
        ["1", "3", "2"],
    ];
    let mut face_list = Vec::new();
    for indices in faces {
        let mut face = Instance::new();
        face.insert("vertex_indices".to_string(), Value::from(indices));
        face_list.push(face);
    }
    ply.model.insert("face".to_string(), face_list);

    ply.make_consistent().unwrap();
    ply
}
