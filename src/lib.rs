//! A library for reading and writing ascii PLY documents.
//!
//! The PLY format describes its own payload: a text header declares a
//! sequence of elements, each with named scalar or list properties, and the
//! body carries one line per element instance. This crate parses the header
//! into a schema, decodes the body against it, and can write the whole
//! document back out. Values are carried as the tokens found in the file;
//! interpreting `float`, `uchar` and friends is left to the consumer, which
//! keeps the crate agnostic about what the elements mean.
//!
//! Binary PLY encodings are out of scope; a `format` line declaring one is
//! reported as a warning and the body is still decoded as ascii.
//!
//! # Examples
//!
//! Reading a document:
//!
//! ```rust
//! use ply_ascii::ply::Ply;
//!
//! let text = "\
//! ply
//! format ascii 1.0
//! comment test
//! element vertex 2
//! property float x
//! property float y
//! end_header
//! 0 0
//! 1 1
//! ";
//!
//! let ply: Ply = text.parse().unwrap();
//! assert_eq!(ply.comments, vec!["test".to_string()]);
//! assert_eq!(ply.model["vertex"][0]["x"].as_scalar(), Some("0"));
//! assert_eq!(ply.model["vertex"][1]["y"].as_scalar(), Some("1"));
//! ```
//!
//! Building a document and writing it:
//!
//! ```rust
//! use ply_ascii::ply::{Addable, ElementDef, Instance, Ply, PropertyDef, PropertyType, Value};
//!
//! let mut ply = Ply::new();
//! let mut point = ElementDef::new("point".to_string());
//! point.properties.add(PropertyDef::new(
//!     "x".to_string(),
//!     PropertyType::Scalar("int".to_string()),
//! ));
//! ply.schema.add(point);
//!
//! let mut instance = Instance::new();
//! instance.insert("x".to_string(), Value::from("7"));
//! ply.model.insert("point".to_string(), vec![instance]);
//!
//! ply.make_consistent().unwrap();
//! let text = ply.write().unwrap();
//! assert!(text.contains("element point 1"));
//! assert!(text.ends_with("end_header\n7\n"));
//! ```

#![warn(missing_docs)]

pub mod errors;
pub mod parser;
pub mod ply;
pub mod writer;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
