//! Core data structures representing an ascii PLY document.
//!
//! This module defines [`Ply`] together with the type definitions needed to
//! describe element/property declarations ([`ElementDef`], [`PropertyDef`]).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{PlyError, PlyResult, Warning};
use crate::parser::Parser;
use crate::parser::ply_grammar::{Line, grammar};
use crate::writer::Writer;
use super::KeyMap;
use super::Model;

/// Models all necessary information to interact with an ascii PLY document.
///
/// A `Ply` owns the three pieces a document consists of: the [`Schema`]
/// declared in the header, the header comments, and the decoded [`Model`].
///
/// # Examples
///
/// Assume you have a `Ply` object called `ply` and want to access the third
/// `point` instance:
///
/// ```rust
/// # use ply_ascii::ply::Ply;
/// let text = "ply\n\
///     format ascii 1.0\n\
///     element point 3\n\
///     property float x\n\
///     end_header\n\
///     0\n1\n2\n";
/// let ply: Ply = text.parse().unwrap();
/// assert_eq!(ply.model["point"][2]["x"].as_scalar(), Some("2"));
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Ply {
    /// Ordered map of element declarations as they appear in the header.
    ///
    /// Schema order decides how body lines are partitioned among elements,
    /// and in which order elements are written back.
    pub schema: Schema,
    /// File comments, in header declaration order.
    pub comments: Vec<Comment>,
    /// The decoded payload found after the `end_header` line.
    ///
    /// One line in the body corresponds to a single instance. The model
    /// groups instances of the same element together in a vector.
    pub model: Model,
}

impl Default for Ply {
    fn default() -> Self {
        Self::new()
    }
}

impl Ply {
    /// Creates an empty `Ply`: no elements, no comments, no model entries.
    pub fn new() -> Self {
        Ply {
            schema: Schema::new(),
            comments: Vec::new(),
            model: Model::new(),
        }
    }

    /// Populates this document from the complete text of an ascii PLY file.
    ///
    /// The text is split on the `end_header` sentinel; everything before it
    /// is parsed as the header, everything after as the body. On success all
    /// three fields are replaced together and any non-fatal header
    /// diagnostics are returned. On failure the document is left untouched.
    pub fn read(&mut self, text: &str) -> PlyResult<Vec<Warning>> {
        let (header, body) = split_document(text)?;
        let parser = Parser::new();
        let parsed = parser.read_header(header)?;
        let model = parser.read_body(&parsed.elements, body)?;
        self.schema = parsed.elements;
        self.comments = parsed.comments;
        self.model = model;
        Ok(parsed.warnings)
    }

    /// Populates this document from a reader yielding an ascii PLY file.
    ///
    /// The source is read to its end before parsing starts. Bytes that are
    /// not valid UTF-8 text fail with [`PlyError::InvalidInput`] and leave
    /// the document untouched.
    pub fn read_from<T: std::io::Read>(&mut self, source: &mut T) -> PlyResult<Vec<Warning>> {
        let mut bytes = Vec::new();
        source.read_to_end(&mut bytes)?;
        let text = String::from_utf8(bytes)
            .map_err(|e| PlyError::InvalidInput(format!("expected text: {}", e)))?;
        self.read(&text)
    }

    /// Serializes the current state into a new document string.
    ///
    /// This is a pure read of the document; nothing is mutated. Fails with
    /// [`PlyError::Inconsistent`] if the model misses an entry the schema
    /// requires, or a value's shape contradicts its property declaration.
    pub fn write(&self) -> PlyResult<String> {
        let mut buf = Vec::<u8>::new();
        Writer::new().write_ply_unchecked(&mut buf, self)?;
        String::from_utf8(buf).map_err(|e| PlyError::InvalidInput(format!("output is not text: {}", e)))
    }

    /// Serializes the current state into `sink`, returning the bytes written.
    pub fn write_to<T: std::io::Write>(&self, sink: &mut T) -> PlyResult<usize> {
        Writer::new().write_ply_unchecked(sink, self)
    }

    /// Aligns the schema's instance counts with the model.
    ///
    /// Every element's `count` is set to the number of instances the model
    /// holds for it; elements without a model entry get an empty one. A model
    /// entry that names no schema element is an error, since the writer would
    /// have nowhere to emit it.
    pub fn make_consistent(&mut self) -> PlyResult<()> {
        for name in self.model.keys() {
            if !self.schema.contains_key(name) {
                return Err(PlyError::Inconsistent(format!(
                    "Model entry '{}' has no matching element declaration.",
                    name
                )));
            }
        }
        for name in self.schema.keys() {
            self.model.entry(name.clone()).or_default();
        }
        for (name, element_def) in &mut self.schema {
            element_def.count = self.model[name].len();
        }
        Ok(())
    }
}

impl FromStr for Ply {
    type Err = PlyError;

    /// Builds a document seeded from the complete text of an ascii PLY file.
    ///
    /// Warnings are discarded; use [`Ply::read`] to observe them.
    fn from_str(text: &str) -> PlyResult<Self> {
        let mut ply = Ply::new();
        ply.read(text)?;
        Ok(ply)
    }
}

/// Splits a raw document on the whitespace-surrounded `end_header` sentinel.
///
/// Returns the text before the sentinel and the body after it, with the
/// whitespace run following the sentinel consumed. `end_header` appearing
/// inside a longer token (say, a comment mentioning it mid-line) does not
/// split.
fn split_document(text: &str) -> PlyResult<(&str, &str)> {
    const SENTINEL: &str = "end_header";
    let mut search = 0;
    while let Some(found) = text[search..].find(SENTINEL) {
        let at = search + found;
        let after = at + SENTINEL.len();
        let preceded = text[..at].ends_with(|c: char| c.is_whitespace());
        let followed = after == text.len()
            || text[after..].starts_with(|c: char| c.is_whitespace());
        if preceded && followed {
            let body = text[after..].trim_start_matches([' ', '\t', '\r', '\n']);
            return Ok((&text[..at], body));
        }
        search = after;
    }
    Err(PlyError::MalformedHeader(
        "No 'end_header' sentinel found.".to_string(),
    ))
}

// Header types

/// The ordered element declarations of a document's header.
///
/// Keyed by element name; insertion order is declaration order. Element names
/// are unique here, the header parser refuses duplicates.
pub type Schema = KeyMap<ElementDef>;

/// Alias to give comments an explicit type.
pub type Comment = String;

/// Name of a declared value type, e.g. `float` or `uchar`.
///
/// Type names are carried verbatim from the header to the writer. Nothing in
/// this crate checks them against the PLY scalar-type vocabulary or uses them
/// to interpret body tokens.
pub type TypeName = String;

/// Models the definition of an element.
///
/// Elements describe single entities consisting of different properties.
/// A single point is an element.
/// We might model it as consisting of three coordinates: x, y, and z.
/// Usually, one finds a list of elements in a ply file.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ElementDef {
    /// Name of the element.
    ///
    /// Each element within a PLY document needs a unique name.
    /// There are common conventions like using "vertex" and "face" to assure
    /// interoperability between applications.
    pub name: String,
    /// How many instances of this element the body carries.
    ///
    /// The `count` is used when reading, since the decoder consumes exactly
    /// this many body lines for the element. It is also written back to the
    /// header.
    pub count: usize,
    /// An element is modeled by multiple properties, those are named scalars or lists.
    pub properties: KeyMap<PropertyDef>,
}

impl ElementDef {
    /// Creates a new element definition.
    ///
    /// The name should be unique for each element in a document.
    ///
    /// You should never need to set `count` manually, since it is set by the
    /// consistency check (see [`Ply::make_consistent`]).
    ///
    /// No properties are set.
    pub fn new(name: String) -> Self {
        ElementDef {
            name,
            count: 0,
            properties: KeyMap::new(),
        }
    }
}

impl FromStr for ElementDef {
    type Err = PlyError;

    /// Parses a header declaration like `element vertex 8`.
    fn from_str(line: &str) -> PlyResult<Self> {
        match grammar::line(line) {
            Ok(Line::Element(Some(element))) => Ok(element),
            _ => Err(PlyError::MalformedHeader(format!(
                "Not an element declaration: '{}'",
                line.trim_end()
            ))),
        }
    }
}

/// Defines a property of an element.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct PropertyDef {
    /// Unique name of property.
    ///
    /// The name should be unique for each property of the same element.
    pub name: String,
    /// Declared shape of the property: a single scalar, or a list with its
    /// own count type and entry type.
    pub data_type: PropertyType,
}

impl PropertyDef {
    /// Creates a new property definition.
    pub fn new(name: String, data_type: PropertyType) -> Self {
        PropertyDef { name, data_type }
    }
}

impl FromStr for PropertyDef {
    type Err = PlyError;

    /// Parses a header declaration like `property float x` or
    /// `property list uchar int vertex_index`.
    fn from_str(line: &str) -> PlyResult<Self> {
        match grammar::line(line) {
            Ok(Line::Property(Some(property))) => Ok(property),
            _ => Err(PlyError::MalformedHeader(format!(
                "Not a property declaration: '{}'",
                line.trim_end()
            ))),
        }
    }
}

/// Declared shape of a property's values.
///
/// There are two possible forms: scalars and lists. A list value is written
/// with a leading length, whose declared type is carried as the first
/// parameter. Both type names are opaque to this crate; they matter to
/// consumers that interpret the tokens, not to parsing or writing itself.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum PropertyType {
    /// Simple, "one-token" form, e.g. `property float x`.
    Scalar(TypeName),
    /// Variable-length form, e.g. `property list uchar int vertex_index`.
    ///
    /// First value is the type the list length is encoded with, second the
    /// type of the list entries.
    List(TypeName, TypeName),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ply::Addable;

    #[test]
    fn test_ply_new() {
        let ply = Ply::new();
        assert!(ply.schema.is_empty());
        assert!(ply.comments.is_empty());
        assert!(ply.model.is_empty());
    }

    #[test]
    fn test_ply_default() {
        assert_eq!(Ply::default(), Ply::new());
    }

    #[test]
    fn test_element_def_new() {
        let e = ElementDef::new("vertex".to_string());
        assert_eq!(e.name, "vertex");
        assert_eq!(e.count, 0);
        assert!(e.properties.is_empty());
    }

    #[test]
    fn test_element_def_from_declaration() {
        let e: ElementDef = "element vertex 8".parse().unwrap();
        assert_eq!(e.name, "vertex");
        assert_eq!(e.count, 8);
        assert!(e.properties.is_empty());
    }

    #[test]
    fn test_element_def_from_declaration_err() {
        assert!("element 8 vertex".parse::<ElementDef>().is_err());
        assert!("element vertex".parse::<ElementDef>().is_err());
        assert!("property float x".parse::<ElementDef>().is_err());
    }

    #[test]
    fn test_property_def_new() {
        let pt = PropertyType::Scalar("float".to_string());
        let p = PropertyDef::new("x".to_string(), pt.clone());
        assert_eq!(p.name, "x");
        assert_eq!(p.data_type, pt);
    }

    #[test]
    fn test_property_def_from_declaration() {
        let p: PropertyDef = "property float x".parse().unwrap();
        assert_eq!(p.name, "x");
        assert_eq!(p.data_type, PropertyType::Scalar("float".to_string()));

        let p: PropertyDef = "property list uchar int vertex_index".parse().unwrap();
        assert_eq!(p.name, "vertex_index");
        assert_eq!(
            p.data_type,
            PropertyType::List("uchar".to_string(), "int".to_string())
        );
    }

    #[test]
    fn test_property_def_from_declaration_err() {
        assert!("property float".parse::<PropertyDef>().is_err());
        assert!("property list uchar x".parse::<PropertyDef>().is_err());
        assert!("element vertex 8".parse::<PropertyDef>().is_err());
    }

    #[test]
    fn test_split_document() {
        let (header, body) = split_document("ply\nend_header\n1 2\n").unwrap();
        assert_eq!(header, "ply\n");
        assert_eq!(body, "1 2\n");
    }

    #[test]
    fn test_split_document_consumes_whitespace_run() {
        let (_, body) = split_document("ply\nend_header\r\n\n  1 2\n").unwrap();
        assert_eq!(body, "1 2\n");
    }

    #[test]
    fn test_split_document_ignores_embedded_sentinel() {
        let text = "comment not_an_end_header marker\nend_header\n";
        let (header, body) = split_document(text).unwrap();
        assert!(header.starts_with("comment"));
        assert_eq!(body, "");
    }

    #[test]
    fn test_split_document_missing_sentinel() {
        assert!(split_document("ply\nformat ascii 1.0\n").is_err());
    }

    #[test]
    fn test_make_consistent_counts() {
        let mut ply = Ply::new();
        let mut e = ElementDef::new("point".to_string());
        e.properties.add(PropertyDef::new(
            "x".to_string(),
            PropertyType::Scalar("int".to_string()),
        ));
        ply.schema.add(e);

        let mut instance = crate::ply::Instance::new();
        instance.insert("x".to_string(), crate::ply::Value::from("1"));
        ply.model.insert("point".to_string(), vec![instance]);

        ply.make_consistent().unwrap();
        assert_eq!(ply.schema["point"].count, 1);
    }

    #[test]
    fn test_make_consistent_adds_missing_model_entry() {
        let mut ply = Ply::new();
        ply.schema.add(ElementDef::new("vertex".to_string()));
        ply.make_consistent().unwrap();
        assert_eq!(ply.model["vertex"].len(), 0);
        assert_eq!(ply.schema["vertex"].count, 0);
    }

    #[test]
    fn test_make_consistent_rejects_orphan_model_entry() {
        let mut ply = Ply::new();
        ply.model.insert("ghost".to_string(), Vec::new());
        assert!(ply.make_consistent().is_err());
    }
}
