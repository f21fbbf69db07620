//! Parses ascii PLY text into schema, comments and model.

use std::slice::Iter;

use crate::errors::{PlyError, PlyResult, Warning};
use crate::ply::{Addable, Comment, ElementDef, Instance, Model, PropertyDef, PropertyType, Schema, Value};

pub mod ply_grammar;

use self::ply_grammar::{Line, grammar};

fn header_error<T>(line_index: usize, line_str: &str, message: &str) -> PlyResult<T> {
    Err(PlyError::MalformedHeader(
        format!("Line {}: {}\n\tString: '{}'", line_index, message, line_str)
    ))
}

/// Re-raises a body decoding error with the line it happened on attached.
fn body_rethrow(line_index: usize, line_str: &str, e: PlyError) -> PlyError {
    match e {
        PlyError::TruncatedRecord(m) => PlyError::TruncatedRecord(
            format!("Line {}: {}\n\tString: '{}'", line_index, m, line_str)
        ),
        PlyError::MalformedBody(m) => PlyError::MalformedBody(
            format!("Line {}: {}\n\tString: '{}'", line_index, m, line_str)
        ),
        other => other,
    }
}

/// The result of parsing a header block: the declared schema, the comments,
/// and any non-fatal diagnostics collected on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedHeader {
    /// Ordered element declarations.
    pub elements: Schema,
    /// Comments in declaration order.
    pub comments: Vec<Comment>,
    /// Diagnostics that did not abort parsing, e.g. a non-ascii format line.
    pub warnings: Vec<Warning>,
}

/// Reads ascii PLY text into schema and model data.
///
/// In most cases [`crate::ply::Ply::read`] should suffice. If you need finer
/// control over the read process, there are methods down to the line level.
///
/// # Examples
///
/// Parsing a header block and then its body:
///
/// ```rust
/// # use ply_ascii::parser::Parser;
/// let p = Parser::new();
///
/// let header = p.read_header(
///     "ply\nformat ascii 1.0\nelement vertex 2\nproperty float x\n"
/// ).unwrap();
/// assert_eq!(header.elements["vertex"].count, 2);
///
/// let model = p.read_body(&header.elements, "0\n1\n").unwrap();
/// assert_eq!(model["vertex"].len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser;

impl Parser {
    /// Creates a new `Parser`.
    pub fn new() -> Self {
        Parser
    }

    /// Parses a header block: every line before the `end_header` sentinel.
    ///
    /// Lines are dispatched on their leading keyword. `element` and
    /// `property` declarations build up the schema, `comment` lines are
    /// collected verbatim, a `format` line other than `format ascii 1.0`
    /// produces a [`Warning::FormatMismatch`], and anything else (the `ply`
    /// magic line, blank lines, keywords such as `obj_info`) is ignored. An
    /// `end_header` line stops parsing, so feeding the whole header including
    /// the sentinel is fine too. The generator comment this crate's writer
    /// emits counts as preamble and is not collected.
    pub fn read_header(&self, header: &str) -> PlyResult<ParsedHeader> {
        let mut elements = Schema::new();
        let mut comments = Vec::<Comment>::new();
        let mut warnings = Vec::<Warning>::new();

        for (index, line_str) in header.lines().enumerate() {
            let line_index = index + 1;
            let line = match grammar::line(line_str) {
                Ok(line) => line,
                Err(e) => {
                    return header_error(
                        line_index,
                        line_str,
                        &format!("Couldn't parse line.\n\tError: {}", e),
                    );
                }
            };

            match line {
                Line::MagicNumber | Line::Ignored => (),
                Line::EndHeader => break,
                Line::Format(ref args) => {
                    if !args.split_whitespace().eq(["ascii", "1.0"]) {
                        warnings.push(Warning::FormatMismatch {
                            line: line_str.trim().to_string(),
                        });
                    }
                }
                Line::Comment(c) => {
                    // The generator line is preamble, not content.
                    if c != crate::writer::GENERATED_BY {
                        comments.push(c);
                    }
                }
                Line::Element(Some(e)) => {
                    if let Err(duplicate) = elements.add_unique(e) {
                        return header_error(
                            line_index,
                            line_str,
                            &format!("Element '{}' declared twice.", duplicate.name),
                        );
                    }
                }
                Line::Element(None) => {
                    return header_error(line_index, line_str, "Invalid element declaration.");
                }
                Line::Property(Some(p)) => {
                    if elements.is_empty() {
                        return header_error(
                            line_index,
                            line_str,
                            &format!("Property '{}' found without preceding element.", p.name),
                        );
                    }
                    let (_, mut element) = elements.pop().unwrap();
                    if let Err(duplicate) = element.properties.add_unique(p) {
                        return header_error(
                            line_index,
                            line_str,
                            &format!(
                                "Property '{}' declared twice in element '{}'.",
                                duplicate.name, element.name
                            ),
                        );
                    }
                    elements.add(element);
                }
                Line::Property(None) => {
                    return header_error(line_index, line_str, "Invalid property declaration.");
                }
            }
        }

        Ok(ParsedHeader {
            elements,
            comments,
            warnings,
        })
    }

    /// Parses a single PLY header line.
    ///
    /// This is a low-level helper that exposes the header grammar; most
    /// callers should use [`Parser::read_header`] or [`crate::ply::Ply::read`].
    pub fn read_header_line(&self, line: &str) -> PlyResult<Line> {
        match grammar::line(line) {
            Ok(l) => Ok(l),
            Err(e) => Err(PlyError::MalformedHeader(
                format!("Couldn't parse line.\n\tString: '{}'\n\tError: {}", line, e)
            )),
        }
    }

    /// Decodes a body block against `schema`, producing the model.
    ///
    /// Body lines are consumed positionally: the first element takes the
    /// first `count` lines, the next element the following ones, with no
    /// separators in between. Fails with [`PlyError::TruncatedRecord`] when
    /// the body runs out of lines or a line runs out of tokens before the
    /// schema is satisfied.
    pub fn read_body(&self, schema: &Schema, body: &str) -> PlyResult<Model> {
        let lines: Vec<&str> = body.lines().collect();
        let mut model = Model::with_capacity(schema.len());

        let mut offset = 0;
        for (name, element_def) in schema {
            if lines.len() < offset + element_def.count {
                return Err(PlyError::TruncatedRecord(format!(
                    "Unexpected end of body while reading element '{}' (expected {} lines, got {}).",
                    name,
                    element_def.count,
                    lines.len() - offset,
                )));
            }
            let mut instances = Vec::with_capacity(element_def.count);
            for (i, line_str) in lines[offset..offset + element_def.count].iter().enumerate() {
                let instance = self
                    .read_ascii_element(line_str, element_def)
                    .map_err(|e| body_rethrow(offset + i + 1, line_str, e))?;
                instances.push(instance);
            }
            model.insert(name.clone(), instances);
            offset += element_def.count;
        }
        Ok(model)
    }

    /// Decodes a single body line as one instance of `element_def`.
    ///
    /// Make sure lines are decoded in the order elements are defined in the
    /// header.
    pub fn read_ascii_element(&self, line: &str, element_def: &ElementDef) -> PlyResult<Instance> {
        let tokens = match grammar::data_line(line) {
            Ok(t) => t,
            Err(e) => {
                return Err(PlyError::MalformedBody(
                    format!("Couldn't tokenize line.\n\tString: '{}'\n\tError: {}", line, e)
                ));
            }
        };

        let mut token_it: Iter<&str> = tokens.iter();
        let mut instance = Instance::new();
        for (name, property_def) in &element_def.properties {
            let value = self.read_ascii_value(&mut token_it, property_def)?;
            instance.insert(name.clone(), value);
        }
        Ok(instance)
    }

    fn read_ascii_value(&self, token_it: &mut Iter<&str>, property_def: &PropertyDef) -> PlyResult<Value> {
        match property_def.data_type {
            PropertyType::Scalar(_) => {
                let token = match token_it.next() {
                    Some(token) => token,
                    None => {
                        return Err(PlyError::TruncatedRecord(format!(
                            "Expected a value for property '{}', but the line ended.",
                            property_def.name
                        )));
                    }
                };
                Ok(Value::Scalar((*token).to_string()))
            }
            PropertyType::List(..) => {
                let raw_length = match token_it.next() {
                    Some(token) => token,
                    None => {
                        return Err(PlyError::TruncatedRecord(format!(
                            "Expected a list length for property '{}', but the line ended.",
                            property_def.name
                        )));
                    }
                };
                let length: usize = raw_length.parse().map_err(|_| {
                    PlyError::MalformedBody(format!(
                        "List length '{}' of property '{}' is not an unsigned integer.",
                        raw_length, property_def.name
                    ))
                })?;
                let mut entries = Vec::with_capacity(length);
                for i in 0..length {
                    match token_it.next() {
                        Some(token) => entries.push((*token).to_string()),
                        None => {
                            return Err(PlyError::TruncatedRecord(format!(
                                "Expected {} list entries for property '{}', but found only {}.",
                                length, property_def.name, i
                            )));
                        }
                    }
                }
                Ok(Value::List(entries))
            }
        }
    }
}
