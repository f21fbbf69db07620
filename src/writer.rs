//! Writes a `Ply` document back out as ascii text.

use std::io::Write;

use crate::errors::{PlyError, PlyResult};
use crate::ply::{Comment, ElementDef, Instance, Model, Ply, PropertyType, Schema, Value};

/// Comment line identifying this crate as the generator, written right after
/// the format line. It belongs to the fixed preamble, not to the document's
/// comment list: the header parser recognizes it on read and the writer never
/// emits it from the comment list, so reading a written document and writing
/// it again yields the same text.
pub(crate) const GENERATED_BY: &str = "generated by ply-ascii";

/// Writes a `Ply` document in ascii format.
///
/// # Examples
///
/// ```rust
/// # use ply_ascii::ply::Ply;
/// # use ply_ascii::writer::Writer;
/// let mut buf = Vec::<u8>::new();
/// let mut ply = Ply::new();
/// let w = Writer::new();
/// let written = w.write_ply(&mut buf, &mut ply).unwrap();
/// assert_eq!(written, buf.len());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Writer;

impl Writer {
    /// Creates a new `Writer`.
    pub fn new() -> Self {
        Writer
    }

    /// Writes `ply` to `out`, aligning schema counts with the model first.
    ///
    /// Returns the number of bytes written.
    pub fn write_ply<T: Write>(&self, out: &mut T, ply: &mut Ply) -> PlyResult<usize> {
        ply.make_consistent()?;
        self.write_ply_unchecked(out, ply)
    }

    /// Writes `ply` to `out` exactly as it stands.
    ///
    /// No consistency pass is made; the schema's counts are written as-is.
    /// Still fails with [`PlyError::Inconsistent`] when the model lacks an
    /// entry or value the schema declares, since there is nothing to emit for
    /// it. Returns the number of bytes written.
    pub fn write_ply_unchecked<T: Write>(&self, out: &mut T, ply: &Ply) -> PlyResult<usize> {
        let mut written = 0;
        written += self.write_header(out, &ply.schema, &ply.comments)?;
        written += self.write_model(out, &ply.schema, &ply.model)?;
        out.flush()?;
        Ok(written)
    }

    fn write_line<T: Write>(&self, out: &mut T, line: &str) -> PlyResult<usize> {
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
        Ok(line.len() + 1)
    }

    fn write_header<T: Write>(
        &self,
        out: &mut T,
        schema: &Schema,
        comments: &[Comment],
    ) -> PlyResult<usize> {
        let mut written = 0;
        written += self.write_line(out, "ply")?;
        written += self.write_line(out, "format ascii 1.0")?;
        written += self.write_line(out, &format!("comment {}", GENERATED_BY))?;
        for comment in comments {
            if comment == GENERATED_BY {
                continue;
            }
            written += self.write_line(out, &format!("comment {}", comment))?;
        }
        for (name, element_def) in schema {
            written += self.write_line(out, &format!("element {} {}", name, element_def.count))?;
            for (property_name, property_def) in &element_def.properties {
                let declaration = match &property_def.data_type {
                    PropertyType::Scalar(ty) => {
                        format!("property {} {}", ty, property_name)
                    }
                    PropertyType::List(count_ty, entry_ty) => {
                        format!("property list {} {} {}", count_ty, entry_ty, property_name)
                    }
                };
                written += self.write_line(out, &declaration)?;
            }
        }
        written += self.write_line(out, "end_header")?;
        Ok(written)
    }

    fn write_model<T: Write>(
        &self,
        out: &mut T,
        schema: &Schema,
        model: &Model,
    ) -> PlyResult<usize> {
        let mut written = 0;
        for (name, element_def) in schema {
            let instances = match model.get(name) {
                Some(instances) => instances,
                None => {
                    return Err(PlyError::Inconsistent(format!(
                        "Model has no entry for element '{}'.",
                        name
                    )));
                }
            };
            for instance in instances {
                written += self.write_instance(out, element_def, instance)?;
            }
        }
        Ok(written)
    }

    fn write_instance<T: Write>(
        &self,
        out: &mut T,
        element_def: &ElementDef,
        instance: &Instance,
    ) -> PlyResult<usize> {
        let mut fields = Vec::<String>::with_capacity(element_def.properties.len());
        for (property_name, property_def) in &element_def.properties {
            let value = match instance.get(property_name) {
                Some(value) => value,
                None => {
                    return Err(PlyError::Inconsistent(format!(
                        "Instance of element '{}' has no value for property '{}'.",
                        element_def.name, property_name
                    )));
                }
            };
            match (&property_def.data_type, value) {
                (PropertyType::Scalar(_), Value::Scalar(token)) => fields.push(token.clone()),
                (PropertyType::List(..), Value::List(entries)) => {
                    fields.push(entries.len().to_string());
                    fields.extend(entries.iter().cloned());
                }
                (PropertyType::Scalar(_), Value::List(_)) => {
                    return Err(PlyError::Inconsistent(format!(
                        "Property '{}' of element '{}' is declared scalar but holds a list.",
                        property_name, element_def.name
                    )));
                }
                (PropertyType::List(..), Value::Scalar(_)) => {
                    return Err(PlyError::Inconsistent(format!(
                        "Property '{}' of element '{}' is declared as a list but holds a scalar.",
                        property_name, element_def.name
                    )));
                }
            }
        }
        self.write_line(out, &fields.join(" "))
    }
}
