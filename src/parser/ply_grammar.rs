//! PEG grammar for parsing PLY headers and ascii data lines.
//!
//! The grammar classifies one header line at a time into a [`Line`]. Type
//! names in `property` declarations are matched as plain identifiers and kept
//! verbatim; the same goes for data-line tokens, which are any run of
//! non-whitespace characters. Nothing here knows the PLY scalar-type
//! vocabulary.

use crate::ply::{Comment, ElementDef, PropertyDef, PropertyType};

/// A single parsed header line.
///
/// This is used by the header parser to represent the different kinds of
/// statements that can occur in a PLY header. `Element` and `Property` carry
/// `None` when the line starts with the right keyword but the declaration
/// itself cannot be interpreted; the header parser turns those into errors.
#[derive(Debug, PartialEq, Clone)]
pub enum Line {
    /// The `ply` magic number line.
    MagicNumber,
    /// A `format ...` line; carries the raw arguments after the keyword.
    Format(String),
    /// A `comment ...` line.
    Comment(Comment),
    /// An `element <name> <count>` line.
    Element(Option<ElementDef>),
    /// A `property ...` line.
    Property(Option<PropertyDef>),
    /// The `end_header` terminator line.
    EndHeader,
    /// A blank line or one led by a keyword this crate does not interpret.
    Ignored,
}

peg::parser!{pub grammar grammar() for str {

/// Grammar for ascii PLY headers and data lines

rule space() = [' '|'\t']+

rule uint() -> Option<u64>
    = n:$(['0'..='9']+) {
        n.parse::<u64>().ok()
    }

rule ident() -> &'input str
	= s:$(['a'..='z'|'A'..='Z'|'_']['a'..='z'|'A'..='Z'|'0'..='9'|'_'|'-']*) { s }

rule text() -> &'input str
	= s:$((!['\n'|'\r'][_])+) { s }

rule line_break()
	= "\r\n" / ['\n'|'\r']

pub rule magic_number()
	= "ply"

pub rule format() -> String
	= "format" space() f:text() { f.trim_end().to_string() }
	/ "format" space()? { String::new() }

pub rule comment() -> Comment
	= "comment" space() c:text() {
		c.to_string()
	}
	/ "comment" space()? {
		String::new()
	}

pub rule element() -> Option<ElementDef>
    = "element" space() id:ident() space() n:uint() {{
        let mut e = ElementDef::new(id.to_owned());
        e.count = usize::try_from(n?).ok()?;
        Some(e)
    }}
    / "element" space() text()? { None }

pub rule property() -> Option<PropertyDef>
	= "property" space() "list" space() ct:ident() space() t:ident() space() id:ident() {
		Some(PropertyDef::new(id.to_owned(), PropertyType::List(ct.to_owned(), t.to_owned())))
	}
	/ "property" space() !("list" space()) t:ident() space() id:ident() {
		Some(PropertyDef::new(id.to_owned(), PropertyType::Scalar(t.to_owned())))
	}
	/ "property" space() text()? { None }

pub rule end_header()
	= "end_header"

pub rule line() -> Line
	= space()? l:trimmed_line() space()? line_break()? { l }

rule trimmed_line() -> Line
	= magic_number() { Line::MagicNumber }
	/ end_header() { Line::EndHeader }
	/ v:format() { Line::Format(v) }
	/ v:comment() { Line::Comment(v) }
	/ v:element() { Line::Element(v) }
	/ v:property() { Line::Property(v) }
	/ text()? { Line::Ignored }

rule token() -> &'input str
	= s:$((![' '|'\t'|'\n'|'\r'][_])+) { s }

rule trimmed_data_line() -> Vec<&'input str>
	= token() ** space()

pub rule data_line() -> Vec<&'input str>
	= space()? l:trimmed_data_line() space()? line_break()? { l }

}}
