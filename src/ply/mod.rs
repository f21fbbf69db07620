//! Data structures representing an ascii PLY document.
//!
//! [`Ply`] aggregates the three parts of a document: the [`Schema`] declared
//! in the header, the header comments, and the decoded [`Model`]. The
//! submodules provide the declaration types ([`ElementDef`], [`PropertyDef`]),
//! the decoded value types ([`Value`], [`Instance`]) and the ordered
//! [`KeyMap`] everything is stored in.

mod key_map;
mod model;
mod ply_data_structure;

pub use self::key_map::{Addable, Key, KeyMap};
pub use self::model::{Instance, Model, Value};
pub use self::ply_data_structure::{
    Comment, ElementDef, Ply, PropertyDef, PropertyType, Schema, TypeName,
};
