//! Map and helper traits used throughout the crate.
//!
//! An ascii PLY document is inherently dynamic: elements, properties and the
//! decoded values are all declared by the header at run time. This module
//! provides the [`KeyMap`] alias (currently backed by [`indexmap::IndexMap`],
//! which preserves declaration order) and small helper traits used to keep map
//! keys consistent with the `name` attribute of the stored value.

use indexmap::IndexMap;
use super::ElementDef;
use super::PropertyDef;

/// Alias to reduce coupling with map implementation
pub type KeyMap<V> = IndexMap<String, V>;

/// Convenience trait to assure consistency between map key and name attribute of stored value.
pub trait Addable<V: Key> {
    /// Takes a value that provides a key and stores it under the given key.
    ///
    /// An existing entry with the same key is replaced.
    fn add(&mut self, new_value: V);

    /// Takes a value that provides a key and stores it under the given key,
    /// unless the key is already taken.
    ///
    /// On rejection the value is handed back so the caller can name it in an
    /// error. Header parsing uses this to refuse duplicate element and
    /// property declarations instead of silently aliasing them.
    fn add_unique(&mut self, new_value: V) -> Result<(), V>;
}

impl<V: Key> Addable<V> for KeyMap<V> {
    fn add(&mut self, value: V) {
        self.insert(value.get_key(), value);
    }

    fn add_unique(&mut self, value: V) -> Result<(), V> {
        if self.contains_key(&value.get_key()) {
            return Err(value);
        }
        self.insert(value.get_key(), value);
        Ok(())
    }
}

/// Convenience trait to assure consistency between the key used for storage and the name of the value.
pub trait Key {
    /// Returns a key under which the value should be stored in a key-value store.
    fn get_key(&self) -> String;
}

impl Key for ElementDef {
    fn get_key(&self) -> String {
        self.name.clone()
    }
}

impl Key for PropertyDef {
    fn get_key(&self) -> String {
        self.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ply::PropertyType;

    #[test]
    fn add_replaces_existing_key() {
        let mut map = KeyMap::<ElementDef>::new();
        let mut e = ElementDef::new("vertex".to_string());
        e.count = 3;
        map.add(e);
        let mut e = ElementDef::new("vertex".to_string());
        e.count = 8;
        map.add(e);
        assert_eq!(map.len(), 1);
        assert_eq!(map["vertex"].count, 8);
    }

    #[test]
    fn add_unique_rejects_existing_key() {
        let mut map = KeyMap::<PropertyDef>::new();
        let p = PropertyDef::new("x".to_string(), PropertyType::Scalar("float".to_string()));
        assert!(map.add_unique(p).is_ok());
        let p = PropertyDef::new("x".to_string(), PropertyType::Scalar("double".to_string()));
        let rejected = map.add_unique(p).unwrap_err();
        assert_eq!(rejected.name, "x");
        assert_eq!(map["x"].data_type, PropertyType::Scalar("float".to_string()));
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut map = KeyMap::<ElementDef>::new();
        for name in ["vertex", "face", "edge"] {
            map.add(ElementDef::new(name.to_string()));
        }
        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, ["vertex", "face", "edge"]);
    }
}
