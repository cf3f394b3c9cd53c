//! Symbol tables: layers, linetypes, text styles, dimension styles and
//! block records.

mod block_record;
mod dimstyle;
mod layer;
mod linetype;
mod textstyle;

pub use block_record::BlockRecord;
pub use dimstyle::DimStyle;
pub use layer::Layer;
pub use linetype::{LineType, LineTypeElement};
pub use textstyle::TextStyle;

use indexmap::IndexMap;

use crate::types::Handle;

/// Common behavior of symbol table entries.
pub trait TableEntry {
    fn name(&self) -> &str;
    fn handle(&self) -> Handle;
    fn set_handle(&mut self, handle: Handle);
}

/// A symbol table keyed by entry name.
///
/// Lookup is case-insensitive, matching CAD behavior, and iteration follows
/// insertion order so serialized output is stable.
#[derive(Debug, Clone, Default)]
pub struct Table<T: TableEntry> {
    entries: IndexMap<String, T>,
}

impl<T: TableEntry> Table<T> {
    pub fn new() -> Self {
        Table {
            entries: IndexMap::new(),
        }
    }

    /// Add an entry. Fails if the name is already taken.
    pub fn add(&mut self, entry: T) -> Result<(), String> {
        let key = entry.name().to_uppercase();
        if self.entries.contains_key(&key) {
            return Err(format!("duplicate table entry: {}", entry.name()));
        }
        self.entries.insert(key, entry);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(&name.to_uppercase())
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        self.entries.get_mut(&name.to_uppercase())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_uppercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.entries.values_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_case_insensitive() {
        let mut table = Table::new();
        table.add(Layer::new("Sondagens")).unwrap();
        assert!(table.contains("SONDAGENS"));
        assert!(table.contains("sondagens"));
        assert!(table.get("soNDAgens").is_some());
    }

    #[test]
    fn test_table_rejects_duplicates() {
        let mut table = Table::new();
        table.add(Layer::new("SPT")).unwrap();
        assert!(table.add(Layer::new("spt")).is_err());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_table_insertion_order() {
        let mut table = Table::new();
        table.add(Layer::new("B")).unwrap();
        table.add(Layer::new("A")).unwrap();
        let names: Vec<&str> = table.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }
}
