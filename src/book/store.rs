/// In-memory address book
///
/// Owns the one map from contact name to record. Keys are the lowercased
/// name, so lookups are case-insensitive while records keep the name as
/// typed. BTreeMap keeps listings in a stable order.

use crate::book::models::Record;
use crate::error::{BookError, Result};
use std::collections::BTreeMap;

/// The contact store
///
/// Invariant: every key equals its record's name lowercased.
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    /// Create an empty book
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any existing one under the same name
    pub fn add_record(&mut self, record: Record) {
        self.records.insert(record.name.key(), record);
    }

    /// Remove and return the record stored under `name`
    ///
    /// # Returns
    /// * `Ok(Record)` - The removed record
    /// * `Err(BookError::ContactNotFound)` - If nothing is stored under that name
    pub fn remove_record(&mut self, name: &str) -> Result<Record> {
        self.records
            .remove(&name.to_lowercase())
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// Overwrite the entry under `name` with `record`
    ///
    /// Callers pass the record's own name; for this model the operation is
    /// the same insert-or-replace as `add_record`, keyed explicitly.
    pub fn edit_record(&mut self, name: &str, record: Record) {
        self.records.insert(name.to_lowercase(), record);
    }

    /// Case-insensitive lookup
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in key order (lowercased name, lexicographic)
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::models::Record;

    fn book_with(entries: &[(&str, &str)]) -> AddressBook {
        let mut book = AddressBook::new();
        for (name, phone) in entries {
            book.add_record(Record::with_phone(*name, *phone));
        }
        book
    }

    #[test]
    fn test_add_and_get_case_insensitive() {
        let book = book_with(&[("Carol", "555")]);

        let record = book.get("CAROL").unwrap();
        assert_eq!(record.name.to_string(), "Carol");
        assert_eq!(record.phone_list(), "555");
    }

    #[test]
    fn test_add_record_overwrites() {
        let mut book = book_with(&[("Alice", "111")]);
        book.add_record(Record::with_phone("alice", "222"));

        assert_eq!(book.len(), 1);
        assert_eq!(book.get("Alice").unwrap().phone_list(), "222");
    }

    #[test]
    fn test_remove_record() {
        let mut book = book_with(&[("Alice", "111")]);

        let removed = book.remove_record("ALICE").unwrap();
        assert_eq!(removed.name.to_string(), "Alice");
        assert!(book.is_empty());
    }

    #[test]
    fn test_remove_record_missing() {
        let mut book = AddressBook::new();

        let result = book.remove_record("nobody");
        match result {
            Err(BookError::ContactNotFound(name)) => assert_eq!(name, "nobody"),
            _ => panic!("Expected ContactNotFound error"),
        }
    }

    #[test]
    fn test_edit_record_replaces_entry() {
        let mut book = book_with(&[("Alice", "111")]);

        let mut record = book.get("Alice").cloned().unwrap();
        record.edit_phone("111", "999");
        book.edit_record("Alice", record);

        assert_eq!(book.len(), 1);
        assert_eq!(book.get("alice").unwrap().phone_list(), "999");
    }

    #[test]
    fn test_records_iterate_in_key_order() {
        let book = book_with(&[("bob", "2"), ("Alice", "1"), ("carol", "3")]);

        let names: Vec<String> = book.records().map(|r| r.name.to_string()).collect();
        assert_eq!(names, vec!["Alice", "bob", "carol"]);
    }

    #[test]
    fn test_key_matches_lowercased_name() {
        // The invariant the whole store leans on.
        let book = book_with(&[("MiXeD", "7")]);
        assert!(book.get("mixed").is_some());
        assert!(book.get("MIXED").is_some());
    }
}
