/// Contact model types
///
/// A Record ties one Name to the phones filed under it. These are plain
/// value types; all storage lives in the address book.

use serde::{Deserialize, Serialize};

/// A contact's name
///
/// Case is kept exactly as the user typed it. Lookups case-fold at the
/// address-book layer, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub value: String,
}

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Key form used by the address book
    pub fn key(&self) -> String {
        self.value.to_lowercase()
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A single phone number, optionally tagged with a label ("work", "home", ...)
///
/// The command surface never sets labels, but the model carries them so a
/// record can render "work: 555-0100" when one is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    pub value: String,
    pub label: Option<String>,
}

impl Phone {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: None,
        }
    }

    pub fn with_label(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: Some(label.into()),
        }
    }
}

impl std::fmt::Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{}: {}", label, self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

/// One contact: a name plus its phones in the order they were added
///
/// Duplicate phone values are allowed; `remove_phone` clears all of them,
/// `edit_phone` rewrites only the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: Name,
    phones: Vec<Phone>,
}

impl Record {
    /// Create an empty record for a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
        }
    }

    /// Create a record that already holds one phone
    pub fn with_phone(name: impl Into<String>, phone: impl Into<String>) -> Self {
        let mut record = Self::new(name);
        record.add_phone(phone);
        record
    }

    /// Append an unlabeled phone
    pub fn add_phone(&mut self, value: impl Into<String>) {
        self.phones.push(Phone::new(value));
    }

    /// Drop every phone whose value equals `value`
    pub fn remove_phone(&mut self, value: &str) {
        self.phones.retain(|p| p.value != value);
    }

    /// Rewrite the first phone whose value equals `old`. No-op if absent.
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) {
        if let Some(phone) = self.phones.iter_mut().find(|p| p.value == old) {
            phone.value = new.into();
        }
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// All phones rendered and joined with ", " for display
    pub fn phone_list(&self) -> String {
        self.phones
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_display() {
        assert_eq!(Phone::new("12345").to_string(), "12345");
        assert_eq!(Phone::with_label("555", "work").to_string(), "work: 555");
    }

    #[test]
    fn test_name_key_folds_case() {
        let name = Name::new("Alice");
        assert_eq!(name.to_string(), "Alice");
        assert_eq!(name.key(), "alice");
    }

    #[test]
    fn test_add_phone_keeps_order() {
        let mut record = Record::new("Alice");
        record.add_phone("111");
        record.add_phone("222");
        record.add_phone("111");

        let values: Vec<&str> = record.phones().iter().map(|p| p.value.as_str()).collect();
        assert_eq!(values, vec!["111", "222", "111"]);
    }

    #[test]
    fn test_remove_phone_drops_all_matches() {
        let mut record = Record::new("Alice");
        record.add_phone("111");
        record.add_phone("222");
        record.add_phone("111");

        record.remove_phone("111");

        let values: Vec<&str> = record.phones().iter().map(|p| p.value.as_str()).collect();
        assert_eq!(values, vec!["222"]);
    }

    #[test]
    fn test_edit_phone_first_match_only() {
        let mut record = Record::new("Alice");
        record.add_phone("111");
        record.add_phone("111");

        record.edit_phone("111", "999");

        let values: Vec<&str> = record.phones().iter().map(|p| p.value.as_str()).collect();
        assert_eq!(values, vec!["999", "111"]);
    }

    #[test]
    fn test_edit_phone_missing_is_noop() {
        let mut record = Record::with_phone("Alice", "111");
        record.edit_phone("404", "999");
        assert_eq!(record.phones()[0].value, "111");
    }

    #[test]
    fn test_phone_list_rendering() {
        let mut record = Record::with_phone("Alice", "111");
        record.add_phone("222");
        assert_eq!(record.phone_list(), "111, 222");

        let empty = Record::new("Bob");
        assert_eq!(empty.phone_list(), "");
    }
}
