// One handler per user command. Each builds the reply text; errors are
// flattened to fixed messages by the session, so nothing here prints.

use crate::book::{AddressBook, Record};
use crate::error::{BookError, Result};

/// Split handler args into the (name, phone) pair
///
/// Exactly two whitespace-separated tokens, anything else is malformed.
fn split_name_and_phone(args: &str) -> Result<(&str, &str)> {
    let tokens: Vec<&str> = args.split_whitespace().collect();
    match tokens.as_slice() {
        [name, phone] => Ok((name, phone)),
        _ => Err(BookError::MalformedInput(tokens.len())),
    }
}

/// "add <name> <phone>" - create or overwrite a record with one phone
pub fn add_contact(book: &mut AddressBook, args: &str) -> Result<String> {
    let (name, phone) = split_name_and_phone(args)?;

    book.add_record(Record::with_phone(name, phone));

    Ok(format!("Contact {} added", name))
}

/// "change <name> <phone>" - rewrite the first phone on an existing record
pub fn change_contact(book: &mut AddressBook, args: &str) -> Result<String> {
    let (name, phone) = split_name_and_phone(args)?;

    // Look up, edit, re-store. Changing an unknown contact is an error,
    // unlike add.
    let mut record = book
        .get(name)
        .cloned()
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    match record.phones().first().map(|p| p.value.clone()) {
        Some(old) => record.edit_phone(&old, phone),
        // remove_phone can leave a record with no phones; append then.
        None => record.add_phone(phone),
    }

    book.edit_record(name, record);

    Ok(format!("Phone number for {} changed", name))
}

/// "phone <name>" - list everything filed under a name
pub fn get_phone(book: &AddressBook, args: &str) -> Result<String> {
    let name = args.trim();
    if name.is_empty() {
        return Err(BookError::MissingName);
    }

    let name = name.to_lowercase();
    let record = book
        .get(&name)
        .ok_or_else(|| BookError::ContactNotFound(name.clone()))?;

    Ok(format!(
        "Phone number(s) for {}: {}",
        name,
        record.phone_list()
    ))
}

/// "show all" - every record on its own line, or a shrug for an empty book
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts found".to_string();
    }

    let mut out = String::from("Contacts:");
    for record in book.records() {
        out.push('\n');
        out.push_str(&format!("{}: {}", record.name, record.phone_list()));
    }
    out
}
