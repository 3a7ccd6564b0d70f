/// Address book module
///
/// Contains the contact model types and the in-memory store that holds
/// them for the lifetime of the process.

pub mod models;
pub mod store;

pub use models::{Name, Phone, Record};
pub use store::AddressBook;
