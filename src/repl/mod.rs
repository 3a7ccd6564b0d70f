/// Command loop module
///
/// Contains input classification, the per-command handlers, and the
/// session that ties them to the console.

pub mod command;
pub mod handlers;
pub mod session;

pub use command::Command;
pub use session::{Outcome, Session};
