// dialbook - keeps names and numbers so you don't have to
//
// This is the main entry point. Builds a session and hands it the console.

use dialbook_lib::repl::Session;
use dialbook_lib::Result;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let mut session = Session::new();
    session.run().await
}
