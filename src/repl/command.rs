// Classifies one line of user input.
//
// Keywords are matched case-insensitively; the argument part of the line
// keeps whatever case the user typed so names display as entered.

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// "hello"
    Hello,
    /// "add <name> <phone>", args carried raw
    Add(String),
    /// "change <name> <phone>", args carried raw
    Change(String),
    /// "phone <name>", args carried raw
    Phone(String),
    /// "show all"
    ShowAll,
    /// "good bye" / "close" / "exit"
    Exit,
    /// Anything else, including an empty line
    Unknown,
}

impl Command {
    /// Parse a raw input line
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let lowered = trimmed.to_lowercase();

        // Whole-line keywords first, so "show all" never reads as a
        // contact named "all".
        match lowered.as_str() {
            "hello" => return Command::Hello,
            "show all" => return Command::ShowAll,
            "good bye" | "close" | "exit" => return Command::Exit,
            _ => {}
        }

        // Prefix commands dispatch on the first token; the rest of the
        // line is the handler's argument, original case intact.
        let mut tokens = trimmed.splitn(2, char::is_whitespace);
        let head = tokens.next().unwrap_or("").to_lowercase();
        let rest = tokens.next().unwrap_or("").trim().to_string();

        match head.as_str() {
            "add" => Command::Add(rest),
            "change" => Command::Change(rest),
            "phone" => Command::Phone(rest),
            _ => Command::Unknown,
        }
    }
}
