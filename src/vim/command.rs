use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Next,
    Back,
    Submit,
    Skip,
    Signup,
    Close,
    Help,
    Quit,
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),
}

pub fn parse_command(input: &str) -> Result<Command, CommandError> {
    let input = input.trim().to_lowercase();
    let cmd = input.split_whitespace().next().unwrap_or("");

    match cmd {
        "next" | "n" => Ok(Command::Next),
        "back" | "b" | "prev" => Ok(Command::Back),
        "submit" | "send" => Ok(Command::Submit),
        "skip" | "s" => Ok(Command::Skip),
        "signup" | "account" => Ok(Command::Signup),
        "close" | "c" => Ok(Command::Close),
        "help" | "h" | "?" => Ok(Command::Help),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "" => Err(CommandError::Unknown("empty command".to_string())),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases_case_insensitively() {
        assert_eq!(parse_command("next").unwrap(), Command::Next);
        assert_eq!(parse_command(" B ").unwrap(), Command::Back);
        assert_eq!(parse_command("Submit").unwrap(), Command::Submit);
        assert_eq!(parse_command("signup now").unwrap(), Command::Signup);
        assert_eq!(parse_command("q").unwrap(), Command::Quit);
    }

    #[test]
    fn rejects_empty_and_unknown() {
        assert!(matches!(parse_command("   "), Err(CommandError::Unknown(_))));
        let err = parse_command("reboot").unwrap_err();
        assert_eq!(err.to_string(), "Unknown command: reboot");
    }
}
