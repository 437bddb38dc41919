use std::{fmt, str::FromStr};

use tile_tactics::common::components::SpellId;

/// One line of a skirmish script
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    Hover(i16, i16),
    Click(i16, i16),
    Place(i16, i16),
    Highlight,
    Clear,
    Spell(SpellId),
    Cancel,
    Begin,
    End,
    Show,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    Arity { command: &'static str, expected: usize },
    BadNumber(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "empty command"),
            CommandError::Unknown(word) => write!(f, "unknown command {word:?}"),
            CommandError::Arity { command, expected } => write!(f, "{command} takes {expected} argument(s)"),
            CommandError::BadNumber(word) => write!(f, "not a number: {word:?}"),
        }
    }
}

impl std::error::Error for CommandError {}

fn number<T: FromStr>(word: &str) -> Result<T, CommandError> {
    word.parse().map_err(|_| CommandError::BadNumber(word.to_owned()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else { return Err(CommandError::Empty) };
        let args: Vec<&str> = words.collect();
        let head = head.to_ascii_lowercase();

        let (command, expected): (&'static str, usize) = match head.as_str() {
            "hover" => ("hover", 2),
            "click" => ("click", 2),
            "place" => ("place", 2),
            "spell" => ("spell", 1),
            "highlight" => ("highlight", 0),
            "clear" => ("clear", 0),
            "cancel" => ("cancel", 0),
            "begin" => ("begin", 0),
            "end" => ("end", 0),
            "show" => ("show", 0),
            _ => return Err(CommandError::Unknown(head)),
        };
        if args.len() != expected { return Err(CommandError::Arity { command, expected }) }

        Ok(match command {
            "hover" => Command::Hover(number(args[0])?, number(args[1])?),
            "click" => Command::Click(number(args[0])?, number(args[1])?),
            "place" => Command::Place(number(args[0])?, number(args[1])?),
            "spell" => Command::Spell(number(args[0])?),
            "highlight" => Command::Highlight,
            "clear" => Command::Clear,
            "cancel" => Command::Cancel,
            "begin" => Command::Begin,
            "end" => Command::End,
            _ => Command::Show,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_coordinates() {
        assert_eq!("hover 3 4".parse(), Ok(Command::Hover(3, 4)));
        assert_eq!("click -1 0".parse(), Ok(Command::Click(-1, 0)));
        assert_eq!("  PLACE  2 7 ".parse(), Ok(Command::Place(2, 7)));
    }

    #[test]
    fn test_parse_bare_words() {
        assert_eq!("show".parse(), Ok(Command::Show));
        assert_eq!("begin".parse(), Ok(Command::Begin));
        assert_eq!("end".parse(), Ok(Command::End));
        assert_eq!("spell 12".parse(), Ok(Command::Spell(12)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!("jump".parse::<Command>(), Err(CommandError::Unknown("jump".to_owned())));
        assert_eq!("hover 1".parse::<Command>(), Err(CommandError::Arity { command: "hover", expected: 2 }));
        assert_eq!("show 1".parse::<Command>(), Err(CommandError::Arity { command: "show", expected: 0 }));
        assert_eq!("hover x 1".parse::<Command>(), Err(CommandError::BadNumber("x".to_owned())));
    }
}
