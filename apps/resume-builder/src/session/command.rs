use std::str::FromStr;

use crate::errors::CommandError;
use crate::models::SectionKey;
use crate::preview::PreviewFormat;

/// One line of the command loop. Positions are stored zero-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Status,
    Show(SectionKey),
    Preview(Option<PreviewFormat>),
    Add(SectionKey),
    Remove {
        section: SectionKey,
        index: usize,
    },
    Set {
        section: SectionKey,
        index: Option<usize>,
        field: String,
        value: String,
    },
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (verb, rest) = split_token(line).ok_or(CommandError::Empty)?;
        match verb.to_ascii_lowercase().as_str() {
            "help" | "?" => Ok(Command::Help),
            "status" => Ok(Command::Status),
            "quit" | "exit" => Ok(Command::Quit),
            "show" => Ok(Command::Show(section(rest)?.0)),
            "preview" => {
                let format = match split_token(rest) {
                    Some((format, _)) => Some(format.parse()?),
                    None => None,
                };
                Ok(Command::Preview(format))
            }
            "add" => Ok(Command::Add(section(rest)?.0)),
            "remove" | "rm" => {
                let (section, rest) = section(rest)?;
                let (index, _) = position(rest)?;
                Ok(Command::Remove { section, index })
            }
            "set" => {
                let (section, rest) = section(rest)?;
                let (index, rest) = if section.is_list() {
                    let (index, rest) = position(rest)?;
                    (Some(index), rest)
                } else {
                    (None, rest)
                };
                let (field, rest) =
                    split_token(rest).ok_or(CommandError::MissingArgument("field name"))?;
                Ok(Command::Set {
                    section,
                    index,
                    field: field.to_string(),
                    value: unescape(rest.trim_start()),
                })
            }
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

/// First whitespace-delimited token and the untrimmed remainder.
fn split_token(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    match input.find(char::is_whitespace) {
        Some(at) => Some((&input[..at], &input[at..])),
        None => Some((input, "")),
    }
}

fn section(input: &str) -> Result<(SectionKey, &str), CommandError> {
    let (name, rest) = split_token(input).ok_or(CommandError::MissingArgument("section"))?;
    Ok((name.parse()?, rest))
}

/// Parses a 1-based position into a zero-based index.
fn position(input: &str) -> Result<(usize, &str), CommandError> {
    let (token, rest) = split_token(input).ok_or(CommandError::MissingArgument("position"))?;
    match token.parse::<usize>() {
        Ok(n) if n >= 1 => Ok((n - 1, rest)),
        _ => Err(CommandError::InvalidPosition(token.to_string())),
    }
}

/// Turns the two-character sequence `\n` into a line break.
fn unescape(value: &str) -> String {
    value.replace("\\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        line.parse().unwrap()
    }

    #[test]
    fn test_simple_verbs() {
        assert_eq!(parse("help"), Command::Help);
        assert_eq!(parse("  STATUS  "), Command::Status);
        assert_eq!(parse("exit"), Command::Quit);
        assert_eq!(parse("show jobs"), Command::Show(SectionKey::Employment));
        assert_eq!(parse("add skills"), Command::Add(SectionKey::Skills));
    }

    #[test]
    fn test_preview_with_and_without_format() {
        assert_eq!(parse("preview"), Command::Preview(None));
        assert_eq!(
            parse("preview html"),
            Command::Preview(Some(PreviewFormat::Html))
        );
        assert!(matches!(
            "preview pdf".parse::<Command>(),
            Err(CommandError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_positions_are_one_based() {
        assert_eq!(
            parse("remove skills 2"),
            Command::Remove {
                section: SectionKey::Skills,
                index: 1
            }
        );
        assert!(matches!(
            "remove skills 0".parse::<Command>(),
            Err(CommandError::InvalidPosition(p)) if p == "0"
        ));
        assert!(matches!(
            "remove skills two".parse::<Command>(),
            Err(CommandError::InvalidPosition(_))
        ));
        assert!(matches!(
            "remove skills".parse::<Command>(),
            Err(CommandError::MissingArgument("position"))
        ));
    }

    #[test]
    fn test_set_list_field_keeps_value_spacing() {
        assert_eq!(
            parse("set employment 1 jobTitle  Staff  Engineer"),
            Command::Set {
                section: SectionKey::Employment,
                index: Some(0),
                field: "jobTitle".to_string(),
                value: "Staff  Engineer".to_string(),
            }
        );
    }

    #[test]
    fn test_set_personal_takes_no_position() {
        assert_eq!(
            parse("set personal city Boston"),
            Command::Set {
                section: SectionKey::PersonalDetails,
                index: None,
                field: "city".to_string(),
                value: "Boston".to_string(),
            }
        );
    }

    #[test]
    fn test_set_value_may_be_empty_and_unescapes_newlines() {
        let Command::Set { value, .. } = parse("set skills 6 name") else {
            panic!("expected set");
        };
        assert_eq!(value, "");

        let Command::Set { value, .. } = parse(r"set personal summary Line one\nLine two") else {
            panic!("expected set");
        };
        assert_eq!(value, "Line one\nLine two");
    }

    #[test]
    fn test_rejections() {
        assert!(matches!("".parse::<Command>(), Err(CommandError::Empty)));
        assert!(matches!(
            "frobnicate".parse::<Command>(),
            Err(CommandError::UnknownCommand(_))
        ));
        assert!(matches!(
            "add hobbies".parse::<Command>(),
            Err(CommandError::InvalidArgument(_))
        ));
        assert!(matches!(
            "set skills 1".parse::<Command>(),
            Err(CommandError::MissingArgument("field name"))
        ));
    }
}
