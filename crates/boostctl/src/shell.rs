//! Line-oriented shell: one session, many commands.
//!
//! Each non-empty line is parsed with the same clap definition as argv.
//! Errors are printed and the shell keeps going; `exit` or EOF ends it.

use crate::cli::{Command, ShellLine};
use crate::commands;
use anyhow::Result;
use boost_common::BoostError;
use clap::Parser;
use owo_colors::OwoColorize;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::debug;

/// Split a line on whitespace, keeping double-quoted runs together
pub fn split_words(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut pending = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                pending = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if pending {
                    words.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            c => {
                current.push(c);
                pending = true;
            }
        }
    }
    if in_quotes {
        anyhow::bail!("Unterminated quote");
    }
    if pending {
        words.push(current);
    }
    Ok(words)
}

/// Render an error, with the stable code for domain errors
pub fn describe_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<BoostError>() {
        Some(boost) => format!("[E{}] {}", boost.code(), boost),
        None => format!("{:#}", err),
    }
}

pub fn run<B, W, R>(
    session: &mut boost_common::Session,
    input: B,
    output: &mut W,
    rng: &mut R,
) -> Result<()>
where
    B: BufRead,
    W: Write,
    R: Rng + ?Sized,
{
    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if trimmed == "exit" || trimmed == "quit" {
            break;
        }

        let words = match split_words(trimmed) {
            Ok(words) => words,
            Err(e) => {
                writeln!(output, "{} {}", "error:".red(), e)?;
                continue;
            }
        };

        let command = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                // clap renders help/usage itself
                writeln!(output, "{}", e.to_string().trim_end())?;
                continue;
            }
        };
        if command == Command::Shell {
            writeln!(output, "{} Already in the shell", "error:".red())?;
            continue;
        }

        debug!("shell: {:?}", command);
        match commands::execute(session, command, rng) {
            Ok(text) => writeln!(output, "{}", text)?,
            Err(e) => writeln!(output, "{} {}", "error:".red(), describe_error(&e))?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain() {
        assert_eq!(split_words("award 50 --source manual").unwrap(), vec!["award", "50", "--source", "manual"]);
    }

    #[test]
    fn test_split_quoted() {
        assert_eq!(
            split_words(r#"tasks --add "Write blog post"  --priority high"#).unwrap(),
            vec!["tasks", "--add", "Write blog post", "--priority", "high"]
        );
        assert_eq!(split_words(r#"coach """#).unwrap(), vec!["coach", ""]);
    }

    #[test]
    fn test_split_unterminated() {
        assert!(split_words(r#"coach "hello"#).is_err());
    }

    #[test]
    fn test_describe_domain_error() {
        let err = anyhow::Error::from(BoostError::NoPlaysLeft);
        assert!(describe_error(&err).starts_with("[E4001]"));
    }
}
