//! Interactive Prompting
//!
//! Numbered menus and free-text input with defaults. Everything here is
//! generic over the input/output streams so the same code path runs against
//! stdin/stdout in production and `Cursor`s in tests.

use std::io::{BufRead, Write};

use crate::errors::{PromptError, Result};

/// A numbered single-selection menu.
///
/// The choices are displayed in order, numbered from 1. Immutable once
/// constructed; build a fresh one per invocation.
#[derive(Debug, Clone)]
pub struct MenuSpec {
    pub prompt: String,
    pub choices: Vec<String>,
}

impl MenuSpec {
    /// Creates a menu from anything yielding string-likes.
    pub fn new(prompt: impl Into<String>, choices: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            prompt: prompt.into(),
            choices: choices.into_iter().map(Into::into).collect(),
        }
    }
}

/// A free-text input request with a fallback default.
#[derive(Debug, Clone)]
pub struct InputSpec {
    pub prompt_lines: Vec<String>,
    pub default: String,
}

impl InputSpec {
    pub fn new(
        prompt_lines: impl IntoIterator<Item = impl Into<String>>,
        default: impl Into<String>,
    ) -> Self {
        Self {
            prompt_lines: prompt_lines.into_iter().map(Into::into).collect(),
            default: default.into(),
        }
    }
}

/// Presents a numbered menu and returns the selected choice.
///
/// A selection is either an index in `[1, N]` or the literal text of a
/// choice (case-sensitive). Invalid input is rejected with a notice and the
/// menu is shown again; this loops until a valid selection is read. The
/// returned value is always one of `spec.choices`.
///
/// # Errors
/// * `PromptError::EmptyChoices` if the menu has no choices
/// * `PromptError::EndOfInput` if the input stream closes before a valid
///   selection is read
/// * If writing to the output stream fails
pub fn show_menu<R: BufRead, W: Write>(
    spec: &MenuSpec,
    input: &mut R,
    output: &mut W,
) -> Result<String> {
    if spec.choices.is_empty() {
        return Err(PromptError::EmptyChoices.into());
    }

    loop {
        writeln!(output, "{}", spec.prompt).map_err(PromptError::from)?;
        for (index, choice) in spec.choices.iter().enumerate() {
            writeln!(output, "  {}) {choice}", index + 1).map_err(PromptError::from)?;
        }
        write!(output, "> ").map_err(PromptError::from)?;
        output.flush().map_err(PromptError::from)?;

        let line = read_raw_line(input)?;
        let line = line.trim();

        if let Some(choice) = match_selection(line, &spec.choices) {
            return Ok(choice.to_owned());
        }

        writeln!(output, "Invalid selection: '{line}'").map_err(PromptError::from)?;
    }
}

/// Displays the prompt lines and reads one line of free text.
///
/// An empty line (the operator just pressed enter) yields the default;
/// anything else is returned trimmed of surrounding whitespace, otherwise
/// verbatim.
///
/// # Errors
/// * `PromptError::EndOfInput` if the input stream is already closed
/// * If writing to the output stream fails
pub fn read_line<R: BufRead, W: Write>(
    spec: &InputSpec,
    input: &mut R,
    output: &mut W,
) -> Result<String> {
    for line in &spec.prompt_lines {
        writeln!(output, "{line}").map_err(PromptError::from)?;
    }
    output.flush().map_err(PromptError::from)?;

    let line = read_raw_line(input)?;
    let trimmed = line.trim();

    if trimmed.is_empty() {
        Ok(spec.default.clone())
    } else {
        Ok(trimmed.to_owned())
    }
}

/// One read attempt against the choice list: a 1-based index or the literal
/// choice text. Returns `None` for anything that matches neither.
fn match_selection<'a>(line: &str, choices: &'a [String]) -> Option<&'a str> {
    if let Ok(index) = line.parse::<usize>() {
        if (1..=choices.len()).contains(&index) {
            return Some(&choices[index - 1]);
        }
        return None;
    }

    choices
        .iter()
        .find(|choice| choice.as_str() == line)
        .map(String::as_str)
}

/// Reads one line, surfacing a closed stream as `EndOfInput`.
fn read_raw_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    let bytes_read = input.read_line(&mut line).map_err(PromptError::from)?;

    if bytes_read == 0 {
        return Err(PromptError::EndOfInput.into());
    }

    Ok(line)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::errors::PushyError;

    fn menu(choices: &[&str]) -> MenuSpec {
        MenuSpec::new("pick one", choices.iter().copied())
    }

    fn run_menu(spec: &MenuSpec, stdin: &str) -> (Result<String>, String) {
        let mut input = Cursor::new(stdin.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = show_menu(spec, &mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn menu_returns_choice_by_index() {
        let spec = menu(&["alpha", "beta", "gamma"]);
        let (result, rendered) = run_menu(&spec, "2\n");

        assert_eq!(result.unwrap(), "beta");
        assert!(rendered.contains("pick one"));
        assert!(rendered.contains("  1) alpha"));
        assert!(rendered.contains("  3) gamma"));
    }

    #[test]
    fn menu_accepts_literal_choice_text() {
        let spec = menu(&["UPDATE", "FIX"]);
        let (result, _) = run_menu(&spec, "FIX\n");

        assert_eq!(result.unwrap(), "FIX");
    }

    #[test]
    fn menu_literal_matching_is_case_sensitive() {
        let spec = menu(&["UPDATE", "FIX"]);
        let (result, rendered) = run_menu(&spec, "fix\n1\n");

        assert_eq!(result.unwrap(), "UPDATE");
        assert!(rendered.contains("Invalid selection: 'fix'"));
    }

    #[test]
    fn menu_reprompts_on_out_of_range_and_garbage() {
        let spec = menu(&["alpha", "beta"]);
        let (result, rendered) = run_menu(&spec, "0\n7\nnope\n1\n");

        assert_eq!(result.unwrap(), "alpha");
        assert!(rendered.contains("Invalid selection: '0'"));
        assert!(rendered.contains("Invalid selection: '7'"));
        assert!(rendered.contains("Invalid selection: 'nope'"));
    }

    #[test]
    fn menu_with_no_choices_is_a_configuration_error() {
        let spec = menu(&[]);
        let (result, rendered) = run_menu(&spec, "1\n");

        assert!(matches!(
            result,
            Err(PushyError::Prompt(PromptError::EmptyChoices))
        ));
        // Nothing should have been rendered for a degenerate menu.
        assert!(rendered.is_empty());
    }

    #[test]
    fn menu_surfaces_closed_input_stream() {
        let spec = menu(&["alpha"]);
        let (result, _) = run_menu(&spec, "");

        assert!(matches!(
            result,
            Err(PushyError::Prompt(PromptError::EndOfInput))
        ));
    }

    #[test]
    fn read_line_returns_default_on_empty_input() {
        let spec = InputSpec::new(["Enter your commit msg:"], "additional work");
        let mut input = Cursor::new(b"\n".to_vec());
        let mut output = Vec::new();

        let result = read_line(&spec, &mut input, &mut output).unwrap();

        assert_eq!(result, "additional work");
        assert!(String::from_utf8(output).unwrap().contains("Enter your commit msg:"));
    }

    #[test]
    fn read_line_trims_surrounding_whitespace() {
        let spec = InputSpec::new(["msg:"], "fallback");
        let mut input = Cursor::new(b"  typo cleanup  \n".to_vec());
        let mut output = Vec::new();

        let result = read_line(&spec, &mut input, &mut output).unwrap();

        assert_eq!(result, "typo cleanup");
    }

    #[test]
    fn read_line_whitespace_only_counts_as_empty() {
        let spec = InputSpec::new(["msg:"], "fallback");
        let mut input = Cursor::new(b"   \n".to_vec());
        let mut output = Vec::new();

        let result = read_line(&spec, &mut input, &mut output).unwrap();

        assert_eq!(result, "fallback");
    }

    #[test]
    fn read_line_surfaces_closed_input_stream() {
        let spec = InputSpec::new(["msg:"], "fallback");
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();

        assert!(matches!(
            read_line(&spec, &mut input, &mut output),
            Err(PushyError::Prompt(PromptError::EndOfInput))
        ));
    }
}
