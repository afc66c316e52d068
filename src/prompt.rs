//! Interactive yes/no confirmation

use std::io::{self, BufRead, Write};

/// Asks the user a yes/no question
pub trait Confirm {
    /// Show `question` and return whether the answer was affirmative
    fn confirm(&mut self, question: &str) -> io::Result<bool>;
}

/// Prompt on stdout, answer on stdin
///
/// Blocks until a line is entered; there is no timeout.
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl Confirm for StdinPrompt {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        ask(question, &mut io::stdin().lock(), &mut io::stdout())
    }
}

/// Write `question`, read one line and interpret it
fn ask<R: BufRead, W: Write>(question: &str, input: &mut R, output: &mut W) -> io::Result<bool> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

/// `y` or `yes`, any case, surrounding whitespace ignored
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
