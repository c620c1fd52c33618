//! Interactive yes/no confirmation.

use std::io::{self, BufRead, Write};

/// Asks an operator a yes/no question on the standard streams.
///
/// Prints `message` followed by a `[y/N]` default hint, then blocks for one
/// line of input. Returns `true` only for a case-insensitive `y` or `yes`.
pub fn confirm(message: &str) -> io::Result<bool> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    confirm_with(message, &mut stdin.lock(), &mut stdout.lock())
}

/// [`confirm`] against explicit streams, for embedding and tests.
///
/// # Examples
///
/// ```
/// use command_kit_core::confirm_with;
///
/// let mut output = Vec::new();
/// let answered = confirm_with("Proceed?", &mut "YES\n".as_bytes(), &mut output).unwrap();
/// assert!(answered);
/// assert_eq!(String::from_utf8(output).unwrap(), "Proceed? [y/N] ");
/// ```
pub fn confirm_with<R, W>(message: &str, input: &mut R, output: &mut W) -> io::Result<bool>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write!(output, "{message} [y/N] ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(line: &str) -> bool {
        confirm_with("Sure?", &mut line.as_bytes(), &mut Vec::new()).unwrap()
    }

    #[test]
    fn test_confirm_accepts_y_and_yes_any_case() {
        assert!(answer("y\n"));
        assert!(answer("Y\n"));
        assert!(answer("yes\n"));
        assert!(answer("YeS\n"));
    }

    #[test]
    fn test_confirm_rejects_everything_else() {
        assert!(!answer("n\n"));
        assert!(!answer("\n"));
        assert!(!answer("yep\n"));
        assert!(!answer(""));
    }
}
