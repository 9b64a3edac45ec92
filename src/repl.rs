use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::{error::Error, interpreter::evaluator::core::Environment, run_source};

/// Typing this line ends the session.
pub const EXIT_COMMAND: &str = "exit()";

const BANNER: &str = "ratmat: exact linear algebra. Type exit() to quit.";
const PROMPT: &str = ">> ";
const CONTINUATION_PROMPT: &str = ".. ";

/// Runs an interactive session until `exit()` or end of input.
///
/// Each line is parsed and executed against `env`. When the line produced a
/// value, the value of its last such statement is printed, so `1; 2` prints
/// `2`. An error is printed and the loop carries on with the bindings made
/// so far. Input that ends in the middle of a construct, such as an open `{`
/// block or an unfinished matrix literal, is kept and the next line is
/// appended to it.
///
/// With `quiet` set the banner and prompts are not written, which suits
/// piped input.
///
/// # Errors
/// Only I/O errors on `input` or `output` end the loop early.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use ratmat::{interpreter::evaluator::core::Environment, repl::run_repl};
///
/// let mut env = Environment::new();
/// let mut out = Vec::new();
/// run_repl(Cursor::new("x = 1/3\nx + x\nexit()\n"), &mut out, &mut env, true).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "2/3\n");
/// ```
pub fn run_repl<R, W>(input: R, mut output: W, env: &mut Environment, quiet: bool) -> io::Result<()>
    where R: BufRead,
          W: Write
{
    if !quiet {
        writeln!(output, "{BANNER}")?;
    }

    let mut pending = String::new();
    let mut lines = input.lines();

    loop {
        if !quiet {
            let prompt = if pending.is_empty() { PROMPT } else { CONTINUATION_PROMPT };
            write!(output, "{prompt}")?;
            output.flush()?;
        }

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        if pending.is_empty() && line.trim() == EXIT_COMMAND {
            break;
        }

        pending.push_str(&line);
        pending.push('\n');

        match run_source(&pending, env) {
            Ok(Some(value)) => {
                debug!(kind = %value.kind(), "result");
                writeln!(output, "{value}")?;
            },
            Ok(None) => {},
            Err(Error::Parse(e)) if e.is_incomplete() => {
                debug!(%e, "waiting for more input");
                continue;
            },
            Err(e) => writeln!(output, "{e}")?,
        }
        pending.clear();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::interpreter::value::core::Value;

    fn session(input: &str) -> (String, Environment) {
        let mut env = Environment::new();
        let mut out = Vec::new();
        run_repl(Cursor::new(input), &mut out, &mut env, true).unwrap();
        (String::from_utf8(out).unwrap(), env)
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let (out, env) = session("a = 2\nb = a / 0\nc = 3\na + c\n");
        assert_eq!(out, "Error on line 1: Division by zero.\n5\n");
        assert!(!env.contains("b"));
    }

    #[test]
    fn only_the_last_value_of_a_line_is_printed() {
        let (out, _) = session("1; 2\nx = 3; x * x\ny = 4\n");
        assert_eq!(out, "2\n9\n");
    }

    #[test]
    fn exit_stops_reading() {
        let (out, env) = session("1\nexit()\n2\n");
        assert_eq!(out, "1\n");
        assert!(env.is_empty());
    }

    #[test]
    fn unfinished_input_is_continued() {
        let (out, env) = session("A = [[1, 2],\n     [3, 4]]\n{\n  d = det(A)\n  d\n}\n");
        assert_eq!(out, "-2\n");
        assert_eq!(env.get("d"), Some(&Value::from(-2)));
    }

    #[test]
    fn prompts_are_written_unless_quiet() {
        let mut env = Environment::new();
        let mut out = Vec::new();
        run_repl(Cursor::new("1\n"), &mut out, &mut env, false).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(BANNER));
        assert!(text.contains(">> 1\n"));
    }
}
