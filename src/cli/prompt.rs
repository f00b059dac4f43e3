use std::io::{self, BufRead, Write};

/// Source of interactive answers.
pub trait Prompter {
    /// Shows `prompt` and returns the trimmed answer; EOF yields "".
    fn ask(&mut self, prompt: &str) -> io::Result<String>;
}

pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        let stdin = io::stdin();
        read_answer(prompt, &mut io::stdout(), &mut stdin.lock())
    }
}

fn read_answer<W: Write, R: BufRead>(prompt: &str, out: &mut W, input: &mut R) -> io::Result<String> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_answer() {
        let mut out = Vec::new();
        let mut input = io::Cursor::new("  staging \nignored\n");
        let answer = read_answer("Name: ", &mut out, &mut input).unwrap();

        assert_eq!(answer, "staging");
        assert_eq!(String::from_utf8(out).unwrap(), "Name: ");
    }

    #[test]
    fn test_read_answer_eof() {
        let mut out = Vec::new();
        let mut input = io::Cursor::new("");
        assert_eq!(read_answer("Name: ", &mut out, &mut input).unwrap(), "");
    }
}
