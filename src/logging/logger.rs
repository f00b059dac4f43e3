use colored::Colorize;
use std::io::{self, Stdout, Write};

/// Colorized line logger over any writer.
///
/// Write failures on the console are ignored, the same way `println!`
/// output is never checked.
pub struct Console<W: Write> {
    out: W,
}

impl Console<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn section(&mut self, title: &str) {
        let _ = writeln!(self.out, "\n{}", "━".repeat(50).bright_black());
        let _ = writeln!(self.out, "{}", title.bright_blue().bold());
        let _ = writeln!(self.out, "{}", "━".repeat(50).bright_black());
    }

    pub fn success(&mut self, message: &str) {
        let _ = writeln!(self.out, "{} {}", "✓".green(), message);
    }

    pub fn info(&mut self, message: &str) {
        let _ = writeln!(self.out, "{} {}", "ℹ".blue(), message);
    }

    pub fn warning(&mut self, message: &str) {
        let _ = writeln!(self.out, "{} {}", "⚠".yellow(), message);
    }

    pub fn error(&mut self, message: &str) {
        let _ = writeln!(self.out, "{} {}", "✗".red(), message.red());
    }

    /// Unprefixed line, used for indented instruction text.
    pub fn plain(&mut self, message: &str) {
        let _ = writeln!(self.out, "{}", message);
    }

    pub fn command(&mut self, command: &str) {
        let _ = writeln!(self.out, "    {}", command.cyan());
    }

    pub fn flush(&mut self) {
        let _ = self.out.flush();
    }
}
