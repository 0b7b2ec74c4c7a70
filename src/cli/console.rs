use colored::*;
use std::io::{self, BufRead, Write};

/// Warning sign shown in front of confirmation prompts
pub const EMOJI_WARN: &str = "⚠️";

/// Terminal bell control character
const BELL: &str = "\x07";

/// Console handles the interactive bits of terminal I/O
pub struct Console {
    code_color: Color,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    /// Create a new Console with default colors
    pub fn new() -> Self {
        Self {
            code_color: Color::BrightWhite,
        }
    }

    /// Create a new Console with a custom color for previewed code
    pub fn with_code_color(code_color: Color) -> Self {
        Self { code_color }
    }

    /// Print a code block preview with a header and language label
    pub fn print_preview(&self, code: &str, lang: &str) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        // Nothing sensible to do if stdout is gone.
        let _ = self.write_preview(&mut out, code, lang);
    }

    fn write_preview<W: Write>(&self, out: &mut W, code: &str, lang: &str) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", "Preview".white().bold())?;
        writeln!(out, "{}", format!("[{}]", lang).bright_black())?;
        writeln!(out, "{}", code.trim().color(self.code_color))?;
        writeln!(out)?;
        out.flush()
    }

    /// Ring the bell and ask a yes/no question on stdin
    pub fn ask_execute(&self, question: &str, default: bool) -> io::Result<bool> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.ask_execute_with(question, default, &mut stdin.lock(), &mut stdout.lock())
    }

    /// Ask a yes/no question, reading the answer from `input`
    ///
    /// Returns `default` on an empty answer or end of input.
    pub fn ask_execute_with<R: BufRead, W: Write>(
        &self,
        question: &str,
        default: bool,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<bool> {
        write!(output, "{}", BELL)?;
        let prompt = format!(" {} {} {} ", EMOJI_WARN, question, choice_hint(default));
        write!(output, "{} ", prompt.yellow().bold().on_red())?;
        output.flush()?;

        let mut answer = String::new();
        input.read_line(&mut answer)?;

        let confirmed = parse_confirmation(&answer, default);
        tracing::debug!(
            "[Console] {:?} answered {:?} -> {}",
            question,
            answer.trim(),
            confirmed
        );
        Ok(confirmed)
    }
}

/// `(Y/n)` when the default is yes, `(y/N)` otherwise
pub fn choice_hint(default: bool) -> &'static str {
    if default {
        "(Y/n)"
    } else {
        "(y/N)"
    }
}

/// Interpret a yes/no answer
///
/// `y`/`yes` confirm and `n`/`no` decline, ignoring case and surrounding
/// whitespace. An empty answer takes `default`; anything else declines.
pub fn parse_confirmation(answer: &str, default: bool) -> bool {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        "" => default,
        _ => false,
    }
}

/// Ring the terminal bell
pub fn print_bell() {
    let mut stdout = io::stdout();
    let _ = write!(stdout, "{}", BELL);
    let _ = stdout.flush();
}
