//! Interactive confirmations. Only the binary asks questions; the core never
//! blocks on the console.
use std::io::{self, BufRead, Write};

pub trait Confirm {
    /// Asks a yes/no question. An empty answer or EOF picks `default`.
    fn confirm(&mut self, question: &str, default: bool) -> io::Result<bool>;
}

/// Answers every question with yes (`--yes`).
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _question: &str, _default: bool) -> io::Result<bool> {
        Ok(true)
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for Console<R, W> {
    fn confirm(&mut self, question: &str, default: bool) -> io::Result<bool> {
        let hint = if default { "(Y/n)" } else { "(y/N)" };
        write!(self.output, "{question} {hint}: ")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            writeln!(self.output)?;
            return Ok(default);
        }

        Ok(parse_answer(&answer, default))
    }
}

/// Default-yes questions accept anything but "n"; default-no questions need
/// an explicit "y".
fn parse_answer(answer: &str, default: bool) -> bool {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    }
}
