//! Prompt/response plumbing shared by every screen.

use std::io::Write;

use log::warn;

use super::context::UiContext;
use super::render::prompt;
use crate::helpers::LineSource;

/// Clear screen and move the cursor home.
const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

/// Where screens write output and read answers.
///
/// Output errors (a closed stdout) are logged and otherwise ignored; read
/// errors and end of input both come back as `None`.
pub struct Console<'a> {
    ctx: &'a UiContext,
    input: &'a mut dyn LineSource,
    out: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    pub fn new(ctx: &'a UiContext, input: &'a mut dyn LineSource, out: &'a mut dyn Write) -> Self {
        Self { ctx, input, out }
    }

    pub fn ctx(&self) -> &UiContext {
        self.ctx
    }

    /// Print one line.
    pub fn say(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{}", text) {
            warn!("failed to write to output: {}", err);
        }
    }

    /// Print a prompt on its own line, then read the answer.
    pub fn ask(&mut self, question: &str) -> Option<String> {
        let line = prompt(self.ctx, question);
        self.say(&line);
        self.read()
    }

    /// Print a prompt without a line break, then read the answer.
    pub fn ask_inline(&mut self, question: &str) -> Option<String> {
        self.write_inline(question);
        self.read()
    }

    /// Like [`Console::ask_inline`], but the answer is not echoed on a TTY.
    pub fn ask_secret(&mut self, question: &str) -> Option<String> {
        self.write_inline(question);
        match self.input.read_secret() {
            Ok(line) => line,
            Err(err) => {
                warn!("failed to read secret: {}", err);
                None
            }
        }
    }

    /// Read one line of input.
    pub fn read(&mut self) -> Option<String> {
        match self.input.read_line() {
            Ok(line) => line,
            Err(err) => {
                warn!("failed to read input: {}", err);
                None
            }
        }
    }

    /// Wait for Enter. Returns `false` if input has ended.
    pub fn pause(&mut self) -> bool {
        self.ask("\nPress ENTER to continue...").is_some()
    }

    /// Clear the screen when attached to a terminal.
    pub fn clear(&mut self) {
        if self.ctx.is_tty {
            self.write_inline_raw(CLEAR_SCREEN);
        }
    }

    fn write_inline(&mut self, text: &str) {
        let styled = prompt(self.ctx, text);
        self.write_inline_raw(&styled);
    }

    fn write_inline_raw(&mut self, text: &str) {
        if let Err(err) = write!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            warn!("failed to write to output: {}", err);
        }
    }
}
