//! Line-based input sources.
//!
//! Every prompt in the tool reads one line. Screens read through the
//! `LineSource` trait so the whole menu flow can be driven by a script in
//! tests.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::console::Term;

/// A source of user input lines.
pub trait LineSource {
    /// Read one line with surrounding whitespace removed.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Read a line that should not be echoed.
    fn read_secret(&mut self) -> io::Result<Option<String>> {
        self.read_line()
    }
}

/// Lines from the process's standard input.
pub struct StdinLines {
    stdin: io::Stdin,
}

impl StdinLines {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl Default for StdinLines {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for StdinLines {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buffer = String::new();
        let read = self.stdin.lock().read_line(&mut buffer)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(buffer.trim().to_string()))
    }

    /// On a terminal the password is read without echo; piped input is read
    /// as a normal line.
    fn read_secret(&mut self) -> io::Result<Option<String>> {
        if !self.stdin.is_terminal() {
            return self.read_line();
        }
        let line = Term::stderr().read_secure_line()?;
        Ok(Some(line.trim().to_string()))
    }
}

/// Pre-recorded input lines, for driving screens in tests.
#[cfg(test)]
pub struct ScriptedInput {
    lines: std::collections::VecDeque<String>,
}

#[cfg(test)]
impl ScriptedInput {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// Lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
impl LineSource for ScriptedInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front().map(|l| l.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_trims_and_ends() {
        let mut input = ScriptedInput::new(&["  a  ", ""]);
        assert_eq!(input.read_line().unwrap().as_deref(), Some("a"));
        assert_eq!(input.read_secret().unwrap().as_deref(), Some(""));
        assert_eq!(input.read_line().unwrap(), None);
        assert_eq!(input.remaining(), 0);
    }
}
