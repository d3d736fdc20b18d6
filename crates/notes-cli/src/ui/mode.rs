//! Output mode routing logic.

/// Output mode determines how screens are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Plain text, stable for pipes, logs, and tests
    #[default]
    Plain,
    /// Human-friendly with boxes, tables, and colors (TTY only)
    Pretty,
}

impl OutputMode {
    /// Resolve output mode from the environment.
    ///
    /// Routing rules:
    /// 1. `TERM=dumb` forces plain
    /// 2. Pretty only when stdout is TTY
    /// 3. Default to plain for non-TTY
    pub fn resolve(is_tty: bool, term_is_dumb: bool) -> Self {
        if term_is_dumb {
            return Self::Plain;
        }

        if is_tty {
            Self::Pretty
        } else {
            Self::Plain
        }
    }

    /// Check if this mode should output pretty (human) format.
    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_dumb_forces_plain() {
        let mode = OutputMode::resolve(true, true);
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_tty_gets_pretty() {
        let mode = OutputMode::resolve(true, false);
        assert_eq!(mode, OutputMode::Pretty);
    }

    #[test]
    fn test_non_tty_gets_plain() {
        let mode = OutputMode::resolve(false, false);
        assert_eq!(mode, OutputMode::Plain);
    }
}
