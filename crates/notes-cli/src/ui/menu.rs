//! Highlight-and-confirm selection menu.
//!
//! The menu keeps one piece of state, the highlighted index. Each round it
//! draws the options, reads one line, and applies it:
//!
//! | input               | effect                                  |
//! |---------------------|-----------------------------------------|
//! | empty line          | choose the highlighted option           |
//! | `w` / `k`           | move up, wrapping from first to last    |
//! | `s` / `j`           | move down, wrapping from last to first  |
//! | `1..=n`             | choose option `n` directly              |
//! | anything else       | redraw                                  |
//!
//! Input is trimmed and matched case-insensitively.

use super::console::Console;
use super::context::UiContext;
use super::render::divider;
use super::theme::{styled, styles, MENU_MARKER};

/// One parsed line of menu input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Confirm,
    Up,
    Down,
    /// Direct choice, already converted to a 0-based index.
    Jump(usize),
    Ignored,
}

impl MenuInput {
    /// Classify a raw input line for a menu with `option_count` options.
    pub fn parse(raw: &str, option_count: usize) -> Self {
        let input = raw.trim().to_lowercase();
        match input.as_str() {
            "" => Self::Confirm,
            "w" | "k" => Self::Up,
            "s" | "j" => Self::Down,
            other => match other.parse::<i64>() {
                Ok(n) if n >= 1 && (n as u64) <= option_count as u64 => Self::Jump(n as usize - 1),
                _ => Self::Ignored,
            },
        }
    }
}

/// A vertical list of options with one highlighted.
#[derive(Debug)]
pub struct Menu<'a> {
    title: &'a str,
    options: &'a [&'a str],
    index: usize,
}

impl<'a> Menu<'a> {
    /// Create a menu with the first option highlighted.
    pub fn new(title: &'a str, options: &'a [&'a str]) -> Self {
        Self {
            title,
            options,
            index: 0,
        }
    }

    /// Apply one input. Returns the chosen index once a choice is made.
    pub fn apply(&mut self, input: MenuInput) -> Option<usize> {
        let count = self.options.len();
        if count == 0 {
            return None;
        }
        match input {
            MenuInput::Confirm => return Some(self.index),
            MenuInput::Jump(index) if index < count => return Some(index),
            MenuInput::Up => {
                self.index = if self.index == 0 {
                    count - 1
                } else {
                    self.index - 1
                };
            }
            MenuInput::Down => {
                self.index = (self.index + 1) % count;
            }
            MenuInput::Jump(_) | MenuInput::Ignored => {}
        }
        None
    }

    /// Draw the menu with the highlighted option marked.
    pub fn render(&self, ctx: &UiContext) -> String {
        let mut lines = Vec::with_capacity(self.options.len() + 6);
        lines.push(divider(ctx));
        lines.push(styled(self.title, styles::bold(), ctx.color));
        lines.push(divider(ctx));
        lines.push("MENU: Select operation".to_string());
        lines.push(divider(ctx));

        for (i, option) in self.options.iter().enumerate() {
            let label = format!("{}. {}", i + 1, option);
            if i == self.index {
                let marker = MENU_MARKER.get(ctx.unicode);
                lines.push(styled(
                    &format!(" {} {}", marker, label),
                    styles::highlight(),
                    ctx.color,
                ));
            } else {
                lines.push(format!("   {}", label));
            }
        }

        lines.push(divider(ctx));
        lines.join("\n")
    }

    /// Keep drawing and reading until an option is chosen.
    ///
    /// Returns `None` only when input ends before a choice is made.
    pub fn run(&mut self, console: &mut Console<'_>) -> Option<usize> {
        let footer = format!(
            "\nUse w/k (up), s/j (down), Enter (choose) or type number (1-{}): ",
            self.options.len()
        );
        loop {
            console.clear();
            let screen = self.render(console.ctx());
            console.say(&screen);

            let line = console.ask_inline(&footer)?;
            if let Some(choice) = self.apply(MenuInput::parse(&line, self.options.len())) {
                return Some(choice);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::ScriptedInput;

    const OPTIONS: [&str; 4] = ["Show", "Add", "Delete", "Exit"];

    fn run_script(lines: &[&str]) -> (Option<usize>, String) {
        let ctx = UiContext::plain();
        let mut input = ScriptedInput::new(lines);
        let mut out = Vec::new();
        let choice = {
            let mut console = Console::new(&ctx, &mut input, &mut out);
            Menu::new("Notes", &OPTIONS).run(&mut console)
        };
        (choice, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!(MenuInput::parse("", 4), MenuInput::Confirm);
        assert_eq!(MenuInput::parse("   ", 4), MenuInput::Confirm);
        assert_eq!(MenuInput::parse("W", 4), MenuInput::Up);
        assert_eq!(MenuInput::parse("k", 4), MenuInput::Up);
        assert_eq!(MenuInput::parse("S", 4), MenuInput::Down);
        assert_eq!(MenuInput::parse("j", 4), MenuInput::Down);
        assert_eq!(MenuInput::parse("4", 4), MenuInput::Jump(3));
        assert_eq!(MenuInput::parse("1", 4), MenuInput::Jump(0));
    }

    #[test]
    fn test_parse_rejects_out_of_range_and_noise() {
        assert_eq!(MenuInput::parse("0", 4), MenuInput::Ignored);
        assert_eq!(MenuInput::parse("5", 4), MenuInput::Ignored);
        assert_eq!(MenuInput::parse("-1", 4), MenuInput::Ignored);
        assert_eq!(MenuInput::parse("ww", 4), MenuInput::Ignored);
        assert_eq!(MenuInput::parse("up", 4), MenuInput::Ignored);
    }

    #[test]
    fn test_down_down_confirm_selects_third() {
        let (choice, _) = run_script(&["s", "s", ""]);
        assert_eq!(choice, Some(2));
    }

    #[test]
    fn test_direct_number_from_any_state() {
        for start_moves in 0..4 {
            let mut menu = Menu::new("Notes", &OPTIONS);
            for _ in 0..start_moves {
                menu.apply(MenuInput::Down);
            }
            assert_eq!(menu.apply(MenuInput::parse("4", 4)), Some(3));
        }
    }

    #[test]
    fn test_up_wraps_to_last() {
        let mut menu = Menu::new("Notes", &OPTIONS);
        assert_eq!(menu.apply(MenuInput::Up), None);
        assert_eq!(menu.apply(MenuInput::Confirm), Some(3));
    }

    #[test]
    fn test_down_wraps_to_first() {
        let mut menu = Menu::new("Notes", &OPTIONS);
        for _ in 0..4 {
            menu.apply(MenuInput::Down);
        }
        assert_eq!(menu.apply(MenuInput::Confirm), Some(0));
    }

    #[test]
    fn test_ignored_input_redraws_without_moving() {
        let (choice, out) = run_script(&["x", "99", ""]);
        assert_eq!(choice, Some(0));
        assert_eq!(out.matches("MENU: Select operation").count(), 3);
    }

    #[test]
    fn test_end_of_input_returns_none() {
        let (choice, _) = run_script(&["s"]);
        assert_eq!(choice, None);
    }

    #[test]
    fn test_render_marks_highlighted_option() {
        let ctx = UiContext::plain();
        let mut menu = Menu::new("Notes", &OPTIONS);
        menu.apply(MenuInput::Down);
        let screen = menu.render(&ctx);
        assert!(screen.contains(" > 2. Add"));
        assert!(screen.contains("   1. Show"));
    }

    #[test]
    fn test_empty_menu_never_selects() {
        let mut menu = Menu::new("Empty", &[]);
        assert_eq!(menu.apply(MenuInput::Confirm), None);
        assert_eq!(menu.apply(MenuInput::Down), None);
    }
}
