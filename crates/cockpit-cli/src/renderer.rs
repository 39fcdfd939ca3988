//! Terminal rendering of markdown output.
//!
//! Rich mode goes through termimad so tables and code blocks are laid out for
//! the terminal width; plain mode prints the markdown untouched.

use anyhow::Result;
use serde::Serialize;
use termimad::{MadSkin, crossterm::style::Color};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.code_block.set_bg(Color::AnsiValue(238));
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            print!("{}", self.skin.term_text(markdown));
        } else {
            print!("{markdown}");
        }
        Ok(())
    }

    /// Print a value as pretty JSON, never styled
    pub fn json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
