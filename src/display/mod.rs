//! Terminal display module
//!
//! Prints rendered markdown with termimad when stdout is a color-capable
//! terminal, and as plain text otherwise.

use std::env;
use std::io::IsTerminal;
use termimad::crossterm::style::{Attribute, Color};
use termimad::MadSkin;

const ACCENT: Color = Color::Rgb {
    r: 0x7c,
    g: 0x3a,
    b: 0xed,
};

/// Whether output should be styled.
///
/// `NO_COLOR` wins over everything, then `CLICOLOR_FORCE`, then
/// `CLICOLOR=0`, then TTY detection.
pub fn should_use_colors() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    match env::var("CLICOLOR_FORCE") {
        Ok(val) if val != "0" => return true,
        _ => {}
    }
    if env::var("CLICOLOR").is_ok_and(|val| val == "0") {
        return false;
    }
    std::io::stdout().is_terminal()
}

fn skin() -> MadSkin {
    let mut skin = MadSkin::default();
    skin.headers[0].set_fg(ACCENT);
    skin.headers[0].add_attr(Attribute::Bold);
    skin.bold.set_fg(Color::Green);
    skin.italic.set_fg(Color::Yellow);
    skin.table.set_fg(ACCENT);
    skin.inline_code.set_fg(Color::Cyan);
    skin
}

/// Print markdown to the terminal, styled when colors are enabled
pub fn print_markdown(markdown: &str) {
    if should_use_colors() {
        skin().print_text(markdown);
    } else {
        println!("{}", markdown);
    }
}
