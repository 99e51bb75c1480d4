//! Ayu color theme and render helpers for twin CLI output.
//!
//! Palette: <https://github.com/ayu-theme/ayu-colors>. Colors are applied
//! only when [`supports_color`] says so; otherwise text passes through.

use owo_colors::OwoColorize;
use twin_core::category::Category;
use twin_core::profile::StepKind;

use crate::terminal::{supports_color, terminal_width};

// ---------------------------------------------------------------------------
// Ayu Dark palette
// ---------------------------------------------------------------------------

const PASS: (u8, u8, u8) = (0xc2, 0xd9, 0x4c); // #c2d94c green
const WARN: (u8, u8, u8) = (0xff, 0xb4, 0x54); // #ffb454 yellow
const FAIL: (u8, u8, u8) = (0xf0, 0x71, 0x78); // #f07178 red
const MUTED: (u8, u8, u8) = (0x6c, 0x76, 0x80); // #6c7680 gray
const ACCENT: (u8, u8, u8) = (0x59, 0xc2, 0xff); // #59c2ff blue
const PRICE: (u8, u8, u8) = (0xff, 0x8f, 0x40); // #ff8f40 orange

// ---------------------------------------------------------------------------
// Icons
// ---------------------------------------------------------------------------

pub const ICON_PASS: &str = "\u{2713}"; // ✓
pub const ICON_WARN: &str = "\u{26A0}"; // ⚠
pub const ICON_FAIL: &str = "\u{2716}"; // ✖

/// Marker for a selected option.
pub const ICON_SELECTED: &str = "\u{25CF}"; // ●
/// Marker for an option that is not selected.
pub const ICON_UNSELECTED: &str = "\u{25CB}"; // ○

pub const SEPARATOR_CHAR: char = '─';
pub const SEPARATOR_WIDTH: usize = 40;

fn color_str(s: &str, rgb: (u8, u8, u8)) -> String {
    if supports_color() {
        s.truecolor(rgb.0, rgb.1, rgb.2).to_string()
    } else {
        s.to_string()
    }
}

fn color_bold_str(s: &str, rgb: (u8, u8, u8)) -> String {
    if supports_color() {
        s.truecolor(rgb.0, rgb.1, rgb.2).bold().to_string()
    } else {
        s.to_string()
    }
}

pub fn render_pass(s: &str) -> String {
    color_str(s, PASS)
}

pub fn render_warn(s: &str) -> String {
    color_str(s, WARN)
}

pub fn render_fail(s: &str) -> String {
    color_str(s, FAIL)
}

pub fn render_muted(s: &str) -> String {
    color_str(s, MUTED)
}

pub fn render_accent(s: &str) -> String {
    color_str(s, ACCENT)
}

pub fn render_bold(s: &str) -> String {
    if supports_color() {
        s.bold().to_string()
    } else {
        s.to_string()
    }
}

/// Renders an already formatted price.
pub fn render_price(s: &str) -> String {
    color_bold_str(s, PRICE)
}

/// A light rule, at most [`SEPARATOR_WIDTH`] wide and never wider than the
/// terminal.
pub fn render_separator() -> String {
    let width = terminal_width().min(SEPARATOR_WIDTH);
    render_muted(&SEPARATOR_CHAR.to_string().repeat(width))
}

/// Category header: display name in uppercase, accent bold.
pub fn render_category(category: &Category) -> String {
    color_bold_str(&category.display_name().to_uppercase(), ACCENT)
}

/// Restaurant banner, e.g. `Twin Pizza · Grand-Couronne`.
pub fn render_banner(restaurant: &str, location: &str) -> String {
    format!(
        "{} {}",
        render_bold(restaurant),
        render_muted(&format!("· {location}"))
    )
}

/// Wizard step header: `[2/4] Sauce(s)`.
pub fn render_step_header(progress: &str, step: StepKind) -> String {
    format!("{} {}", render_muted(&format!("[{progress}]")), render_bold(step.title()))
}

/// One numbered option row with its selection marker.
pub fn render_option(index: usize, label: &str, selected: bool, extra: Option<&str>) -> String {
    let marker = if selected {
        color_str(ICON_SELECTED, PASS)
    } else {
        render_muted(ICON_UNSELECTED)
    };
    match extra {
        Some(extra) => format!("  {index:>2}. {marker} {label} {}", render_muted(extra)),
        None => format!("  {index:>2}. {marker} {label}"),
    }
}
