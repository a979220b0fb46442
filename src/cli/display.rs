// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the damlev CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `DAMLEV_THEME` first, then `COLORFGBG`, then defaults to dark. Respects
//! `NO_COLOR` and falls back to plain text when stdout isn't a TTY, so piped
//! output stays grep-able.

use std::ops::Range;
use std::sync::OnceLock;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 60;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("DAMLEV_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; bg 7+ (except 8) is a light background
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const UNDERLINE: &str = "\x1b[4m";
}

pub use colors::*;

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);   // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);   // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);    // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);     // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);   // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);  // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);    // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);  // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Terminal columns a code point occupies.
///
/// Combining marks take none; East Asian wide/fullwidth blocks and the
/// pictographic emoji planes take two. Everything else takes one.
fn char_width(c: char) -> usize {
    match c as u32 {
        0x0300..=0x036F | 0x200B..=0x200F | 0xFE00..=0xFE0F => 0,
        0x1100..=0x115F
        | 0x2E80..=0x303E
        | 0x3041..=0x33FF
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xA000..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6
        | 0x1F300..=0x1F64F
        | 0x1F900..=0x1F9FF
        | 0x20000..=0x3FFFD => 2,
        _ => 1,
    }
}

/// Visible width in terminal columns, excluding ANSI escapes
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += char_width(c);
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = GRAY();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    if use_colors() {
        println!("{}│{}{}{}{}│{}", border, RESET, content, " ".repeat(pad), border, RESET);
    } else {
        println!("│{}{}│", content, " ".repeat(pad));
    }
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    if use_colors() {
        let border = GRAY();
        println!("{}┌{}{}{}{}┐{}", border, RESET, label_part, border, "─".repeat(remaining), RESET);
    } else {
        println!("┌{}{}┐", label_part, "─".repeat(remaining));
    }
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    if use_colors() {
        println!("{}└{}┘{}", GRAY(), "─".repeat(BOX_WIDTH), RESET);
    } else {
        println!("└{}┘", "─".repeat(BOX_WIDTH));
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded distance (green=exact, yellow=close, red=far)
///
/// "Close" is relative to `scale`, usually the pattern length.
pub fn distance_value(value: f64, scale: usize) -> String {
    let text = format!("{}", value);
    if !use_colors() {
        return text;
    }
    let ratio = if scale == 0 { 0.0 } else { value / scale as f64 };
    let color = if value == 0.0 {
        GREEN()
    } else if ratio <= 0.34 {
        YELLOW()
    } else {
        RED()
    };
    format!("{}{}{}{}", BOLD, color, text, RESET)
}

/// Render `haystack` with the code points in `range` marked.
///
/// Colors and underlines when the terminal allows it, brackets otherwise.
pub fn highlight_range(haystack: &str, range: Range<usize>) -> String {
    if use_colors() {
        wrap_range(haystack, range, &format!("{}{}", UNDERLINE, GREEN()), RESET)
    } else {
        wrap_range(haystack, range, "[", "]")
    }
}

/// Insert `open`/`close` around a code-point range, clamped to the text.
fn wrap_range(text: &str, range: Range<usize>, open: &str, close: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let start = range.start.min(chars.len());
    let end = range.end.clamp(start, chars.len());
    let mut out = String::with_capacity(text.len() + open.len() + close.len());
    out.extend(&chars[..start]);
    out.push_str(open);
    out.extend(&chars[start..end]);
    out.push_str(close);
    out.extend(&chars[end..]);
    out
}
