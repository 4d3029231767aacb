// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the search-widget CLI.
//!
//! OneDark colors for dark terminals, One Light for light ones. The theme comes
//! from `SEARCH_WIDGET_THEME` when set, then `COLORFGBG`, and defaults to dark.
//! Respects `NO_COLOR` and falls back to plain text when stdout is not a TTY.

use std::sync::OnceLock;

use search_widget::{CanonicalLink, RankBand, SearchItem};

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
    if let Ok(theme) = std::env::var("SEARCH_WIDGET_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; background 7+ (except 8) is a light terminal
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

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
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
theme_color!(BLUE);
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

/// `error:` prefix for stderr.
pub fn error_label() -> String {
    if std::env::var("NO_COLOR").is_err() && atty::is(atty::Stream::Stderr) {
        format!("{}{}error:{}", BOLD, RED(), RESET)
    } else {
        "error:".to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// RESULT RENDERING
// ═══════════════════════════════════════════════════════════════════════════

fn band_badge(band: Option<RankBand>) -> String {
    match band {
        Some(RankBand::Title) => themed(GREEN, &[BOLD], "title"),
        Some(RankBand::Description) => themed(YELLOW, &[BOLD], "desc "),
        Some(RankBand::Link) => themed(BLUE, &[BOLD], "link "),
        None => themed(GRAY, &[], "  -  "),
    }
}

/// One filtered item: position, band, title, href, description.
pub fn print_result(position: usize, band: Option<RankBand>, item: &SearchItem) {
    println!(
        "{:>3}. [{}] {}  {}",
        position,
        band_badge(band),
        themed(CYAN, &[BOLD], &item.title_name),
        themed(GRAY, &[], &item.link_dest)
    );
    if !item.desc_text.is_empty() {
        println!("          {}", item.desc_text);
    }
}

/// Summary line after a filter run.
pub fn print_summary(query: &str, matched: usize, total: usize) {
    let counts = format!("{}/{}", matched, total);
    if query.trim().is_empty() {
        println!("{} items (no query)", themed(GREEN, &[BOLD], &counts));
    } else {
        println!(
            "{} items match {}",
            themed(GREEN, &[BOLD], &counts),
            themed(YELLOW, &[], &format!("\"{}\"", query.trim()))
        );
    }
}

/// Key/value block for a canonical link.
pub fn print_link(link: &CanonicalLink) {
    let field = |name: &str, value: &str| {
        let shown = if value.is_empty() {
            themed(GRAY, &[], "(none)")
        } else {
            value.to_string()
        };
        println!("{:>12}  {}", themed(CYAN, &[], name), shown);
    };
    field("href", &link.href);
    field("target", &link.target);
    field("rel", &link.rel);
    field("searchValue", &link.search_value);
}
