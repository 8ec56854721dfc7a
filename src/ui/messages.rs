use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

// bright variants for dark terminals
const FG_BRIGHT_BLUE: &str = "\x1b[94m";
const FG_BRIGHT_GREEN: &str = "\x1b[92m";
const FG_BRIGHT_YELLOW: &str = "\x1b[93m";
const FG_BRIGHT_RED: &str = "\x1b[91m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

/// Process-wide presentation flag, set from `settings.theme`.
static DARK_PALETTE: AtomicBool = AtomicBool::new(false);

pub fn set_dark_palette(dark: bool) {
    DARK_PALETTE.store(dark, Ordering::Relaxed);
}

pub fn is_dark_palette() -> bool {
    DARK_PALETTE.load(Ordering::Relaxed)
}

fn pick(light: &'static str, dark: &'static str) -> &'static str {
    if is_dark_palette() { dark } else { light }
}

pub fn info<T: fmt::Display>(msg: T) {
    let c = pick(FG_BLUE, FG_BRIGHT_BLUE);
    println!("{}{}{} {}{}", c, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    let c = pick(FG_GREEN, FG_BRIGHT_GREEN);
    println!("{}{}{} {}{}", c, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    let c = pick(FG_YELLOW, FG_BRIGHT_YELLOW);
    println!("{}{}{} {}{}", c, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    let c = pick(FG_RED, FG_BRIGHT_RED);
    eprintln!("{}{}{} {}{}", c, BOLD, ICON_ERR, RESET, msg);
}

/// Section header
pub fn header<T: fmt::Display>(msg: T) {
    let c = pick(FG_BLUE, FG_BRIGHT_BLUE);
    println!("{}{}====================== {}\n{}", c, BOLD, msg, RESET);
}
