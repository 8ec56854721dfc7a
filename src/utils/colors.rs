/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Goal progress color:
/// ≥100% → green
/// ≥50%  → yellow
/// else  → red
pub fn color_for_ratio(ratio: f64) -> &'static str {
    if ratio >= 1.0 {
        GREEN
    } else if ratio >= 0.5 {
        YELLOW
    } else {
        RED
    }
}
