//! Terminal cell width helpers.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// Width of a string in terminal cells.
pub fn visual_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Fit `s` into `max_width` cells, ending in "..." when cut.
///
/// Never splits a character. When even the ellipsis does not fit, the
/// result is as many dots as there are cells.
pub fn fit_width(s: &str, max_width: usize) -> String {
    if visual_width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= ELLIPSIS.len() {
        return ".".repeat(max_width);
    }

    let budget = max_width - ELLIPSIS.len();
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visual_width() {
        assert_eq!(visual_width("lunch"), 5);
        assert_eq!(visual_width(""), 0);
        // CJK characters are 2 cells wide
        assert_eq!(visual_width("会议"), 4);
    }

    #[test]
    fn test_fit_width_untouched() {
        assert_eq!(fit_width("Gym", 10), "Gym");
        assert_eq!(fit_width("Gym", 3), "Gym");
    }

    #[test]
    fn test_fit_width_truncates() {
        assert_eq!(fit_width("Team meeting", 8), "Team ...");
        assert_eq!(fit_width("会议记录", 6), "会...");
    }

    #[test]
    fn test_fit_width_tiny() {
        assert_eq!(fit_width("Dentist", 2), "..");
        assert_eq!(fit_width("Dentist", 0), "");
    }
}
