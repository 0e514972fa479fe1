//! Icon sets for Nerd Fonts, Unicode, and ASCII fallback.

use dayplan_engine::IconStyle;

/// Icon set based on configured style.
#[derive(Debug, Clone)]
pub struct IconSet {
    style: IconStyle,
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(IconStyle::default())
    }
}

impl IconSet {
    /// Create a new icon set with the specified style.
    pub fn new(style: IconStyle) -> Self {
        Self { style }
    }

    /// Get the current icon style.
    pub fn style(&self) -> IconStyle {
        self.style
    }

    // === Buttons ===

    pub fn add(&self) -> &'static str {
        match self.style {
            IconStyle::Nerd => "󰐕",
            IconStyle::Unicode | IconStyle::Ascii => "+",
        }
    }

    pub fn save(&self) -> &'static str {
        match self.style {
            IconStyle::Nerd => "󰄬",
            IconStyle::Unicode => "✓",
            IconStyle::Ascii => "v",
        }
    }

    // === Event cards ===

    pub fn checked(&self) -> &'static str {
        match self.style {
            IconStyle::Nerd => "󰄵",
            IconStyle::Unicode => "[✓]",
            IconStyle::Ascii => "[x]",
        }
    }

    pub fn unchecked(&self) -> &'static str {
        match self.style {
            IconStyle::Nerd => "󰄱",
            IconStyle::Unicode | IconStyle::Ascii => "[ ]",
        }
    }

    pub fn selected(&self) -> &'static str {
        match self.style {
            IconStyle::Nerd | IconStyle::Unicode => "▸",
            IconStyle::Ascii => ">",
        }
    }

    // === Timeline axis ===

    pub fn axis(&self) -> &'static str {
        match self.style {
            IconStyle::Nerd | IconStyle::Unicode => "│",
            IconStyle::Ascii => "|",
        }
    }

    pub fn hour_tick(&self) -> &'static str {
        match self.style {
            IconStyle::Nerd | IconStyle::Unicode => "┼",
            IconStyle::Ascii => "+",
        }
    }

    pub fn connector(&self) -> &'static str {
        match self.style {
            IconStyle::Nerd | IconStyle::Unicode => "─",
            IconStyle::Ascii => "-",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unicode() {
        assert_eq!(IconSet::default().style(), IconStyle::Unicode);
    }

    #[test]
    fn test_ascii_icons_are_ascii() {
        let icons = IconSet::new(IconStyle::Ascii);
        let all = [
            icons.add(),
            icons.save(),
            icons.checked(),
            icons.unchecked(),
            icons.selected(),
            icons.axis(),
            icons.hour_tick(),
            icons.connector(),
        ];
        assert!(all.iter().all(|icon| icon.is_ascii()));
    }

    #[test]
    fn test_checkbox_states_differ() {
        for style in [IconStyle::Nerd, IconStyle::Unicode, IconStyle::Ascii] {
            let icons = IconSet::new(style);
            assert_ne!(icons.checked(), icons.unchecked());
        }
    }
}
