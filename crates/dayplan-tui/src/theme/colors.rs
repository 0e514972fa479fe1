//! Catppuccin color palettes for the TUI.

use dayplan_engine::ThemeName;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub base: Color,
    pub surface: Color,
    pub overlay: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Accents
    pub primary: Color,

    // Semantic
    pub success: Color,
    pub warning: Color,

    // Timeline axis gradient (top to bottom)
    pub axis_start: Color,
    pub axis_middle: Color,
    pub axis_end: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

impl Theme {
    /// Palette for a configured theme name.
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Mocha => Self::mocha(),
            ThemeName::Latte => Self::latte(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }

    /// Catppuccin Mocha theme (default dark theme).
    pub fn mocha() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46),    // #1e1e2e
            surface: Color::Rgb(49, 50, 68), // #313244
            overlay: Color::Rgb(69, 71, 90), // #45475a

            text: Color::Rgb(205, 214, 244),    // #cdd6f4
            subtext: Color::Rgb(166, 173, 200), // #a6adc8
            muted: Color::Rgb(108, 112, 134),   // #6c7086

            primary: Color::Rgb(180, 190, 254), // #b4befe (lavender)

            success: Color::Rgb(166, 227, 161), // #a6e3a1 (green)
            warning: Color::Rgb(249, 226, 175), // #f9e2af (yellow)

            axis_start: Color::Rgb(137, 180, 250),  // #89b4fa (blue)
            axis_middle: Color::Rgb(203, 166, 247), // #cba6f7 (mauve)
            axis_end: Color::Rgb(245, 194, 231),    // #f5c2e7 (pink)

            border: Color::Rgb(69, 71, 90),            // #45475a
            border_focused: Color::Rgb(180, 190, 254), // #b4befe
        }
    }

    /// Catppuccin Latte theme (light theme).
    pub fn latte() -> Self {
        Self {
            base: Color::Rgb(239, 241, 245),    // #eff1f5
            surface: Color::Rgb(230, 233, 239), // #e6e9ef
            overlay: Color::Rgb(220, 224, 232), // #dce0e8

            text: Color::Rgb(76, 79, 105),    // #4c4f69
            subtext: Color::Rgb(92, 95, 119), // #5c5f77
            muted: Color::Rgb(140, 143, 161), // #8c8fa1

            primary: Color::Rgb(114, 135, 253), // #7287fd

            success: Color::Rgb(64, 160, 43), // #40a02b
            warning: Color::Rgb(223, 142, 29), // #df8e1d

            axis_start: Color::Rgb(30, 102, 245),   // #1e66f5
            axis_middle: Color::Rgb(136, 57, 239),  // #8839ef
            axis_end: Color::Rgb(234, 118, 203),    // #ea76cb

            border: Color::Rgb(188, 192, 204),         // #bcc0cc
            border_focused: Color::Rgb(114, 135, 253), // #7287fd
        }
    }

    /// High contrast theme.
    pub fn high_contrast() -> Self {
        Self {
            base: Color::Black,
            surface: Color::Rgb(20, 20, 20),
            overlay: Color::Rgb(40, 40, 40),

            text: Color::White,
            subtext: Color::Rgb(200, 200, 200),
            muted: Color::Rgb(150, 150, 150),

            primary: Color::Cyan,

            success: Color::Green,
            warning: Color::Yellow,

            axis_start: Color::LightBlue,
            axis_middle: Color::LightMagenta,
            axis_end: Color::LightRed,

            border: Color::White,
            border_focused: Color::Cyan,
        }
    }

    /// Axis color at `row` of `height`, approximating a three-stop gradient.
    pub fn axis_color(&self, row: u16, height: u16) -> Color {
        let third = (height / 3).max(1);
        match row / third {
            0 => self.axis_start,
            1 => self.axis_middle,
            _ => self.axis_end,
        }
    }
}
