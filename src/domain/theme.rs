//! Theme tokens: the fixed palette behind each [`Theme`].

use super::session::Theme;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Hex notation, e.g. `#1a1a1a`.
    #[must_use]
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Chart styling variant handed to the chart renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartStyle {
    /// Dark series on a white plot area
    Light,
    /// Light series on a dark plot area
    Dark,
}

/// Resolved display tokens for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    pub background: Rgb,
    pub text_color: Rgb,
    pub hover_color: Rgb,
    pub container_color: Rgb,
    pub chart_style: ChartStyle,
}

const LIGHT: ThemeTokens = ThemeTokens {
    background: Rgb(0xff, 0xff, 0xff),      // #ffffff
    text_color: Rgb(0x1a, 0x1a, 0x1a),      // #1a1a1a
    hover_color: Rgb(0x33, 0x99, 0xff),     // #3399ff
    container_color: Rgb(0xf5, 0xf5, 0xf5), // #f5f5f5
    chart_style: ChartStyle::Light,
};

const DARK: ThemeTokens = ThemeTokens {
    background: Rgb(0x12, 0x12, 0x12),      // #121212
    text_color: Rgb(0xee, 0xee, 0xee),      // #eeeeee
    hover_color: Rgb(0x00, 0x77, 0xb6),     // #0077b6
    container_color: Rgb(0x1e, 0x1e, 0x1e), // #1e1e1e
    chart_style: ChartStyle::Dark,
};

impl Theme {
    /// Resolve the display tokens for this theme.
    #[must_use]
    pub fn tokens(self) -> ThemeTokens {
        match self {
            Self::Light => LIGHT,
            Self::Dark => DARK,
        }
    }
}
