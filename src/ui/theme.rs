use ratatui::style::Color;

/// Colors used across the interface.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels.
    pub mantle: Color,
    /// Subtle surface color for the highlighted row.
    pub surface1: Color,
    /// Muted overlay line/border color.
    pub overlay1: Color,
    /// Muted text for metadata.
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent for interactive elements.
    pub sapphire: Color,
    /// Accent for headings.
    pub mauve: Color,
    /// Positive state color.
    pub green: Color,
    /// Attention state color.
    pub yellow: Color,
    /// Error color.
    pub red: Color,
    /// Accent for borders and genre labels.
    pub lavender: Color,
}

/// Catppuccin Mocha palette.
const MOCHA: Theme = Theme {
    base: Color::Rgb(0x1e, 0x1e, 0x2e),
    mantle: Color::Rgb(0x18, 0x18, 0x25),
    surface1: Color::Rgb(0x45, 0x47, 0x5a),
    overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
    overlay2: Color::Rgb(0x93, 0x99, 0xb2),
    text: Color::Rgb(0xcd, 0xd6, 0xf4),
    subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
    sapphire: Color::Rgb(0x74, 0xc7, 0xec),
    mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
    green: Color::Rgb(0xa6, 0xe3, 0xa1),
    yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
    red: Color::Rgb(0xf3, 0x8b, 0xa8),
    lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
};

/// Active theme.
#[must_use]
pub const fn theme() -> Theme {
    MOCHA
}
