//! Styling constants for the deck: geometry, colors and fonts.

/// English Metric Units per inch, the native unit of OOXML geometry.
pub const EMU_PER_INCH: f64 = 914_400.0;

/// 16:9 widescreen, 13.333in x 7.5in.
pub const SLIDE_WIDTH: i64 = 12_192_000;
pub const SLIDE_HEIGHT: i64 = 6_858_000;

/// Slide width in inches, for full-width centered text.
pub const SLIDE_WIDTH_IN: f64 = 13.333;

pub fn inches(value: f64) -> i64 {
    (value * EMU_PER_INCH).round() as i64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Hex form used by DrawingML `srgbClr` values.
    pub fn hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

// Dark mode with neon accents.
pub const BG_DEEP: Rgb = Rgb(13, 17, 23);
pub const BG_CARD: Rgb = Rgb(30, 35, 45);
pub const TEXT_WHITE: Rgb = Rgb(255, 255, 255);
pub const TEXT_GREY: Rgb = Rgb(160, 170, 190);

// Role accent colors.
pub const FARMER: Rgb = Rgb(56, 239, 125);
pub const BUYER: Rgb = Rgb(56, 189, 248);
pub const BANK: Rgb = Rgb(255, 215, 0);
pub const EXPERT: Rgb = Rgb(192, 132, 252);
pub const ADMIN: Rgb = Rgb(244, 63, 94);
pub const TECH: Rgb = Rgb(0, 214, 194);

pub const FONT_LATIN: &str = "Segoe UI";
pub const FONT_EAST_ASIAN: &str = "Microsoft YaHei UI";
