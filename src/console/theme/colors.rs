//! Color Constants for the Admin Console
//!
//! Dark slate chrome around a light working area, with a single indigo
//! accent. Badge colors live at the bottom.

use eframe::egui::Color32;

use crate::shared::records::BadgeColor;

/// Sidebar background - Slate 900
pub const SIDEBAR_BG: Color32 = Color32::from_rgb(0x0F, 0x17, 0x2A);

/// Sidebar group heading - Slate 400
pub const SIDEBAR_HEADING: Color32 = Color32::from_rgb(0x94, 0xA3, 0xB8);

/// Sidebar entry text - Slate 200
pub const SIDEBAR_TEXT: Color32 = Color32::from_rgb(0xE2, 0xE8, 0xF0);

/// Current route highlight - Slate 700
pub const SIDEBAR_ACTIVE: Color32 = Color32::from_rgb(0x33, 0x41, 0x55);

/// Top bar background
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x1E, 0x29, 0x3B);

/// Main content background - Slate 50
pub const CONTENT_BG: Color32 = Color32::from_rgb(0xF8, 0xFA, 0xFC);

/// Cards, tables and dialogs
pub const SURFACE: Color32 = Color32::WHITE;

/// Card and table borders - Slate 200
pub const BORDER: Color32 = Color32::from_rgb(0xE2, 0xE8, 0xF0);

/// Input background - Slate 100
pub const INPUT_BG: Color32 = Color32::from_rgb(0xF1, 0xF5, 0xF9);

/// Primary text color
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x0F, 0x17, 0x2A);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x64, 0x74, 0x8B);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF8, 0xFA, 0xFC);

/// Accent color for primary actions - Indigo 600
pub const ACCENT: Color32 = Color32::from_rgb(0x4F, 0x46, 0xE5);

/// Accent hover - Indigo 500
pub const ACCENT_HOVER: Color32 = Color32::from_rgb(0x63, 0x66, 0xF1);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xDC, 0x26, 0x26);

/// Destructive button background
pub const DANGER: Color32 = Color32::from_rgb(0xB9, 0x1C, 0x1C);

/// Signed-in indicator
pub const STATUS_ONLINE: Color32 = Color32::from_rgb(0x22, 0xC5, 0x5E);

/// Separator/divider color
pub const SEPARATOR: Color32 = Color32::from_rgb(0xCB, 0xD5, 0xE1);

/// Badge fill for a color token
pub fn badge_color(color: BadgeColor) -> Color32 {
    match color {
        BadgeColor::Blue => Color32::from_rgb(0x25, 0x63, 0xEB),
        BadgeColor::Yellow => Color32::from_rgb(0xCA, 0x8A, 0x04),
        BadgeColor::Green => Color32::from_rgb(0x16, 0xA3, 0x4A),
        BadgeColor::Emerald => Color32::from_rgb(0x05, 0x96, 0x69),
        BadgeColor::Red => Color32::from_rgb(0xDC, 0x26, 0x26),
        BadgeColor::Gray => Color32::from_rgb(0x6B, 0x72, 0x80),
        BadgeColor::Purple => Color32::from_rgb(0x93, 0x33, 0xEA),
        BadgeColor::Orange => Color32::from_rgb(0xEA, 0x58, 0x0C),
        BadgeColor::Neutral => Color32::from_rgb(0x94, 0xA3, 0xB8),
    }
}
