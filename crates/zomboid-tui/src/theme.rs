//! Terminal color theme system
//!
//! Provides adaptive color palettes for dark and light terminal backgrounds.
//! Auto-detects via COLORFGBG env var, or manual override with --light flag
//! or ZOMBOID_LIGHT_BG=1 environment variable.

use ratatui::style::Color;

use zomboid_core::object::ItemKind;
use zomboid_core::player::StatLevel;

/// Color theme for terminal UI.
/// All UI code should use theme colors instead of hardcoded Color:: values.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    // General UI text
    /// Primary foreground text
    pub text: Color,
    /// Secondary/hint text (footers, instructions)
    pub text_dim: Color,
    /// Muted text (empty states, placeholder)
    pub text_muted: Color,

    // Borders
    pub border: Color,
    /// Informational border (help, area select)
    pub border_accent: Color,
    /// Action border (item select)
    pub border_action: Color,
    /// Danger border (game over)
    pub border_danger: Color,

    // Interactive elements
    pub cursor_fg: Color,
    pub cursor_bg: Color,

    // Semantic colors
    pub accent: Color,
    pub header: Color,
    pub good: Color,
    pub warning: Color,
    pub bad: Color,

    // Map
    pub map_player: Color,
    pub map_zombie: Color,
    pub map_zombie_chasing: Color,
    pub map_building: Color,
    pub map_building_looted: Color,
    pub map_ground: Color,
    pub map_dark: Color,

    // Inventory item kinds
    pub item_food: Color,
    pub item_water: Color,
    pub item_medical: Color,
    pub item_weapon: Color,
    pub item_key: Color,
    pub item_default: Color,
}

impl Theme {
    /// Dark terminal background theme (default)
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::DarkGray,
            text_muted: Color::Gray,
            border: Color::White,
            border_accent: Color::Cyan,
            border_action: Color::Yellow,
            border_danger: Color::Red,
            cursor_fg: Color::Yellow,
            cursor_bg: Color::DarkGray,
            accent: Color::Cyan,
            header: Color::Yellow,
            good: Color::Green,
            warning: Color::Yellow,
            bad: Color::Red,
            map_player: Color::LightBlue,
            map_zombie: Color::Green,
            map_zombie_chasing: Color::LightRed,
            map_building: Color::Yellow,
            map_building_looted: Color::DarkGray,
            map_ground: Color::DarkGray,
            map_dark: Color::Black,
            item_food: Color::LightRed,
            item_water: Color::LightBlue,
            item_medical: Color::LightGreen,
            item_weapon: Color::Gray,
            item_key: Color::Yellow,
            item_default: Color::White,
        }
    }

    /// Light terminal background theme
    pub fn light() -> Self {
        Self {
            text: Color::Black,
            text_dim: Color::DarkGray,
            text_muted: Color::DarkGray,
            border: Color::DarkGray,
            border_accent: Color::Blue,
            border_action: Color::Yellow,
            border_danger: Color::Red,
            cursor_fg: Color::Yellow,
            cursor_bg: Color::DarkGray,
            accent: Color::Blue,
            header: Color::Magenta,
            good: Color::Green,
            warning: Color::Yellow,
            bad: Color::Red,
            map_player: Color::Blue,
            map_zombie: Color::Green,
            map_zombie_chasing: Color::Red,
            map_building: Color::Magenta,
            map_building_looted: Color::Gray,
            map_ground: Color::Gray,
            map_dark: Color::White,
            item_food: Color::Red,
            item_water: Color::Blue,
            item_medical: Color::Green,
            item_weapon: Color::DarkGray,
            item_key: Color::Magenta,
            item_default: Color::Black,
        }
    }

    /// Auto-detect terminal background and return appropriate theme.
    /// Checks COLORFGBG env var and ZOMBOID_LIGHT_BG override.
    pub fn detect() -> Self {
        if Self::is_light_background() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Color for a stat at the given severity
    pub fn stat_color(&self, level: StatLevel) -> Color {
        match level {
            StatLevel::Ok => self.good,
            StatLevel::Warning => self.warning,
            StatLevel::Critical => self.bad,
        }
    }

    pub fn item_color(&self, kind: ItemKind) -> Color {
        match kind {
            ItemKind::Food => self.item_food,
            ItemKind::Water => self.item_water,
            ItemKind::Medical => self.item_medical,
            ItemKind::Weapon => self.item_weapon,
            ItemKind::Key => self.item_key,
            _ => self.item_default,
        }
    }

    fn is_light_background() -> bool {
        // Explicit override via environment variable
        if let Ok(val) = std::env::var("ZOMBOID_LIGHT_BG") {
            return val == "1" || val.eq_ignore_ascii_case("true");
        }

        // COLORFGBG is set by many terminals (xterm, rxvt, iTerm2, etc.)
        // Format: "fg;bg" where values are color indices (0-15)
        if let Ok(colorfgbg) = std::env::var("COLORFGBG")
            && let Some(bg_str) = colorfgbg.rsplit(';').next()
            && let Ok(bg_idx) = bg_str.parse::<u8>()
        {
            return matches!(bg_idx, 7 | 9..=15);
        }

        false
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
