//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_HOVER: Color = Color::Rgb(45, 45, 72);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const YELLOW: Color = Color::Rgb(255, 217, 61);
    pub const RED: Color = Color::Rgb(224, 108, 117);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);

    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Query box (the omnibox stand-in)
pub mod input {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    pub const TEXT: Color = palette::TEXT;
    pub const BACKGROUND: Color = palette::BG_DARK;
}

/// Static recent queries panel
pub mod panel {
    use super::*;

    pub const BORDER: Color = palette::PURPLE;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const HEADING_ICON: Color = palette::PURPLE;
    pub const HEADING_FG: Color = palette::TEXT;

    pub const ITEM_NORMAL_FG: Color = Color::Rgb(180, 182, 200);
    pub const ITEM_SELECTED_BG: Color = palette::BG_HOVER;
    pub const ITEM_SELECTED_INDICATOR: Color = palette::CYAN;
    pub const REMOVE_CONTROL: Color = palette::RED;

    pub const EMPTY: Color = palette::TEXT_DIM;
}

/// Autocomplete suggestion feed
pub mod feed {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const RECENT_HEADER_DISABLED: Color = palette::TEXT_DIM;
    pub const SUGGESTED_LABEL: Color = palette::YELLOW;
    pub const ITEM_FG: Color = Color::Rgb(180, 182, 200);
    pub const ITEM_SELECTED_BG: Color = palette::BG_HOVER;
    pub const ITEM_SELECTED_INDICATOR: Color = palette::CYAN;
}

/// Bottom help/status line
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::CYAN;
    pub const DESCRIPTION: Color = palette::TEXT_MUTED;
    pub const WARNING: Color = palette::YELLOW;
}
