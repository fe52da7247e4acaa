use ratatui::style::Color;

/// Base color palette
pub struct Palette;

impl Palette {
    pub const CATPPUCCIN_MOCHA: Color = Color::Rgb(0x1e, 0x1e, 0x2e);
    pub const DUCKBONES: Color = Color::Rgb(0x15, 0x19, 0x26);
}

/// Application color theme constants
pub struct Theme;

impl Theme {
    // Text
    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_SECONDARY: Color = Color::Gray;
    pub const TEXT_MUTED: Color = Color::DarkGray;
    pub const TEXT_ACCENT: Color = Color::Cyan;
    pub const STATUS_ERROR: Color = Color::Red;

    // Key chips
    pub const KEY_CHIP_BG: Color = Color::Rgb(0x45, 0x47, 0x5a);
    pub const KEY_CHIP_FG: Color = Color::White;

    // Modal/Overlay backgrounds
    pub const MODAL_BG: Color = Palette::DUCKBONES;
    pub const MODAL_BORDER: Color = Color::Cyan;
    pub const MENU_SELECTED_BG: Color = Color::Rgb(0x45, 0x47, 0x5a);

    // Table
    pub const TABLE_BORDER: Color = Color::Cyan;
    pub const TABLE_HEADER_BG: Color = Color::Rgb(0x2a, 0x2a, 0x2e);
    pub const TABLE_BODY_BG: Color = Palette::CATPPUCCIN_MOCHA;
    pub const SELECTED_ROW_BG: Color = Color::Rgb(0x31, 0x32, 0x44);
    pub const DIVIDER: Color = Color::DarkGray;
    pub const DIVIDER_ACTIVE: Color = Color::Yellow;
    pub const SCROLL_ARROW: Color = Color::Yellow;
}
