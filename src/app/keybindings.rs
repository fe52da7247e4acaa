//! Centralized keybinding definitions.
//! Single source of truth for key/description used by Footer and Help.

use super::action::Action;
use super::table_pane::RowMotion;

#[derive(Clone)]
pub struct KeyBinding {
    /// Short key for Footer (e.g., "c", "</>")
    pub key_short: &'static str,
    /// Display key for Help (e.g., "Tab", "j / ↓")
    pub key: &'static str,
    /// Short description for Footer (e.g., "Quit", "Width")
    pub desc_short: &'static str,
    /// Full description for Help (e.g., "Quit application")
    pub description: &'static str,
    pub action: Action,
}

impl KeyBinding {
    /// Returns (key_short, desc_short) tuple for Footer display
    pub const fn as_hint(&self) -> (&'static str, &'static str) {
        (self.key_short, self.desc_short)
    }
}

// =============================================================================
// Index Constants for Footer Lookup
// =============================================================================

pub mod idx {
    pub mod global {
        pub const QUIT: usize = 0;
        pub const HELP: usize = 1;
        pub const NEXT_TABLE: usize = 2;
        pub const COLUMNS: usize = 3;
        pub const SORT: usize = 4;
        pub const FONT_LARGER: usize = 5;
        pub const FONT_SMALLER: usize = 6;
        pub const RESET_COLUMNS: usize = 7;
        pub const RESET_ALL: usize = 8;
    }

    pub mod nav {
        pub const ROWS: usize = 0;
        pub const COLUMNS: usize = 1;
        pub const H_SCROLL: usize = 2;
        pub const WIDTH: usize = 3;
        pub const TOP_BOTTOM: usize = 4;
    }

    pub mod columns_menu {
        pub const TOGGLE: usize = 0;
        pub const NAVIGATE: usize = 1;
        pub const RESET: usize = 2;
        pub const CLOSE: usize = 3;
    }

    pub mod help {
        pub const CLOSE: usize = 0;
        pub const QUIT: usize = 1;
    }
}

// =============================================================================
// Global Keys (Normal mode)
// =============================================================================

pub const GLOBAL_KEYS: &[KeyBinding] = &[
    // idx 0: QUIT
    KeyBinding {
        key_short: "q",
        key: "q",
        desc_short: "Quit",
        description: "Quit application",
        action: Action::Quit,
    },
    // idx 1: HELP
    KeyBinding {
        key_short: "?",
        key: "?",
        desc_short: "Help",
        description: "Toggle help",
        action: Action::OpenHelp,
    },
    // idx 2: NEXT_TABLE
    KeyBinding {
        key_short: "Tab",
        key: "Tab",
        desc_short: "Table",
        description: "Switch between Positions and Trades",
        action: Action::NextTable,
    },
    // idx 3: COLUMNS
    KeyBinding {
        key_short: "c",
        key: "c",
        desc_short: "Columns",
        description: "Show or hide columns",
        action: Action::OpenColumnsMenu,
    },
    // idx 4: SORT
    KeyBinding {
        key_short: "s",
        key: "s / click header",
        desc_short: "Sort",
        description: "Sort by selected column (again to reverse)",
        action: Action::SortSelected,
    },
    // idx 5: FONT_LARGER
    KeyBinding {
        key_short: "+",
        key: "+",
        desc_short: "Larger",
        description: "Larger text (taller rows)",
        action: Action::StepFontSize(true),
    },
    // idx 6: FONT_SMALLER
    KeyBinding {
        key_short: "-",
        key: "-",
        desc_short: "Smaller",
        description: "Smaller text",
        action: Action::StepFontSize(false),
    },
    // idx 7: RESET_COLUMNS
    KeyBinding {
        key_short: "0",
        key: "0",
        desc_short: "Reset",
        description: "Reset visible columns and widths",
        action: Action::ResetColumns,
    },
    // idx 8: RESET_ALL
    KeyBinding {
        key_short: "R",
        key: "Shift+R",
        desc_short: "Reset all",
        description: "Reset columns, widths and text size",
        action: Action::ResetAll,
    },
];

// =============================================================================
// Navigation Keys (Normal mode)
// =============================================================================

pub const NAVIGATION_KEYS: &[KeyBinding] = &[
    // idx 0: ROWS
    KeyBinding {
        key_short: "j/k",
        key: "j / k / ↑↓",
        desc_short: "Rows",
        description: "Select next / previous row",
        action: Action::MoveRow(RowMotion::Next),
    },
    // idx 1: COLUMNS
    KeyBinding {
        key_short: "h/l",
        key: "h / l / ←→",
        desc_short: "Column",
        description: "Select previous / next column",
        action: Action::NextColumn,
    },
    // idx 2: H_SCROLL
    KeyBinding {
        key_short: "H/L",
        key: "Shift+H / Shift+L",
        desc_short: "Scroll",
        description: "Scroll the table horizontally",
        action: Action::Scroll(8),
    },
    // idx 3: WIDTH
    KeyBinding {
        key_short: "</>",
        key: "< / > / drag divider",
        desc_short: "Width",
        description: "Narrow / widen selected column against its neighbor",
        action: Action::NudgeColumn(1),
    },
    // idx 4: TOP_BOTTOM
    KeyBinding {
        key_short: "g/G",
        key: "g / G",
        desc_short: "Top/Bottom",
        description: "First / last row",
        action: Action::MoveRow(RowMotion::First),
    },
];

// =============================================================================
// Columns Menu Keys
// =============================================================================

pub const COLUMNS_MENU_KEYS: &[KeyBinding] = &[
    // idx 0: TOGGLE
    KeyBinding {
        key_short: "Space",
        key: "Space / Enter",
        desc_short: "Toggle",
        description: "Show or hide the highlighted column",
        action: Action::MenuToggle,
    },
    // idx 1: NAVIGATE
    KeyBinding {
        key_short: "j/k",
        key: "j / k / ↑↓",
        desc_short: "Move",
        description: "Move highlight",
        action: Action::MenuNext,
    },
    // idx 2: RESET
    KeyBinding {
        key_short: "0",
        key: "0",
        desc_short: "Defaults",
        description: "Restore default columns",
        action: Action::ResetColumns,
    },
    // idx 3: CLOSE
    KeyBinding {
        key_short: "Esc",
        key: "Esc / c",
        desc_short: "Close",
        description: "Close menu",
        action: Action::CloseColumnsMenu,
    },
];

// =============================================================================
// Help Keys
// =============================================================================

pub const HELP_KEYS: &[KeyBinding] = &[
    // idx 0: CLOSE
    KeyBinding {
        key_short: "Esc",
        key: "Esc / ?",
        desc_short: "Close",
        description: "Close help",
        action: Action::CloseHelp,
    },
    // idx 1: QUIT
    KeyBinding {
        key_short: "q",
        key: "q",
        desc_short: "Quit",
        description: "Quit application",
        action: Action::Quit,
    },
];
