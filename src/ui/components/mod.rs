pub mod atoms;
pub mod columns_menu;
pub mod footer;
pub mod help_overlay;
pub mod layout;
pub mod ledger_table;
pub mod molecules;
pub mod overlay;
pub mod scroll_indicator;
pub mod tabs;
pub mod text_utils;
