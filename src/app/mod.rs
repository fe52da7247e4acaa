pub mod action;
pub mod effect;
pub mod effect_runner;
pub mod hydration;
pub mod input_mode;
pub mod keybindings;
pub mod layout;
pub mod ports;
pub mod reducer;
pub mod screen;
pub mod state;
pub mod table_pane;
pub mod tables;
