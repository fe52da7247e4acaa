mod hint_bar;

pub use hint_bar::{chip_hint_line, hint_line};
