pub mod handler;

use crossterm::event::{KeyEvent, MouseEvent};

#[derive(Clone, Debug)]
pub enum Event {
    Init,
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}
