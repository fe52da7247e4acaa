use color_eyre::eyre::Result;

use crate::state::AppState;

pub trait Renderer {
    /// Draws the current state; the renderer may record the table viewport
    /// it actually used back into `state`.
    fn draw(&mut self, state: &mut AppState) -> Result<()>;
}
