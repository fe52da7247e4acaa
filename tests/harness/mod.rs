use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use ledgerview::app::action::Action;
use ledgerview::app::effect_runner::EffectRunner;
use ledgerview::app::hydration::load_layout;
use ledgerview::app::ports::{LedgerSource, PreferenceStore, Renderer};
use ledgerview::app::reducer::reduce;
use ledgerview::app::state::AppState;
use ledgerview::app::table_pane::TablePane;
use ledgerview::app::tables::{positions, trades};
use ledgerview::infra::adapters::{MemoryPreferenceStore, SampleLedger};
use ledgerview::ui::components::layout::MainLayout;

pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Sample ledger with layouts hydrated from `store`.
pub fn create_state_with_store(store: &dyn PreferenceStore) -> AppState {
    let ledger = SampleLedger;
    let positions = TablePane::new(
        load_layout(store, Arc::new(positions::catalog().unwrap())),
        ledger.positions().unwrap(),
    );
    let trades = TablePane::new(
        load_layout(store, Arc::new(trades::catalog().unwrap())),
        ledger.trades().unwrap(),
    );
    let mut state = AppState::new(positions, trades, "sample data");
    state.set_terminal_size(TEST_WIDTH, TEST_HEIGHT);
    state
}

pub fn create_test_state() -> AppState {
    create_state_with_store(&MemoryPreferenceStore::new())
}

pub fn create_test_terminal() -> Terminal<TestBackend> {
    create_terminal(TEST_WIDTH, TEST_HEIGHT)
}

pub fn create_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

pub fn render_and_get_buffer(terminal: &mut Terminal<TestBackend>, state: &mut AppState) -> Buffer {
    terminal
        .draw(|frame| MainLayout::render(frame, state))
        .unwrap();

    terminal.backend().buffer().clone()
}

pub fn render_to_string(terminal: &mut Terminal<TestBackend>, state: &mut AppState) -> String {
    buffer_to_string(&render_and_get_buffer(terminal, state))
}

pub fn line(output: &str, y: usize) -> &str {
    output.lines().nth(y).unwrap_or_default()
}

/// Draws into a `TestBackend`, standing in for the terminal renderer.
pub struct TestRenderer {
    pub terminal: Terminal<TestBackend>,
}

impl TestRenderer {
    pub fn new() -> Self {
        Self {
            terminal: create_test_terminal(),
        }
    }
}

impl Renderer for TestRenderer {
    fn draw(&mut self, state: &mut AppState) -> Result<()> {
        self.terminal.draw(|frame| MainLayout::render(frame, state))?;
        Ok(())
    }
}

/// Runs `actions` through the reducer and the effect runner, as the event
/// loop does.
pub fn dispatch(
    state: &mut AppState,
    store: &Arc<dyn PreferenceStore>,
    renderer: &mut TestRenderer,
    actions: &[Action],
) {
    let runner = EffectRunner::new(Arc::clone(store));
    for action in actions {
        let effects = reduce(state, *action);
        runner.run(effects, renderer, state).unwrap();
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            let cell = buffer.cell((x, y)).unwrap();
            result.push_str(cell.symbol());
        }
        if y < buffer.area.height - 1 {
            result.push('\n');
        }
    }
    result
}
