use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use log::info;
use tokio::sync::mpsc;

use ledgerview::app::action::Action;
use ledgerview::app::effect::Effect;
use ledgerview::app::effect_runner::EffectRunner;
use ledgerview::app::hydration::load_layout;
use ledgerview::app::ports::{LedgerSource, PreferenceStore};
use ledgerview::app::reducer::reduce;
use ledgerview::app::state::AppState;
use ledgerview::app::table_pane::TablePane;
use ledgerview::app::tables::{positions, trades};
use ledgerview::infra::adapters::{
    CsvLedgerSource, JsonPreferenceStore, MemoryPreferenceStore, SampleLedger,
};
use ledgerview::infra::config::AppConfig;
use ledgerview::infra::config::app_config::CONFIG_FILE_NAME;
use ledgerview::infra::config::paths::config_dir;
use ledgerview::ui::adapters::TuiRenderer;
use ledgerview::ui::event::handler::handle_event;
use ledgerview::ui::tui::TuiRunner;
use ledgerview::{error, logging};

/// Terminal viewer for positions and trades with resizable columns.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory with positions.csv and trades.csv (sample data if omitted)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Config file [default: <config dir>/ledgerview/config.toml]
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Keep column layouts for this session only
    #[arg(long)]
    no_persist: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    error::install_hooks()?;

    let args = Args::parse();
    let config_path = match args.config {
        Some(path) => path,
        None => config_dir()?.join(CONFIG_FILE_NAME),
    };
    let config = AppConfig::load(&config_path)?;
    if let Some(log_path) = logging::init(config.level_filter()?) {
        info!("logging to {}", log_path.display());
    }

    let store: Arc<dyn PreferenceStore> = if args.no_persist || !config.persist {
        info!("layouts kept in memory for this session");
        Arc::new(MemoryPreferenceStore::new())
    } else {
        Arc::new(JsonPreferenceStore::new()?)
    };

    let (source, source_label): (Box<dyn LedgerSource>, String) =
        match args.data_dir.or(config.data_dir) {
            Some(dir) => {
                let label = dir.display().to_string();
                (Box::new(CsvLedgerSource::new(dir)), label)
            }
            None => (Box::new(SampleLedger), "sample data".to_string()),
        };

    let positions = TablePane::new(
        load_layout(store.as_ref(), Arc::new(positions::catalog()?)),
        source.positions()?,
    );
    let trades = TablePane::new(
        load_layout(store.as_ref(), Arc::new(trades::catalog()?)),
        source.trades()?,
    );
    let mut state = AppState::new(positions, trades, source_label);

    let (action_tx, mut action_rx) = mpsc::channel::<Action>(256);
    let effect_runner = EffectRunner::new(Arc::clone(&store));

    let mut tui = TuiRunner::new()?;
    tui.enter()?;

    let initial_size = tui.terminal().size()?;
    state.set_terminal_size(initial_size.width, initial_size.height);

    loop {
        tokio::select! {
            Some(event) = tui.next_event() => {
                let action = handle_event(event, &state);
                if !action.is_none() {
                    let _ = action_tx.send(action).await;
                }
            }
            Some(action) = action_rx.recv() => {
                let mut effects = reduce(&mut state, action);

                if state.render_dirty {
                    effects.push(Effect::Render);
                }

                let mut renderer = TuiRenderer::new(&mut tui);
                effect_runner.run(effects, &mut renderer, &mut state)?;
                state.clear_dirty();
            }
        }

        if state.should_quit {
            break;
        }
    }

    tui.exit()?;
    Ok(())
}
