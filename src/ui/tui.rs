use std::io::{Stdout, stdout};

use color_eyre::eyre::Result;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, EventStream, KeyEventKind,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    is_raw_mode_enabled,
};
use futures::StreamExt;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::event::Event;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal and a reader task that turns terminal input into
/// [`Event`]s. Redraws are driven by state changes, so there is no frame timer.
pub struct TuiRunner {
    terminal: Tui,
    events: UnboundedReceiver<Event>,
    sender: UnboundedSender<Event>,
    reader: Option<(JoinHandle<()>, CancellationToken)>,
}

impl TuiRunner {
    pub fn new() -> Result<Self> {
        let (sender, events) = mpsc::unbounded_channel();
        Ok(Self {
            terminal: Terminal::new(CrosstermBackend::new(stdout()))?,
            events,
            sender,
            reader: None,
        })
    }

    /// Raw mode, alternate screen and mouse capture; queues [`Event::Init`]
    /// so the first frame is drawn before any input.
    pub fn enter(&mut self) -> Result<()> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        let _ = self.sender.send(Event::Init);

        let token = CancellationToken::new();
        let task = tokio::spawn(read_input(self.sender.clone(), token.clone()));
        self.reader = Some((task, token));
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if let Some((task, token)) = self.reader.take() {
            token.cancel();
            task.abort();
        }
        if is_raw_mode_enabled()? {
            execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
            disable_raw_mode()?;
        }
        Ok(())
    }

    pub async fn next_event(&mut self) -> Option<Event> {
        self.events.recv().await
    }

    pub fn terminal(&mut self) -> &mut Tui {
        &mut self.terminal
    }
}

async fn read_input(sender: UnboundedSender<Event>, token: CancellationToken) {
    let mut stream = EventStream::new();
    loop {
        let next = tokio::select! {
            _ = token.cancelled() => return,
            next = stream.next() => next,
        };
        let Some(Ok(raw)) = next else {
            return;
        };
        let Some(event) = translate(raw) else {
            continue;
        };
        if sender.send(event).is_err() {
            return;
        }
    }
}

/// Key releases and bare mouse motion are dropped; drags still come through.
fn translate(raw: CrosstermEvent) -> Option<Event> {
    match raw {
        CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Event::Key(key)),
        CrosstermEvent::Mouse(mouse) if mouse.kind != MouseEventKind::Moved => {
            Some(Event::Mouse(mouse))
        }
        CrosstermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
        _ => None,
    }
}
