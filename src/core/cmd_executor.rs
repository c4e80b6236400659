use std::time::Duration;

use color_eyre::eyre::Result;
use tokio::sync::mpsc::UnboundedSender;

use crate::{
    core::cmd::{Cmd, CountdownCmd},
    core::msg::{session::SessionMsg, Msg},
    core::raw_msg::RawMsg,
    domain::quotes::{QuoteSource, ThreadRngSource},
    infrastructure::{name_store::NameStore, ticker::CountdownTicker},
};

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Command executor bridging pure commands to the outside world
///
/// Owns the single live countdown ticker, the quote source and the optional
/// name store. Results flow back into the runtime as messages, never as
/// direct state mutation.
pub struct CmdExecutor {
    raw_tx: UnboundedSender<RawMsg>,
    msg_tx: UnboundedSender<Msg>,
    quote_source: Box<dyn QuoteSource>,
    name_store: Option<NameStore>,
    ticker: Option<CountdownTicker>,
}

impl CmdExecutor {
    /// Create a new command executor wired to the runtime's channels
    pub fn new(raw_tx: UnboundedSender<RawMsg>, msg_tx: UnboundedSender<Msg>) -> Self {
        Self {
            raw_tx,
            msg_tx,
            quote_source: Box::new(ThreadRngSource),
            name_store: None,
            ticker: None,
        }
    }

    /// Replace the quote source (tests inject a seeded one)
    pub fn with_quote_source(mut self, source: Box<dyn QuoteSource>) -> Self {
        self.quote_source = source;
        self
    }

    /// Replace the quote source in place
    pub fn set_quote_source(&mut self, source: Box<dyn QuoteSource>) {
        self.quote_source = source;
    }

    /// Enable name persistence
    pub fn set_name_store(&mut self, store: NameStore) {
        self.name_store = Some(store);
    }

    pub fn has_name_store(&self) -> bool {
        self.name_store.is_some()
    }

    /// A countdown ticker is currently live
    pub fn has_live_ticker(&self) -> bool {
        self.ticker.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Execute a batch of commands, returning a human-readable execution log
    pub fn execute_commands(&mut self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut log_entries = Vec::with_capacity(commands.len());
        for cmd in commands {
            self.execute_command(cmd)?;
            log_entries.push(format!("✓ Executed: {}", label(cmd)));
        }
        Ok(log_entries)
    }

    /// Execute a single command
    pub fn execute_command(&mut self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {
                // No-op command, nothing to execute
            }

            Cmd::Countdown(CountdownCmd::StartTicker) => {
                // At most one ticker may live; a replaced one is cancelled
                // before the new one spawns.
                if let Some(old) = self.ticker.take() {
                    log::warn!("StartTicker replaced a live countdown ticker");
                    old.cancel();
                }
                self.ticker = Some(CountdownTicker::spawn(TICK_PERIOD, self.raw_tx.clone()));
            }

            Cmd::Countdown(CountdownCmd::StopTicker) => {
                if let Some(ticker) = self.ticker.take() {
                    ticker.cancel();
                } else {
                    log::debug!("StopTicker ignored: no live ticker");
                }
            }

            Cmd::PickQuote => {
                let quote = self.quote_source.pick();
                self.msg_tx
                    .send(Msg::Session(SessionMsg::QuotePicked(quote.to_string())))?;
            }

            Cmd::SaveName { name } => match &self.name_store {
                Some(store) => {
                    if let Err(e) = store.save(name) {
                        log::warn!("failed to persist name: {e}");
                    }
                }
                None => {
                    log::debug!("SaveName ignored: name persistence disabled");
                }
            },

            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.execute_command(cmd)?;
                }
            }
        }
        Ok(())
    }
}

impl Drop for CmdExecutor {
    fn drop(&mut self) {
        // Teardown cancels any outstanding ticker.
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }
}

fn label(cmd: &Cmd) -> &'static str {
    match cmd {
        Cmd::Countdown(CountdownCmd::StartTicker) => "StartTicker",
        Cmd::Countdown(CountdownCmd::StopTicker) => "StopTicker",
        Cmd::PickQuote => "PickQuote",
        Cmd::SaveName { .. } => "SaveName",
        Cmd::Batch(..) => "Batch",
        Cmd::None => "None",
    }
}
